//! Registry validation rules
//!
//! Aggregate-level checks that go beyond the per-field `validator` derives
//! on the request types. These run client-side before a mutation is
//! dispatched; a failure blocks the request with the collected messages.

use core_kernel::ValidationResult;

use crate::doctor::Doctor;
use crate::payer::{Payer, PayerType};
use crate::staff::Staff;

/// Validator for registry entities
pub struct RegistryValidator;

impl RegistryValidator {
    /// Validates a doctor record as loaded or about to be saved
    pub fn validate_doctor(doctor: &Doctor) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if doctor.doctor_name.trim().is_empty() {
            result.add_error("Doctor name is required");
        }
        if doctor.specialty_name.trim().is_empty() {
            result.add_error("Doctor specialty is required");
        }
        if doctor.department_name.trim().is_empty() {
            result.add_error("Doctor department is required");
        }

        if let Some(ref email) = doctor.email {
            Self::check_email(email, &mut result);
        }
        if let Some(ref phone) = doctor.contact_number {
            Self::check_phone(phone, &mut result);
        }
        if let Some(years) = doctor.experience_years {
            if years > 80 {
                result.add_error(format!("Implausible experience: {years} years"));
            }
        }
        if let Some(fee) = doctor.consultation_fee {
            if fee.is_sign_negative() {
                result.add_error("Consultation fee cannot be negative");
            }
        }

        result
    }

    /// Validates a staff record
    pub fn validate_staff(staff: &Staff) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if staff.name.trim().is_empty() {
            result.add_error("Staff name is required");
        }
        if staff.department.trim().is_empty() {
            result.add_error("Staff department is required");
        }
        if let Some(ref email) = staff.email {
            Self::check_email(email, &mut result);
        }
        if let Some(ref phone) = staff.phone_number {
            Self::check_phone(phone, &mut result);
        }

        result
    }

    /// Validates a payer record from the catalogue
    pub fn validate_payer(payer: &Payer) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if payer.name.trim().is_empty() {
            result.add_error("Payer name is required");
        }
        if payer.code.trim().is_empty() {
            result.add_warning("Payer has no code assigned");
        }
        if payer.payer_type == PayerType::Tpa && payer.contact_email.is_none() {
            result.add_warning("TPA payer has no contact email");
        }
        if let Some(ref email) = payer.contact_email {
            Self::check_email(email, &mut result);
        }

        result
    }

    fn check_email(email: &str, result: &mut ValidationResult) {
        if !email.contains('@') || !email.contains('.') {
            result.add_error(format!("Invalid email format: {email}"));
        }
    }

    fn check_phone(phone: &str, result: &mut ValidationResult) {
        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < 10 {
            result.add_error(format!("Phone number too short: {phone}"));
        }
    }
}
