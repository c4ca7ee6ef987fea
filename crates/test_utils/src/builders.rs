//! Builder patterns for test data construction
//!
//! Builders start from plausible faked defaults and let a test override
//! just the fields it cares about.

use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{DepartmentId, DoctorId, HospitalId, SpecialtyId, TdsMappingId};
use domain_claims::ClaimFormData;
use domain_registry::{AuditStamp, Doctor, Payer, PayerType, ResourceStatus};
use domain_billing::TdsMapping;

/// Builds a `Doctor` with faked defaults
pub struct DoctorBuilder {
    doctor: Doctor,
}

impl DoctorBuilder {
    pub fn new() -> Self {
        Self {
            doctor: Doctor {
                doctor_id: DoctorId::new(),
                doctor_name: format!("Dr. {}", Name().fake::<String>()),
                doctor_code: None,
                email: Some(SafeEmail().fake()),
                contact_number: Some("+919876543210".to_string()),
                hospital_id: HospitalId::new(),
                department_id: DepartmentId::new(),
                department_name: "Cardiac Sciences".to_string(),
                specialty_id: SpecialtyId::new(),
                specialty_name: "Cardiology".to_string(),
                qualification: Some("MD".to_string()),
                experience_years: Some(10),
                consultation_fee: Some(dec!(800)),
                availability: None,
                status: ResourceStatus::Active,
                audit: AuditStamp::default(),
            },
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.doctor.doctor_name = name.into();
        self
    }

    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.doctor.specialty_name = specialty.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.doctor.status = ResourceStatus::Inactive;
        self
    }

    pub fn build(self) -> Doctor {
        self.doctor
    }
}

impl Default for DoctorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a `Payer` with faked defaults
pub struct PayerBuilder {
    payer: Payer,
}

impl PayerBuilder {
    pub fn new() -> Self {
        Self {
            payer: Payer {
                id: core_kernel::PayerId::new(),
                name: CompanyName().fake(),
                payer_type: PayerType::InsuranceCompany,
                code: "PYR-001".to_string(),
                status: Some(ResourceStatus::Active),
                address: None,
                contact_email: Some(SafeEmail().fake()),
                contact_person: Some(Name().fake()),
            },
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.payer.name = name.into();
        self
    }

    pub fn of_type(mut self, payer_type: PayerType) -> Self {
        self.payer.payer_type = payer_type;
        self
    }

    pub fn build(self) -> Payer {
        self.payer
    }
}

impl Default for PayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a `TdsMapping` with sane defaults
pub struct TdsMappingBuilder {
    mapping: TdsMapping,
}

impl TdsMappingBuilder {
    pub fn new() -> Self {
        Self {
            mapping: TdsMapping {
                id: TdsMappingId::new(),
                provider_name: "City Hospital".to_string(),
                payer_name: CompanyName().fake(),
                tds_percentage: dec!(10),
                effective_date: None,
                description: None,
                status: ResourceStatus::Active,
            },
        }
    }

    pub fn percentage(mut self, pct: Decimal) -> Self {
        self.mapping.tds_percentage = pct;
        self
    }

    pub fn between(mut self, provider: impl Into<String>, payer: impl Into<String>) -> Self {
        self.mapping.provider_name = provider.into();
        self.mapping.payer_name = payer.into();
        self
    }

    pub fn build(self) -> TdsMapping {
        self.mapping
    }
}

impl Default for TdsMappingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a submit-ready `ClaimFormData` by replaying edits through the
/// form reducer, the same path the UI takes
pub struct ClaimFormBuilder {
    edits: Vec<(&'static str, String)>,
}

impl ClaimFormBuilder {
    pub fn new() -> Self {
        Self {
            edits: vec![
                ("patient_name", Name().fake::<String>()),
                ("age", "42".to_string()),
                ("gender", "FEMALE".to_string()),
                ("beneficiary_type", "SELF".to_string()),
                ("relationship", "SELF".to_string()),
                ("authorization_number", "AUTH-991".to_string()),
                ("total_authorized_amount", "50000".to_string()),
                ("payer_type", "INSURANCE COMPANY".to_string()),
                ("payer_name", CompanyName().fake::<String>()),
                ("specialty", "Cardiology".to_string()),
                ("doctor", format!("Dr. {}", Name().fake::<String>())),
                ("service_start_date", "2026-01-10".to_string()),
                ("service_end_date", "2026-01-14".to_string()),
                ("admission_type", "PLANNED".to_string()),
                ("ward_type", "GENERAL".to_string()),
                ("final_diagnosis", "CAD".to_string()),
                ("treatment_done", "Angioplasty".to_string()),
                ("bill_number", "B-2212".to_string()),
                ("bill_date", "2026-01-14".to_string()),
                ("total_bill_amount", "10000".to_string()),
                ("patient_discount_amount", "500".to_string()),
                ("amount_paid_by_patient", "1500".to_string()),
                ("mou_discount_amount", "200".to_string()),
            ],
        }
    }

    /// Overrides or appends one field edit
    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.edits.push((field, value.into()));
        self
    }

    pub fn build(self) -> ClaimFormData {
        let mut form = ClaimFormData::new();
        for (field, value) in self.edits {
            form = form.apply_change(field, &value);
        }
        form
    }
}

impl Default for ClaimFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}
