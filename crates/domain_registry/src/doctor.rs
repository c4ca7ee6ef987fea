//! Doctor aggregate and request shapes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{DepartmentId, DoctorId, HospitalId, SpecialtyId};

use crate::common::{AuditStamp, ResourceStatus};

/// A doctor as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub doctor_id: DoctorId,
    pub doctor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    pub hospital_id: HospitalId,
    pub department_id: DepartmentId,
    pub department_name: String,
    pub specialty_id: SpecialtyId,
    pub specialty_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub status: ResourceStatus,
    #[serde(flatten)]
    pub audit: AuditStamp,
}

/// Filters accepted by the doctor list endpoint
#[derive(Debug, Clone, Default, Serialize)]
pub struct DoctorFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

impl DoctorFilters {
    pub fn by_specialty(specialty: impl Into<String>) -> Self {
        Self {
            specialty_name: Some(specialty.into()),
            ..Default::default()
        }
    }

    pub fn by_department(department: impl Into<String>) -> Self {
        Self {
            department_name: Some(department.into()),
            ..Default::default()
        }
    }

    pub fn active() -> Self {
        Self {
            status: Some(ResourceStatus::Active),
            ..Default::default()
        }
    }
}

/// Payload for creating a doctor
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateDoctorRequest {
    #[validate(length(min = 1, message = "Doctor name is required"))]
    pub doctor_name: String,
    #[validate(length(min = 1, message = "Specialty is required"))]
    pub specialty_name: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[validate(range(max = 80, message = "Experience years out of range"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_fee: Option<Decimal>,
    #[validate(length(min = 10, message = "Contact number must have at least 10 digits"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

/// Payload for updating a doctor; absent fields stay unchanged
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateDoctorRequest {
    #[validate(length(min = 1, message = "Doctor name cannot be blank"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_fee: Option<Decimal>,
    #[validate(length(min = 10, message = "Contact number must have at least 10 digits"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateDoctorRequest {
        CreateDoctorRequest {
            doctor_name: "Dr. Prakash Nair".to_string(),
            specialty_name: "Cardiology".to_string(),
            department_name: "Cardiac Sciences".to_string(),
            qualification: Some("MD, DM".to_string()),
            experience_years: Some(15),
            consultation_fee: None,
            contact_number: Some("+919876543210".to_string()),
            email: Some("p.nair@hospital.example".to_string()),
            availability: None,
        }
    }

    #[test]
    fn test_create_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_requires_name() {
        let mut req = valid_request();
        req.doctor_name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_bad_email() {
        let mut req = valid_request();
        req.email = Some("nope".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_short_phone() {
        let mut req = valid_request();
        req.contact_number = Some("12345".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_filters_serialize_sparsely() {
        let filters = DoctorFilters::by_specialty("Cardiology");
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["specialty_name"], "Cardiology");
        assert!(json.get("department_name").is_none());
    }
}
