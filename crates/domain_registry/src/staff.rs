//! Staff aggregate and request shapes

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{DepartmentId, HospitalId, StaffId};

use crate::common::{AuditStamp, ResourceStatus};

/// A staff member as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub staff_id: StaffId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub department_id: DepartmentId,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u8>,
    pub hospital_id: HospitalId,
    pub status: ResourceStatus,
    #[serde(flatten)]
    pub audit: AuditStamp,
}

/// Filters accepted by the staff list endpoint
#[derive(Debug, Clone, Default, Serialize)]
pub struct StaffFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

impl StaffFilters {
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

/// Payload for creating a staff member
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateStaffRequest {
    #[validate(length(min = 1, message = "Staff name is required"))]
    pub staff_name: String,
    #[validate(length(min = 10, message = "Contact number must have at least 10 digits"))]
    pub contact_number: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department_name: String,
}

/// Payload for updating a staff member; absent fields stay unchanged
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateStaffRequest {
    #[validate(length(min = 1, message = "Staff name cannot be blank"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(min = 10, message = "Contact number must have at least 10 digits"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_staff_request_validation() {
        let req = CreateStaffRequest {
            staff_name: "Lakshmi Menon".to_string(),
            contact_number: "+918877665544".to_string(),
            email: "l.menon@hospital.example".to_string(),
            department_name: "Front Office".to_string(),
        };
        assert!(req.validate().is_ok());

        let bad = CreateStaffRequest {
            email: "broken".to_string(),
            ..req
        };
        assert!(bad.validate().is_err());
    }
}
