//! Department aggregate and request shapes

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{DepartmentId, HospitalId};

use crate::common::{AuditStamp, ResourceStatus};

/// Functional classification of a department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepartmentType {
    #[serde(rename = "CLINICAL")]
    Clinical,
    #[serde(rename = "NON-CLINICAL")]
    NonClinical,
    #[serde(rename = "SUPPORTIVE")]
    Supportive,
    #[serde(rename = "AUXILIARY")]
    Auxiliary,
}

/// A department as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub department_id: DepartmentId,
    pub department_name: String,
    pub department_type: DepartmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_of_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    pub hospital_id: HospitalId,
    pub status: ResourceStatus,
    #[serde(flatten)]
    pub audit: AuditStamp,
}

/// Filters accepted by the department list endpoint
#[derive(Debug, Clone, Default, Serialize)]
pub struct DepartmentFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_inactive: Option<bool>,
}

/// Payload for creating a department
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, message = "Department name is required"))]
    pub department_name: String,
    pub department_type: DepartmentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_of_contact: Option<String>,
    #[validate(length(min = 10, message = "Phone number must have at least 10 digits"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_no: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
}

/// Payload for updating a department; absent fields stay unchanged
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, message = "Department name cannot be blank"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_type: Option<DepartmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_of_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_no: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}
