//! Registry Domain Ports
//!
//! One port trait per resource family, defining what the list and form
//! screens need from the backend. The HTTP gateway implements these against
//! the remote REST API; tests use in-memory mocks.
//!
//! Bulk uploads pass the file through untouched: the backend owns parsing
//! and row-level validation, and answers with the per-row outcome.

use async_trait::async_trait;

use core_kernel::{
    AffiliationId, BulkOutcome, DepartmentId, DoctorId, DomainPort, PayerId, PortError, StaffId,
};

use crate::common::Paginated;
use crate::department::{CreateDepartmentRequest, Department, DepartmentFilters, UpdateDepartmentRequest};
use crate::doctor::{CreateDoctorRequest, Doctor, DoctorFilters, UpdateDoctorRequest};
use crate::payer::{
    AvailablePayers, CreatePayerAffiliationRequest, Payer, PayerAffiliation,
    PayerAffiliationFilters, PayerType, UpdatePayerAffiliationRequest,
};
use crate::specialty::{Specialty, SpecialtyAffiliation};
use crate::staff::{CreateStaffRequest, Staff, StaffFilters, UpdateStaffRequest};
use crate::ward::Ward;

/// An uploaded file passed through to a backend bulk endpoint
#[derive(Debug, Clone)]
pub struct BulkUploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Backend operations behind the doctors screens
#[async_trait]
pub trait DoctorsPort: DomainPort {
    async fn list_doctors(&self, filters: &DoctorFilters) -> Result<Paginated<Doctor>, PortError>;

    async fn get_doctor(&self, id: DoctorId) -> Result<Doctor, PortError>;

    async fn create_doctor(&self, request: &CreateDoctorRequest) -> Result<Doctor, PortError>;

    async fn update_doctor(
        &self,
        id: DoctorId,
        request: &UpdateDoctorRequest,
    ) -> Result<Doctor, PortError>;

    async fn delete_doctor(&self, id: DoctorId) -> Result<(), PortError>;

    /// Uploads a doctors file for server-side bulk creation
    async fn bulk_upload(&self, file: BulkUploadFile) -> Result<BulkOutcome<String>, PortError>;

    /// Names of departments doctors can be assigned to
    async fn available_departments(&self) -> Result<Vec<String>, PortError>;
}

/// Backend operations behind the staff screens
#[async_trait]
pub trait StaffPort: DomainPort {
    async fn list_staff(&self, filters: &StaffFilters) -> Result<Paginated<Staff>, PortError>;

    async fn get_staff(&self, id: StaffId) -> Result<Staff, PortError>;

    async fn create_staff(&self, request: &CreateStaffRequest) -> Result<Staff, PortError>;

    async fn update_staff(
        &self,
        id: StaffId,
        request: &UpdateStaffRequest,
    ) -> Result<Staff, PortError>;

    async fn delete_staff(&self, id: StaffId) -> Result<(), PortError>;

    async fn bulk_upload(&self, file: BulkUploadFile) -> Result<BulkOutcome<String>, PortError>;
}

/// Backend operations behind the departments screens
#[async_trait]
pub trait DepartmentsPort: DomainPort {
    async fn list_departments(
        &self,
        filters: &DepartmentFilters,
    ) -> Result<Paginated<Department>, PortError>;

    async fn get_department(&self, id: DepartmentId) -> Result<Department, PortError>;

    async fn create_department(
        &self,
        request: &CreateDepartmentRequest,
    ) -> Result<Department, PortError>;

    async fn update_department(
        &self,
        id: DepartmentId,
        request: &UpdateDepartmentRequest,
    ) -> Result<Department, PortError>;

    async fn delete_department(&self, id: DepartmentId) -> Result<(), PortError>;
}

/// Backend operations behind the specialty screens
#[async_trait]
pub trait SpecialtiesPort: DomainPort {
    /// The master specialty catalogue
    async fn available_specialties(&self) -> Result<Vec<Specialty>, PortError>;

    /// The hospital's current affiliation record
    async fn specialty_affiliation(&self) -> Result<SpecialtyAffiliation, PortError>;

    /// Creates or replaces the affiliation record
    async fn save_specialty_affiliation(
        &self,
        affiliation: &SpecialtyAffiliation,
    ) -> Result<SpecialtyAffiliation, PortError>;

    /// Adds specialties to the existing record
    async fn add_specialties(
        &self,
        names: &[String],
    ) -> Result<SpecialtyAffiliation, PortError>;

    /// Names of the hospital's affiliated specialties
    async fn affiliated_specialty_names(&self) -> Result<Vec<String>, PortError>;
}

/// Backend operations behind the ward lookups
#[async_trait]
pub trait WardsPort: DomainPort {
    async fn list_wards(&self) -> Result<Vec<Ward>, PortError>;
}

/// Backend operations behind the payer affiliation screens
#[async_trait]
pub trait PayersPort: DomainPort {
    async fn list_affiliations(
        &self,
        filters: &PayerAffiliationFilters,
    ) -> Result<Paginated<PayerAffiliation>, PortError>;

    async fn get_affiliation(&self, id: AffiliationId) -> Result<PayerAffiliation, PortError>;

    async fn create_affiliation(
        &self,
        request: &CreatePayerAffiliationRequest,
    ) -> Result<PayerAffiliation, PortError>;

    async fn update_affiliation(
        &self,
        id: AffiliationId,
        request: &UpdatePayerAffiliationRequest,
    ) -> Result<PayerAffiliation, PortError>;

    async fn delete_affiliation(&self, id: AffiliationId) -> Result<(), PortError>;

    /// Affiliates many payers in one backend call; the backend reports the
    /// per-payer outcome
    async fn bulk_affiliate(
        &self,
        payer_names: &[String],
    ) -> Result<BulkOutcome<String>, PortError>;

    /// The catalogue split into affiliated and unaffiliated payers
    async fn available_payers(&self) -> Result<AvailablePayers, PortError>;

    /// Payers filtered by type
    async fn payers_by_type(&self, payer_type: PayerType) -> Result<Vec<Payer>, PortError>;

    /// Full catalogue record for one payer
    async fn payer_details(&self, id: PayerId) -> Result<Payer, PortError>;
}
