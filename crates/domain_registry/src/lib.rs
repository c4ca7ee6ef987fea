//! Hospital Resource Registry Domain
//!
//! Typed models, request shapes, and validation for the resources the
//! portal administers: doctors, staff, departments, specialties, wards,
//! and payers with their affiliation workflows. Every backend response is
//! parsed into these structures at the boundary; nothing downstream works
//! on loose JSON.
//!
//! Port traits at the bottom of the crate describe what each screen needs
//! from the backend; the HTTP infrastructure implements them.

pub mod common;
pub mod department;
pub mod doctor;
pub mod error;
pub mod payer;
pub mod ports;
pub mod specialty;
pub mod staff;
pub mod validation;
pub mod ward;

pub use common::{AuditStamp, Paginated, Pagination, ResourceStatus};
pub use department::{
    CreateDepartmentRequest, Department, DepartmentFilters, DepartmentType,
    UpdateDepartmentRequest,
};
pub use doctor::{CreateDoctorRequest, Doctor, DoctorFilters, UpdateDoctorRequest};
pub use error::RegistryError;
pub use payer::{
    AvailablePayers, CreatePayerAffiliationRequest, Payer, PayerAffiliation,
    PayerAffiliationFilters, PayerLookup, PayerType, UpdatePayerAffiliationRequest,
};
pub use ports::{
    BulkUploadFile, DepartmentsPort, DoctorsPort, PayersPort, SpecialtiesPort, StaffPort,
    WardsPort,
};
pub use specialty::{Specialty, SpecialtyAffiliation};
pub use staff::{CreateStaffRequest, Staff, StaffFilters, UpdateStaffRequest};
pub use validation::RegistryValidator;
pub use ward::Ward;
