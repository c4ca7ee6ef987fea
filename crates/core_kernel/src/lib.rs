//! Core Kernel - Foundational types and utilities for the provider admin system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers for backend resources
//! - Port infrastructure shared by every domain adapter

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;
pub mod validation;

pub use money::{Money, Currency, Rate, MoneyError};
pub use identifiers::{
    HospitalId, UserId, DoctorId, StaffId, DepartmentId, SpecialtyId, WardId,
    PayerId, AffiliationId, TariffId, LineItemId, TdsMappingId,
    ClaimId, DraftId, DocumentId,
};
pub use error::CoreError;
pub use ports::{BulkOutcome, DomainPort, OperationMetadata, PortError};
pub use validation::ValidationResult;
