//! Registry domain errors

use thiserror::Error;

/// Errors that can occur in the registry domain
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Duplicate resource: {0}")]
    Duplicate(String),

    #[error("Invalid resource data: {0}")]
    InvalidData(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Payer is not affiliated: {0}")]
    PayerNotAffiliated(String),
}

impl RegistryError {
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        RegistryError::NotFound(id.to_string())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        RegistryError::InvalidData(message.into())
    }

    /// Creates a ValidationFailed error from collected validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        RegistryError::ValidationFailed(errors.join("; "))
    }
}
