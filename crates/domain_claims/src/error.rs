//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Claim validation failed: {0}")]
    ValidationFailed(String),

    #[error("Claimed amount exceeds authorized amount")]
    ExceedsAuthorizedAmount,

    #[error("Draft not found: {0}")]
    DraftNotFound(String),

    #[error("Mandatory documents missing: {0}")]
    MissingDocuments(String),
}

impl ClaimError {
    /// Creates a ValidationFailed error from collected validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        ClaimError::ValidationFailed(errors.join("; "))
    }
}
