//! Application-level errors

use thiserror::Error;

use auth_session::SessionError;
use core_kernel::PortError;

/// Errors surfaced to the UI shell
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-side validation failed; the request was never dispatched
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The backend rejected the operation
    #[error(transparent)]
    Port(#[from] PortError),

    /// The session store could not be read or written
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// True if the shell should route to the login screen
    pub fn requires_login(&self) -> bool {
        matches!(self, AppError::Port(e) if e.is_unauthorized())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        AppError::Validation(messages)
    }
}
