//! Session domain errors

use thiserror::Error;

/// Errors that can occur while reading or writing the stored session
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing store could not be read or written
    #[error("Session storage error: {0}")]
    Storage(String),

    /// The stored session payload could not be (de)serialized
    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem failure in the file-backed store
    #[error("Session I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    pub fn storage(message: impl Into<String>) -> Self {
        SessionError::Storage(message.into())
    }
}
