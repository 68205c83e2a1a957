//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-success status and its body text to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => Self::Validation(body),
            401 => Self::Unauthorized,
            403 => Self::Forbidden(body),
            404 => Self::NotFound(body),
            _ => Self::Server { status, body },
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
