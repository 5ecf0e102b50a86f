// Service-level error type
//
// Handlers map each variant to an HTTP status; see api::common.

use eventstats_core::ValidationError;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors returned by the services layer
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected at the validation boundary
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Record conflicts with an existing one
    #[error("{0}")]
    Conflict(String),

    /// Requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Storage or other internal failure
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        ServiceError::Conflict(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        ServiceError::NotFound(msg.into())
    }
}
