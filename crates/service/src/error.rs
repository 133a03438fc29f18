//! Typed error enum for the service layer.
//!
//! Lifts caller mistakes out of [`StorageError`] so front ends can map them
//! to client errors without inspecting storage internals.

use argo_core::{AnnotationError, FilterError};
use argo_storage::StorageError;
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, pool, lock).
    #[error("storage: {0}")]
    Storage(#[source] StorageError),

    /// Argument outside the accepted domain (non-positive limit, inverted range).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Annotation input rejected before reaching the store.
    #[error("validation: {0}")]
    Validation(#[from] AnnotationError),
}

impl ServiceError {
    /// Whether the caller, not the backend, is at fault.
    pub fn is_caller_error(&self) -> bool {
        match self {
            Self::InvalidArgument(_) | Self::Validation(_) => true,
            Self::Storage(e) => e.is_caller_error(),
        }
    }
}

/// Caller errors keep their kind; everything else wraps as `Storage`.
///
/// - `Validation` → `Validation`
/// - `InvalidArgument` → `InvalidArgument`
/// - Everything else → `Storage`
impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => Self::Validation(e),
            StorageError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            other => Self::Storage(other),
        }
    }
}

impl From<FilterError> for ServiceError {
    fn from(err: FilterError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
