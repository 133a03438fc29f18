//! Typed error enum for the storage layer.
//!
//! Lets callers match on validation and schema failures instead of
//! downcasting opaque boxes.

use argo_core::AnnotationError;
use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Rows cannot form a single `profiles` table.
    #[error("schema error: {0}")]
    Schema(String),

    /// Rejected annotation input; nothing was written.
    #[error("validation error: {0}")]
    Validation(#[from] AnnotationError),

    /// Caller passed an argument outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// SQL failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// A thread panicked while holding the profile table guard.
    #[error("profile table guard poisoned")]
    LockPoisoned,
}

impl StorageError {
    /// Whether this error was caused by the caller's input rather than the store.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::Schema(_) | Self::Validation(_) | Self::InvalidArgument(_))
    }
}
