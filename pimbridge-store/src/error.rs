//! Error types for the backing store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in backing store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record carries the requested identity.
    #[error("record not found: {0}")]
    NotFound(String),

    /// The store failed to read or write a record.
    #[error("backend error: {0}")]
    Backend(String),

    /// A filter expression could not be evaluated.
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// The picture could not be decoded or attached.
    #[error("photo error: {0}")]
    Photo(String),

    /// A previous holder of the store lock panicked.
    #[error("store lock poisoned")]
    LockPoisoned,
}
