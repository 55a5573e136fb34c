//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the dashboard store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Dashboard data file does not exist yet
    #[error("Dashboard data file not found: {0}")]
    NotInitialized(String),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(String),

    /// The data file is not a valid dashboard document
    #[error("Invalid dashboard document: {0}")]
    InvalidDocument(String),

    /// A record with the same (name, method, path) triple already exists
    #[error("API already exists")]
    DuplicateRecord,

    /// No record with the given id
    #[error("API not found: {0}")]
    RecordNotFound(String),

    /// The record payload violates a model constraint
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
