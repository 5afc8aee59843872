//! Store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure or non-success status from the REST backend.
    #[error("Insert failed: {0}")]
    Insert(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
