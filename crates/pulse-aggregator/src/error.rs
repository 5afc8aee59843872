//! Aggregator error types.
//!
//! Only a malformed aggregation request itself is an error; per-token and
//! per-venue fetch failures surface as absent cells, never as variants
//! here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    /// The request could not be interpreted (e.g. a blank token symbol).
    #[error("Invalid aggregation request: {0}")]
    InvalidRequest(String),
}

pub type AggregateResult<T> = Result<T, AggregateError>;
