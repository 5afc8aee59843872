//! Venue adapter error types.
//!
//! An unmapped market is deliberately not an error variant: adapters
//! return `Ok(None)` for it, so it can never be logged or escalated as a
//! failure requiring operator action.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VenueError {
    /// Transport failure or non-success response status.
    #[error("Network error: {0}")]
    Network(String),

    /// Response parsed but lacks the required best bid/ask levels,
    /// or a price field is not a valid decimal.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl VenueError {
    /// Stable failure-kind label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::MalformedResponse(_) => "malformed",
            Self::HttpClient(_) => "http_client",
        }
    }
}

pub type VenueResult<T> = Result<T, VenueError>;
