//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Venue error: {0}")]
    Venue(#[from] pulse_venues::VenueError),

    #[error("Store error: {0}")]
    Store(#[from] pulse_store::StoreError),
}

pub type AppResult<T> = Result<T, AppError>;
