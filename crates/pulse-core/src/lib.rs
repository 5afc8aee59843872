//! Core domain types for the pulse quote collector.
//!
//! This crate provides fundamental types used throughout the pipeline:
//! - `Token`: symbol identifier from the configured allow-list
//! - `Venue`: enumerated venue identifier
//! - `Price`: precision-safe decimal price
//! - `OrderBookTop`, `Quote`: top-of-book data and normalized records

pub mod decimal;
pub mod error;
pub mod market;
pub mod types;

pub use decimal::Price;
pub use error::{CoreError, Result};
pub use market::{Token, Venue};
pub use types::{OrderBookTop, Quote};
