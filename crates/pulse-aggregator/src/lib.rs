//! Cross-venue quote aggregation.
//!
//! Fans each requested token out to every configured book source and
//! merges the successful results into a per-venue, per-token quote table.
//! Per-cell failures are contained here: a failed or unmapped fetch omits
//! exactly that (token, venue) cell and nothing else.

pub mod aggregator;
pub mod api;
pub mod error;
pub mod table;

pub use aggregator::Aggregator;
pub use api::{AggregateRequest, AggregateResponse, ErrorResponse, QuoteCell};
pub use error::{AggregateError, AggregateResult};
pub use table::PriceTable;
