//! Prometheus metrics and structured logging.
//!
//! - structured logging with tracing (JSON in production)
//! - counters for collected quotes, venue failures, inserted rows, runs

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
