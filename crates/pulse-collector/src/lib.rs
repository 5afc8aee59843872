//! Periodic top-of-book quote collector.
//!
//! Main application that wires the components together:
//! - venue adapters built from configuration
//! - cross-venue quote aggregation
//! - token-based routing to storage destinations
//! - append-only persistence with a per-run report

pub mod app;
pub mod config;
pub mod error;
pub mod job;
pub mod routing;

pub use app::Application;
pub use config::CollectorConfig;
pub use error::{AppError, AppResult};
pub use job::{CollectorJob, RunReport};
pub use routing::RoutingTable;
