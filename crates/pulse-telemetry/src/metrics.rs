//! Prometheus metrics for the quote collector.
//!
//! # Panics
//!
//! Metric registration uses `unwrap()` intentionally. If registration
//! fails it indicates a fatal configuration error (e.g. duplicate metric
//! names) that should crash at startup rather than fail silently. These
//! panics only occur during static initialization, never at runtime.

use once_cell::sync::Lazy;
use prometheus::{register_counter_vec, CounterVec};

/// Quotes collected, per venue.
pub static QUOTES_COLLECTED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "pulse_quotes_collected_total",
        "Total quotes collected",
        &["venue"]
    )
    .unwrap()
});

/// Venue fetch failures, per venue and failure kind.
pub static VENUE_FAILURES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "pulse_venue_failures_total",
        "Total venue fetch failures",
        &["venue", "kind"]
    )
    .unwrap()
});

/// Rows accepted by the store, per destination.
pub static ROWS_INSERTED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "pulse_rows_inserted_total",
        "Total rows accepted by the store",
        &["destination"]
    )
    .unwrap()
});

/// Completed collection runs, per outcome.
pub static RUNS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "pulse_runs_total",
        "Total collection runs",
        &["outcome"]
    )
    .unwrap()
});
