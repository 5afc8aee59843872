//! One collection run: aggregate, route, persist, report.

use crate::routing::RoutingTable;
use pulse_aggregator::Aggregator;
use pulse_store::{DynQuoteStore, QuoteRow};
use pulse_telemetry::metrics;
use serde::Serialize;
use tracing::{error, info, warn};

/// Outcome of one collection run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub success: bool,
    pub inserted: usize,
    pub message: String,
}

impl RunReport {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            inserted: 0,
            message,
        }
    }

    /// HTTP-style status code for the run.
    pub fn status_code(&self) -> u16 {
        if self.success {
            200
        } else {
            500
        }
    }
}

/// Executes collection runs.
///
/// A run is fatal only when at least one non-empty destination batch
/// existed and every insert failed; anything short of that reports
/// success with whatever was persisted.
pub struct CollectorJob {
    aggregator: Aggregator,
    store: DynQuoteStore,
    routing: RoutingTable,
    tokens: Vec<String>,
}

impl CollectorJob {
    pub fn new(
        aggregator: Aggregator,
        store: DynQuoteStore,
        routing: RoutingTable,
        tokens: Vec<String>,
    ) -> Self {
        Self {
            aggregator,
            store,
            routing,
            tokens,
        }
    }

    /// Run one collection pass.
    ///
    /// Tokens are aggregated one at a time; a token whose aggregation
    /// call is rejected is skipped and the run continues.
    pub async fn run_once(&self) -> RunReport {
        let mut rows: Vec<QuoteRow> = Vec::new();
        for symbol in &self.tokens {
            match self
                .aggregator
                .aggregate_symbols(std::slice::from_ref(symbol))
                .await
            {
                Ok(table) => rows.extend(table.quotes().map(QuoteRow::from)),
                Err(e) => {
                    warn!(%symbol, error = %e, "Aggregation rejected token, skipping");
                }
            }
        }

        if rows.is_empty() {
            // Nothing collected is a degraded-but-valid outcome
            warn!("No quotes collected this run");
            metrics::RUNS_TOTAL.with_label_values(&["empty"]).inc();
            return RunReport {
                success: true,
                inserted: 0,
                message: "no quotes collected".to_string(),
            };
        }

        let partitions = self.routing.partition(rows);
        let attempted = partitions.len();
        let mut inserted = 0usize;
        let mut failed = 0usize;

        for (destination, batch) in &partitions {
            match self.store.insert(destination, batch).await {
                Ok(accepted) => {
                    inserted += accepted;
                    metrics::ROWS_INSERTED_TOTAL
                        .with_label_values(&[destination])
                        .inc_by(accepted as f64);
                }
                Err(e) => {
                    failed += 1;
                    warn!(%destination, error = %e, "Destination insert failed");
                }
            }
        }

        if failed == attempted {
            error!(attempted, "Every destination insert failed");
            metrics::RUNS_TOTAL.with_label_values(&["failed"]).inc();
            return RunReport::failure(format!("all {attempted} destination inserts failed"));
        }

        metrics::RUNS_TOTAL.with_label_values(&["success"]).inc();
        let message = if failed == 0 {
            format!("inserted {inserted} rows")
        } else {
            format!("inserted {inserted} rows; {failed} of {attempted} destinations failed")
        };
        info!(inserted, failed, attempted, "Collection run complete");
        RunReport {
            success: true,
            inserted,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let ok = RunReport {
            success: true,
            inserted: 4,
            message: "inserted 4 rows".to_string(),
        };
        assert_eq!(ok.status_code(), 200);

        let failed = RunReport::failure("all 2 destination inserts failed".to_string());
        assert_eq!(failed.status_code(), 500);
        assert_eq!(failed.inserted, 0);
    }

    #[test]
    fn test_report_json_shape() {
        let report = RunReport {
            success: true,
            inserted: 2,
            message: "inserted 2 rows".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["inserted"], 2);
        assert!(json["message"].is_string());
    }
}
