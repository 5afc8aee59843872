//! Token fan-out and result merging.

use crate::error::{AggregateError, AggregateResult};
use crate::table::PriceTable;
use chrono::Utc;
use pulse_core::{Quote, Token};
use pulse_telemetry::metrics;
use pulse_venues::DynBookSource;
use tracing::{debug, warn};

/// Aggregates top-of-book quotes across all configured sources.
///
/// Each token is fanned out to every source; both fetches are attempted
/// regardless of each other's outcome. Token processing is sequential by
/// design, trading throughput for per-step failure isolation.
pub struct Aggregator {
    sources: Vec<DynBookSource>,
}

impl Aggregator {
    pub fn new(sources: Vec<DynBookSource>) -> Self {
        Self { sources }
    }

    /// Collect quotes for a set of tokens.
    ///
    /// A timestamp is snapped once per token, so that token's venue quotes
    /// share it; tokens later in the run carry later timestamps. Per-cell
    /// failures are logged and omitted, never escalated.
    pub async fn aggregate(&self, tokens: &[Token]) -> PriceTable {
        let mut table = PriceTable::new();

        for token in tokens {
            let observed_at = Utc::now();

            for source in &self.sources {
                let venue = source.venue();
                match source.fetch_top(token).await {
                    Ok(Some(top)) => {
                        debug!(%token, %venue, bid = %top.bid, ask = %top.ask, "Fetched top of book");
                        metrics::QUOTES_COLLECTED_TOTAL
                            .with_label_values(&[venue.as_str()])
                            .inc();
                        table.insert(Quote::from_top(token.clone(), venue, top, observed_at));
                    }
                    // Unmapped market: absence, not an error.
                    Ok(None) => {}
                    Err(e) => {
                        warn!(%token, %venue, error = %e, "Venue fetch failed, omitting cell");
                        metrics::VENUE_FAILURES_TOTAL
                            .with_label_values(&[venue.as_str(), e.kind()])
                            .inc();
                    }
                }
            }
        }

        table
    }

    /// Collect quotes for raw symbol strings.
    ///
    /// Returns a top-level error only when the request itself is malformed
    /// (a blank symbol); fetch failures still just omit cells.
    pub async fn aggregate_symbols(&self, symbols: &[String]) -> AggregateResult<PriceTable> {
        let tokens = symbols
            .iter()
            .map(|s| Token::new(s))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AggregateError::InvalidRequest(e.to_string()))?;

        Ok(self.aggregate(&tokens).await)
    }
}
