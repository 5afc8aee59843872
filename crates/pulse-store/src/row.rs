//! Persistable quote row.

use chrono::{DateTime, Utc};
use pulse_core::{Price, Quote};
use serde::{Deserialize, Serialize};

/// One row of the time-series table.
///
/// Column names match the destination schema: the venue is stored in the
/// `exchange` column and the aggregation timestamp in `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRow {
    pub timestamp: DateTime<Utc>,
    pub token: String,
    pub exchange: String,
    pub mid: Price,
    pub bid: Price,
    pub ask: Price,
}

impl From<&Quote> for QuoteRow {
    fn from(quote: &Quote) -> Self {
        Self {
            timestamp: quote.observed_at,
            token: quote.token.to_string(),
            exchange: quote.venue.to_string(),
            mid: quote.mid,
            bid: quote.bid,
            ask: quote.ask,
        }
    }
}
