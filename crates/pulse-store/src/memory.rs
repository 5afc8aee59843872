//! In-memory quote store for testing.

use crate::error::{StoreError, StoreResult};
use crate::row::QuoteRow;
use crate::store::{BoxFuture, QuoteStore};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

/// Records inserts per destination; individual destinations can be
/// scripted to fail so partial-persistence paths are testable.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<HashMap<String, Vec<QuoteRow>>>,
    failing: Mutex<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make inserts into `destination` fail from now on.
    pub fn fail_destination(&self, destination: &str) {
        self.failing.lock().insert(destination.to_string());
    }

    /// Rows accepted for one destination so far.
    pub fn rows(&self, destination: &str) -> Vec<QuoteRow> {
        self.rows
            .lock()
            .get(destination)
            .cloned()
            .unwrap_or_default()
    }

    /// Total rows accepted across all destinations.
    pub fn total_rows(&self) -> usize {
        self.rows.lock().values().map(|v| v.len()).sum()
    }

    /// Destinations that received at least one row.
    pub fn destinations(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rows.lock().keys().cloned().collect();
        names.sort();
        names
    }
}

impl QuoteStore for MemoryStore {
    fn insert<'a>(
        &'a self,
        destination: &'a str,
        rows: &'a [QuoteRow],
    ) -> BoxFuture<'a, StoreResult<usize>> {
        Box::pin(async move {
            if self.failing.lock().contains(destination) {
                return Err(StoreError::Insert(format!(
                    "destination {destination} unavailable"
                )));
            }
            self.rows
                .lock()
                .entry(destination.to_string())
                .or_default()
                .extend_from_slice(rows);
            Ok(rows.len())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pulse_core::Price;
    use rust_decimal_macros::dec;

    fn row(token: &str) -> QuoteRow {
        QuoteRow {
            timestamp: Utc::now(),
            token: token.to_string(),
            exchange: "lighter".to_string(),
            mid: Price::new(dec!(100.5)),
            bid: Price::new(dec!(100)),
            ask: Price::new(dec!(101)),
        }
    }

    #[tokio::test]
    async fn test_insert_accumulates() {
        let store = MemoryStore::new();
        store.insert("price_history", &[row("BTC")]).await.unwrap();
        store.insert("price_history", &[row("ETH")]).await.unwrap();

        assert_eq!(store.rows("price_history").len(), 2);
        assert_eq!(store.total_rows(), 2);
    }

    #[tokio::test]
    async fn test_failing_destination_isolated() {
        let store = MemoryStore::new();
        store.fail_destination("btc_price_history");

        let err = store
            .insert("btc_price_history", &[row("BTC")])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Insert(_)));

        // Other destinations unaffected
        let accepted = store.insert("price_history", &[row("ETH")]).await.unwrap();
        assert_eq!(accepted, 1);
    }
}
