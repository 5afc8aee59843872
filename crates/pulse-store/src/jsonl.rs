//! JSON Lines file backend.
//!
//! One file per destination per UTC day, append mode. Each line is a
//! complete JSON object, so an interrupted write corrupts at most one
//! line and files remain readable mid-day.

use crate::error::StoreResult;
use crate::row::QuoteRow;
use crate::store::{BoxFuture, QuoteStore};
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed quote store writing JSON Lines.
pub struct JsonlStore {
    base_dir: PathBuf,
}

impl JsonlStore {
    /// Create a new JSON Lines store rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn file_path(&self, destination: &str) -> PathBuf {
        let date = Utc::now().format("%Y-%m-%d");
        self.base_dir.join(format!("{destination}_{date}.jsonl"))
    }

    fn append(&self, destination: &str, rows: &[QuoteRow]) -> StoreResult<usize> {
        let path = self.file_path(destination);

        // Append mode: never truncates existing rows
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = BufWriter::new(file);

        for row in rows {
            let json = serde_json::to_string(row)?;
            writeln!(writer, "{json}")?;
        }
        writer.flush()?;

        debug!(%destination, path = %path.display(), rows = rows.len(), "Appended quote rows");
        Ok(rows.len())
    }
}

impl QuoteStore for JsonlStore {
    fn insert<'a>(
        &'a self,
        destination: &'a str,
        rows: &'a [QuoteRow],
    ) -> BoxFuture<'a, StoreResult<usize>> {
        Box::pin(async move { self.append(destination, rows) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::Price;
    use rust_decimal_macros::dec;
    use std::io::{BufRead, BufReader};
    use tempfile::TempDir;

    fn row(token: &str) -> QuoteRow {
        QuoteRow {
            timestamp: Utc::now(),
            token: token.to_string(),
            exchange: "paradex".to_string(),
            mid: Price::new(dec!(50010)),
            bid: Price::new(dec!(50005)),
            ask: Price::new(dec!(50015)),
        }
    }

    fn read_lines(path: &Path) -> Vec<String> {
        let file = std::fs::File::open(path).unwrap();
        BufReader::new(file).lines().map(|l| l.unwrap()).collect()
    }

    #[tokio::test]
    async fn test_write_and_read_back() {
        let dir = TempDir::new().unwrap();
        let store = JsonlStore::new(dir.path()).unwrap();

        let accepted = store
            .insert("price_history", &[row("BTC"), row("ETH")])
            .await
            .unwrap();
        assert_eq!(accepted, 2);

        let lines = read_lines(&store.file_path("price_history"));
        assert_eq!(lines.len(), 2);
        let parsed: QuoteRow = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed.token, "BTC");
    }

    #[tokio::test]
    async fn test_append_only_across_inserts() {
        let dir = TempDir::new().unwrap();
        let store = JsonlStore::new(dir.path()).unwrap();

        store.insert("price_history", &[row("BTC")]).await.unwrap();
        store.insert("price_history", &[row("BTC")]).await.unwrap();

        // Two identical runs double the row count: no dedup, no upsert
        let lines = read_lines(&store.file_path("price_history"));
        assert_eq!(lines.len(), 2);
    }

    #[tokio::test]
    async fn test_destinations_are_separate_files() {
        let dir = TempDir::new().unwrap();
        let store = JsonlStore::new(dir.path()).unwrap();

        store.insert("price_history", &[row("ETH")]).await.unwrap();
        store
            .insert("btc_price_history", &[row("BTC")])
            .await
            .unwrap();

        assert_eq!(read_lines(&store.file_path("price_history")).len(), 1);
        assert_eq!(read_lines(&store.file_path("btc_price_history")).len(), 1);
    }
}
