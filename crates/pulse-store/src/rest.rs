//! REST table insert backend.
//!
//! Talks to a PostgREST-style endpoint: one `POST {base}/rest/v1/{table}`
//! per destination with a JSON array body. The service key, if the
//! deployment uses one, is read from `PULSE_STORE_API_KEY` and sent as
//! both `apikey` and bearer token.

use crate::error::{StoreError, StoreResult};
use crate::row::QuoteRow;
use crate::store::{BoxFuture, QuoteStore};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Default timeout for insert calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable holding the optional service API key.
pub const API_KEY_ENV: &str = "PULSE_STORE_API_KEY";

/// REST-backed quote store.
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestStore {
    /// Create a new REST store.
    ///
    /// # Arguments
    /// * `base_url` - store base URL (e.g. "https://example.supabase.co")
    pub fn new(base_url: impl Into<String>) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| StoreError::HttpClient(format!("Failed to create HTTP client: {e}")))?;

        let api_key = std::env::var(API_KEY_ENV).ok();

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    fn table_url(&self, destination: &str) -> String {
        format!("{}/rest/v1/{destination}", self.base_url)
    }
}

impl QuoteStore for RestStore {
    fn insert<'a>(
        &'a self,
        destination: &'a str,
        rows: &'a [QuoteRow],
    ) -> BoxFuture<'a, StoreResult<usize>> {
        Box::pin(async move {
            let url = self.table_url(destination);
            debug!(%destination, rows = rows.len(), "Inserting quote rows");

            let mut request = self.client.post(&url).json(rows);
            if let Some(key) = &self.api_key {
                request = request
                    .header("apikey", key)
                    .header("Authorization", format!("Bearer {key}"));
            }

            let response = request
                .send()
                .await
                .map_err(|e| StoreError::Insert(format!("{destination}: {e}")))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(StoreError::Insert(format!(
                    "{destination}: HTTP {status}: {body}"
                )));
            }

            info!(%destination, rows = rows.len(), "Inserted quote rows");
            Ok(rows.len())
        })
    }
}
