//! Paradex order book adapter.
//!
//! Paradex keys markets by instrument symbol (e.g. "BTC-USD-PERP") and
//! returns depth levels as two-element `[price, size]` string pairs. The
//! token-to-symbol mapping is injected configuration.

use crate::error::{VenueError, VenueResult};
use crate::source::{BookSource, BoxFuture};
use pulse_core::{OrderBookTop, Price, Token, Venue};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Default timeout for venue reads.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Order book response body. Levels are `[price, size]` pairs.
#[derive(Debug, Deserialize)]
struct ParadexBook {
    #[serde(default)]
    bids: Vec<(String, String)>,
    #[serde(default)]
    asks: Vec<(String, String)>,
}

/// Adapter for the Paradex order book endpoint.
pub struct ParadexSource {
    client: Client,
    base_url: String,
    markets: HashMap<Token, String>,
}

impl ParadexSource {
    /// Create a new Paradex source.
    ///
    /// # Arguments
    /// * `base_url` - API base (e.g. "https://api.prod.paradex.trade")
    /// * `markets` - token to instrument symbol mapping ("BTC" -> "BTC-USD-PERP")
    pub fn new(base_url: impl Into<String>, markets: HashMap<Token, String>) -> VenueResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| VenueError::HttpClient(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            markets,
        })
    }

    async fn fetch(&self, token: &Token, symbol: &str) -> VenueResult<OrderBookTop> {
        let url = format!("{}/v1/orderbook/{symbol}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| VenueError::Network(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VenueError::Network(format!("HTTP {status}: {body}")));
        }

        let book: ParadexBook = response
            .json()
            .await
            .map_err(|e| VenueError::MalformedResponse(format!("{token}: {e}")))?;

        best_levels(token, &book)
    }
}

/// Extract the best bid/ask from a parsed book, requiring both sides.
fn best_levels(token: &Token, book: &ParadexBook) -> VenueResult<OrderBookTop> {
    let (bid_px, _) = book.bids.first().ok_or_else(|| {
        VenueError::MalformedResponse(format!("{token}: empty bid side"))
    })?;
    let (ask_px, _) = book.asks.first().ok_or_else(|| {
        VenueError::MalformedResponse(format!("{token}: empty ask side"))
    })?;

    let bid: Price = bid_px
        .parse()
        .map_err(|e| VenueError::MalformedResponse(format!("{token}: bad bid price: {e}")))?;
    let ask: Price = ask_px
        .parse()
        .map_err(|e| VenueError::MalformedResponse(format!("{token}: bad ask price: {e}")))?;

    if !bid.is_positive() || !ask.is_positive() {
        return Err(VenueError::MalformedResponse(format!(
            "{token}: non-positive price level: bid {bid}, ask {ask}"
        )));
    }

    Ok(OrderBookTop::new(bid, ask))
}

impl BookSource for ParadexSource {
    fn venue(&self) -> Venue {
        Venue::Paradex
    }

    fn fetch_top<'a>(
        &'a self,
        token: &'a Token,
    ) -> BoxFuture<'a, VenueResult<Option<OrderBookTop>>> {
        Box::pin(async move {
            let Some(symbol) = self.markets.get(token) else {
                debug!(%token, venue = %Venue::Paradex, "No instrument symbol configured, omitting");
                return Ok(None);
            };
            self.fetch(token, symbol).await.map(Some)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn btc() -> Token {
        Token::new("BTC").unwrap()
    }

    #[test]
    fn test_parse_pair_levels() {
        let book: ParadexBook = serde_json::from_str(
            r#"{
                "bids": [["50005", "1"], ["50000", "3"]],
                "asks": [["50015", "1"]]
            }"#,
        )
        .unwrap();

        let top = best_levels(&btc(), &book).unwrap();
        assert_eq!(top.bid.inner(), dec!(50005));
        assert_eq!(top.ask.inner(), dec!(50015));
        assert_eq!(top.mid().inner(), dec!(50010));
    }

    #[test]
    fn test_empty_bid_side_is_malformed() {
        let book: ParadexBook =
            serde_json::from_str(r#"{"bids": [], "asks": [["50015", "1"]]}"#).unwrap();

        let err = best_levels(&btc(), &book).unwrap_err();
        assert!(matches!(err, VenueError::MalformedResponse(_)));
    }

    #[test]
    fn test_unparsable_price_is_malformed() {
        let book: ParadexBook =
            serde_json::from_str(r#"{"bids": [["x", "1"]], "asks": [["50015", "1"]]}"#).unwrap();

        assert!(best_levels(&btc(), &book).is_err());
    }

    #[test]
    fn test_non_positive_price_is_malformed() {
        let book: ParadexBook =
            serde_json::from_str(r#"{"bids": [["0", "1"]], "asks": [["50015", "1"]]}"#).unwrap();

        let err = best_levels(&btc(), &book).unwrap_err();
        assert!(matches!(err, VenueError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unmapped_token_returns_none() {
        let source = ParadexSource::new("http://localhost:0", HashMap::new()).unwrap();
        let outcome = source.fetch_top(&btc()).await.unwrap();
        assert!(outcome.is_none());
    }
}
