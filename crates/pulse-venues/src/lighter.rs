//! Lighter order book adapter.
//!
//! Lighter keys markets by numeric id and returns depth levels as objects
//! with a string `price` field. The token-to-market-id mapping is injected
//! configuration; a token without a mapping yields no quote for this venue.

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

/// One price level as Lighter serves it.
#[derive(Debug, Deserialize)]
struct LighterLevel {
    price: String,
}

/// Order book response body.
#[derive(Debug, Deserialize)]
struct LighterBook {
    #[serde(default)]
    bids: Vec<LighterLevel>,
    #[serde(default)]
    asks: Vec<LighterLevel>,
}

/// Adapter for the Lighter order book endpoint.
pub struct LighterSource {
    client: Client,
    base_url: String,
    markets: HashMap<Token, u32>,
}

impl LighterSource {
    /// Create a new Lighter source.
    ///
    /// # Arguments
    /// * `base_url` - API base (e.g. "https://mainnet.zklighter.elliot.ai")
    /// * `markets` - token to numeric market id mapping
    pub fn new(base_url: impl Into<String>, markets: HashMap<Token, u32>) -> VenueResult<Self> {
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

    async fn fetch(&self, token: &Token, market_id: u32) -> VenueResult<OrderBookTop> {
        let url = format!(
            "{}/api/v1/orderBookOrders?market_id={market_id}&limit=1",
            self.base_url
        );

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

        let book: LighterBook = response
            .json()
            .await
            .map_err(|e| VenueError::MalformedResponse(format!("{token}: {e}")))?;

        best_levels(token, &book)
    }
}

/// Extract the best bid/ask from a parsed book, requiring both sides.
fn best_levels(token: &Token, book: &LighterBook) -> VenueResult<OrderBookTop> {
    let best_bid = book.bids.first().ok_or_else(|| {
        VenueError::MalformedResponse(format!("{token}: empty bid side"))
    })?;
    let best_ask = book.asks.first().ok_or_else(|| {
        VenueError::MalformedResponse(format!("{token}: empty ask side"))
    })?;

    let bid: Price = best_bid
        .price
        .parse()
        .map_err(|e| VenueError::MalformedResponse(format!("{token}: bad bid price: {e}")))?;
    let ask: Price = best_ask
        .price
        .parse()
        .map_err(|e| VenueError::MalformedResponse(format!("{token}: bad ask price: {e}")))?;

    if !bid.is_positive() || !ask.is_positive() {
        return Err(VenueError::MalformedResponse(format!(
            "{token}: non-positive price level: bid {bid}, ask {ask}"
        )));
    }

    Ok(OrderBookTop::new(bid, ask))
}

impl BookSource for LighterSource {
    fn venue(&self) -> Venue {
        Venue::Lighter
    }

    fn fetch_top<'a>(
        &'a self,
        token: &'a Token,
    ) -> BoxFuture<'a, VenueResult<Option<OrderBookTop>>> {
        Box::pin(async move {
            let Some(&market_id) = self.markets.get(token) else {
                debug!(%token, venue = %Venue::Lighter, "No market id configured, omitting");
                return Ok(None);
            };
            self.fetch(token, market_id).await.map(Some)
        })
    }
}
