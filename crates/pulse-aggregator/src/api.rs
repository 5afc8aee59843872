//! JSON request/response shapes for the aggregation boundary.
//!
//! Mirrors the wire contract of the hosted aggregation endpoint: a request
//! carries raw token symbols, a success response carries per-venue quote
//! cells, and a top-level failure carries a bare `error` string. Both venue
//! keys are always present; missing (token, venue) cells are absent keys
//! inside them, never null entries.

use crate::table::PriceTable;
use pulse_core::{Price, Quote, Token, Venue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregation request: raw token symbols to collect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    pub tokens: Vec<String>,
}

/// One quote cell as exposed on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteCell {
    pub mid: Price,
    pub bid: Price,
    pub ask: Price,
}

impl From<&Quote> for QuoteCell {
    fn from(quote: &Quote) -> Self {
        Self {
            mid: quote.mid,
            bid: quote.bid,
            ask: quote.ask,
        }
    }
}

/// Successful aggregation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResponse {
    pub prices: HashMap<Venue, HashMap<Token, QuoteCell>>,
}

impl From<&PriceTable> for AggregateResponse {
    fn from(table: &PriceTable) -> Self {
        let mut prices: HashMap<Venue, HashMap<Token, QuoteCell>> = HashMap::new();
        // Every venue key is present even when it contributed nothing
        for venue in Venue::ALL {
            let cells = table
                .venue_quotes(venue)
                .map(|quotes| {
                    quotes
                        .iter()
                        .map(|(token, quote)| (token.clone(), QuoteCell::from(quote)))
                        .collect()
                })
                .unwrap_or_default();
            prices.insert(venue, cells);
        }
        Self { prices }
    }
}

/// Top-level failure response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
