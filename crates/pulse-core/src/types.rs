//! Top-of-book and normalized quote types.
//!
//! `OrderBookTop` is the ephemeral result of one venue fetch; `Quote` is
//! the normalized record that gets routed to storage. Both are created and
//! discarded within a single collection run.

use crate::{Price, Token, Venue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Best bid and ask of one venue's order book for one token.
///
/// Produced fresh per fetch, never persisted directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBookTop {
    pub bid: Price,
    pub ask: Price,
}

impl OrderBookTop {
    pub fn new(bid: Price, ask: Price) -> Self {
        Self { bid, ask }
    }

    /// Mid price: arithmetic mean of best bid and best ask.
    pub fn mid(&self) -> Price {
        Price::midpoint(self.bid, self.ask)
    }
}

/// Normalized quote for one (token, venue) cell.
///
/// Immutable once produced. `mid` is always the exact arithmetic mean of
/// `bid` and `ask`; `observed_at` is assigned at aggregation time and is
/// shared by the two venue quotes of the same token in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub token: Token,
    pub venue: Venue,
    pub mid: Price,
    pub bid: Price,
    pub ask: Price,
    pub observed_at: DateTime<Utc>,
}

impl Quote {
    /// Build a quote from a fetched top-of-book.
    pub fn from_top(
        token: Token,
        venue: Venue,
        top: OrderBookTop,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token,
            venue,
            mid: top.mid(),
            bid: top.bid,
            ask: top.ask,
            observed_at,
        }
    }
}
