//! Book source trait for venue adapters.
//!
//! Provides a trait-based abstraction over the per-venue fetch so the
//! aggregator can be exercised against mock sources in tests and new
//! venues are additive.

use crate::error::VenueResult;
use parking_lot::Mutex;
use pulse_core::{OrderBookTop, Token, Venue};
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future for dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// A source of top-of-book data for one venue.
///
/// `fetch_top` issues a single read and returns:
/// - `Ok(Some(top))` — best bid/ask were present and parsed
/// - `Ok(None)` — the token has no market identifier configured for this
///   venue; the caller omits the cell, it is not a failure
/// - `Err(_)` — network or malformed-response failure for this cell only
pub trait BookSource: Send + Sync {
    /// The venue this source reads from.
    fn venue(&self) -> Venue;

    /// Fetch the best bid/ask for one token.
    fn fetch_top<'a>(&'a self, token: &'a Token) -> BoxFuture<'a, VenueResult<Option<OrderBookTop>>>;
}

/// Arc wrapper for BookSource trait objects.
pub type DynBookSource = Arc<dyn BookSource>;

/// Scripted outcome for one token in a `MockBookSource`.
#[derive(Debug, Clone)]
enum MockOutcome {
    Top(OrderBookTop),
    Unmapped,
    NetworkError(String),
    Malformed(String),
}

/// Mock book source for testing.
///
/// Unknown tokens behave as unmapped markets; scripted tokens return their
/// configured outcome. Every fetch is recorded so tests can assert that
/// both venues were attempted regardless of each other's result.
pub struct MockBookSource {
    venue: Venue,
    outcomes: Mutex<HashMap<Token, MockOutcome>>,
    fetches: Mutex<Vec<Token>>,
}

impl MockBookSource {
    pub fn new(venue: Venue) -> Self {
        Self {
            venue,
            outcomes: Mutex::new(HashMap::new()),
            fetches: Mutex::new(Vec::new()),
        }
    }

    /// Script a successful top-of-book for a token.
    pub fn set_top(&self, token: Token, top: OrderBookTop) {
        self.outcomes.lock().insert(token, MockOutcome::Top(top));
    }

    /// Script an explicit unmapped outcome (same as leaving the token
    /// unscripted, but self-documenting in tests).
    pub fn set_unmapped(&self, token: Token) {
        self.outcomes.lock().insert(token, MockOutcome::Unmapped);
    }

    /// Script a network-level failure for a token.
    pub fn set_network_error(&self, token: Token, message: &str) {
        self.outcomes
            .lock()
            .insert(token, MockOutcome::NetworkError(message.to_string()));
    }

    /// Script a malformed-response failure for a token.
    pub fn set_malformed(&self, token: Token, message: &str) {
        self.outcomes
            .lock()
            .insert(token, MockOutcome::Malformed(message.to_string()));
    }

    /// Tokens fetched so far, in call order.
    pub fn fetched(&self) -> Vec<Token> {
        self.fetches.lock().clone()
    }
}

impl BookSource for MockBookSource {
    fn venue(&self) -> Venue {
        self.venue
    }

    fn fetch_top<'a>(
        &'a self,
        token: &'a Token,
    ) -> BoxFuture<'a, VenueResult<Option<OrderBookTop>>> {
        Box::pin(async move {
            self.fetches.lock().push(token.clone());
            match self.outcomes.lock().get(token) {
                Some(MockOutcome::Top(top)) => Ok(Some(*top)),
                Some(MockOutcome::Unmapped) | None => Ok(None),
                Some(MockOutcome::NetworkError(msg)) => {
                    Err(crate::VenueError::Network(msg.clone()))
                }
                Some(MockOutcome::Malformed(msg)) => {
                    Err(crate::VenueError::MalformedResponse(msg.clone()))
                }
            }
        })
    }
}
