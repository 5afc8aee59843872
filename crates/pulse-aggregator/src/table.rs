//! Merged per-venue, per-token quote table.

use pulse_core::{Quote, Token, Venue};
use std::collections::HashMap;

/// Quotes keyed by (venue, token).
///
/// Absence of a key means that cell's fetch failed or was unmapped; the
/// table never holds null or zero-valued placeholder entries.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    cells: HashMap<Venue, HashMap<Token, Quote>>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a quote into its (venue, token) cell.
    pub fn insert(&mut self, quote: Quote) {
        self.cells
            .entry(quote.venue)
            .or_default()
            .insert(quote.token.clone(), quote);
    }

    /// Look up one cell.
    pub fn get(&self, venue: Venue, token: &Token) -> Option<&Quote> {
        self.cells.get(&venue).and_then(|m| m.get(token))
    }

    /// All quotes for one venue, if any.
    pub fn venue_quotes(&self, venue: Venue) -> Option<&HashMap<Token, Quote>> {
        self.cells.get(&venue)
    }

    /// Iterate all quotes in the table.
    pub fn quotes(&self) -> impl Iterator<Item = &Quote> {
        self.cells.values().flat_map(|m| m.values())
    }

    /// Number of filled cells.
    pub fn len(&self) -> usize {
        self.cells.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.values().all(|m| m.is_empty())
    }

    /// Quotes for one token across all venues.
    pub fn token_quotes<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Quote> {
        self.cells.values().filter_map(move |m| m.get(token))
    }
}
