//! Token and venue identification types.
//!
//! A `Token` is a symbol from the configured allow-list ("BTC", "ETH").
//! A `Venue` is one of the two perp exchanges the pipeline reads from.
//! Venue-specific market identifiers (numeric ids, instrument symbols)
//! live in the adapter configuration, not here.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Token symbol identifier (e.g. "BTC", "ETH").
///
/// Uppercase, non-empty, used as a map key throughout the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Create a token from a raw symbol string.
    ///
    /// The symbol is trimmed and uppercased. Empty or blank symbols are
    /// rejected; a quote must never carry an empty token.
    pub fn new(symbol: &str) -> Result<Self, CoreError> {
        let normalized = symbol.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(CoreError::InvalidToken(symbol.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Token {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Venue identifier.
///
/// Each venue has a distinct request and response shape; the adapters
/// absorb the difference so callers only ever see this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Lighter,
    Paradex,
}

impl Venue {
    /// All venues, in the order they are attempted per token.
    pub const ALL: [Venue; 2] = [Venue::Lighter, Venue::Paradex];

    /// Canonical lowercase name, used as the `exchange` column in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Lighter => "lighter",
            Venue::Paradex => "paradex",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
