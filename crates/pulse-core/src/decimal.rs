//! Precision-safe decimal price type.
//!
//! Uses `rust_decimal` for exact decimal arithmetic, avoiding
//! floating-point rounding errors in mid-price derivation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Price with exact decimal precision.
///
/// Wraps `Decimal` so venue prices parsed from their native string
/// representation keep their exact value all the way to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    /// A tradable price is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Arithmetic mean of two prices.
    #[inline]
    pub fn midpoint(a: Price, b: Price) -> Self {
        Self((a.0 + b.0) / Decimal::TWO)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Price {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_midpoint_exact() {
        let mid = Price::midpoint(Price::new(dec!(50000)), Price::new(dec!(50010)));
        assert_eq!(mid.inner(), dec!(50005));
    }

    #[test]
    fn test_midpoint_fractional() {
        // (100 + 101) / 2 must not lose the half
        let mid = Price::midpoint(Price::new(dec!(100)), Price::new(dec!(101)));
        assert_eq!(mid.inner(), dec!(100.5));
    }

    #[test]
    fn test_parse_from_venue_string() {
        let p: Price = "50000.25".parse().unwrap();
        assert_eq!(p.inner(), dec!(50000.25));
        assert!("not-a-price".parse::<Price>().is_err());
    }

    #[test]
    fn test_is_positive() {
        assert!(Price::new(dec!(0.01)).is_positive());
        assert!(!Price::new(dec!(0)).is_positive());
        assert!(!Price::new(dec!(-1)).is_positive());
    }
}
