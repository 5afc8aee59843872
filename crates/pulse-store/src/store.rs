//! Quote store trait.

use crate::error::StoreResult;
use crate::row::QuoteRow;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future for dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// Append-only insert into a named destination.
///
/// Implementations must be independent per destination: failing one
/// destination's insert must not affect another's. Returns the number of
/// rows accepted by the destination.
pub trait QuoteStore: Send + Sync {
    fn insert<'a>(
        &'a self,
        destination: &'a str,
        rows: &'a [QuoteRow],
    ) -> BoxFuture<'a, StoreResult<usize>>;
}

/// Arc wrapper for QuoteStore trait objects.
pub type DynQuoteStore = Arc<dyn QuoteStore>;
