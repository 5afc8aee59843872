//! Per-venue order book adapters.
//!
//! Each adapter issues one unauthenticated depth-1 read against its venue's
//! order book endpoint and normalizes the response into an `OrderBookTop`.
//! The venue-specific wire shapes (object-with-price-field for Lighter,
//! `[price, size]` pairs for Paradex) are absorbed entirely inside the
//! adapters; callers only ever see normalized tops or typed failures.

pub mod error;
pub mod lighter;
pub mod paradex;
pub mod source;

pub use error::{VenueError, VenueResult};
pub use lighter::LighterSource;
pub use paradex::ParadexSource;
pub use source::{BookSource, BoxFuture, DynBookSource, MockBookSource};
