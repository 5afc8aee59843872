//! Append-only quote storage.
//!
//! The pipeline treats persistence as an opaque append-only insert into a
//! named destination. Two backends are provided: a PostgREST-style REST
//! table insert (the hosted time-series store) and a JSON Lines file
//! writer for local runs and offline analysis.

pub mod error;
pub mod jsonl;
pub mod memory;
pub mod rest;
pub mod row;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use jsonl::JsonlStore;
pub use memory::MemoryStore;
pub use rest::RestStore;
pub use row::QuoteRow;
pub use store::{BoxFuture, DynQuoteStore, QuoteStore};
