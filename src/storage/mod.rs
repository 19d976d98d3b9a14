//! SQLite quote store.
//!
//! Provides:
//! - Schema initialization and idempotent seeding
//! - Pooled connections for the read path
//!
//! The store is demo data for the bootstrap flow, not a persistence layer
//! the service owns: the schema is two fixed statements and the read path
//! is one query.

pub mod schema;
pub mod store;

pub use store::{Quote, QuoteStore, StoreError};
