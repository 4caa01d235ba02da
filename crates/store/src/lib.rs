//! VerseBank Store - keyed account storage
//!
//! The core assumes a simple consistency contract from its store: keyed
//! get/put/exists with read-your-writes inside a transition and atomic
//! multi-record commit. This crate provides:
//! - the `LedgerStore` trait boundary
//! - `InMemoryStore` for tests and embedding
//!
//! Durable backends live with the host; the persisted layout is theirs.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use traits::LedgerStore;
