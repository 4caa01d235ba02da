//! Store errors

use thiserror::Error;

/// Errors a ledger store backend may surface.
///
/// The in-memory store never fails; durable backends map their I/O and
/// corruption failures onto these kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Storage backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
