//! Ledger errors

use thiserror::Error;
use versebank_core::Amount;
use versebank_store::StoreError;

/// Errors that can occur in account operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("No account exists for {0}")]
    NotFound(String),

    #[error("An account already exists for {0}")]
    AlreadyExists(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(&'static str),

    #[error("Balance would exceed the representable maximum")]
    Overflow,

    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Amount,
        requested: Amount,
    },

    #[error("Withdrawal blocked by loan collateral: free {free}, requested {requested}")]
    CollateralLocked { free: Amount, requested: Amount },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
