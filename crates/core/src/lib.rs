//! VerseBank Core - Domain types
//!
//! This crate contains the fundamental types used across VerseBank:
//! - `Amount`: non-negative integer amounts in the smallest currency unit
//! - `AccountId`: normalized principal identity
//! - `Account`, `Loan`, `LoanStatus`: the persisted ledger records

pub mod account;
pub mod amount;

pub use account::{Account, AccountId, Loan, LoanStatus};
pub use amount::Amount;
