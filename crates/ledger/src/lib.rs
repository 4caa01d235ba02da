//! VerseBank Ledger - account management core
//!
//! The Account Manager validates every balance movement BEFORE it is
//! committed to the store: existence, amount validity, funds, and the
//! collateral earmark of an Active loan.

pub mod error;
pub mod manager;

pub use error::LedgerError;
pub use manager::{load_account, AccountInfo, AccountManager};
