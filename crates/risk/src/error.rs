//! Risk engine errors

use thiserror::Error;
use versebank_core::Amount;
use versebank_ledger::LedgerError;
use versebank_store::StoreError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    #[error("An active loan already exists")]
    LoanAlreadyActive,

    #[error("No active loan")]
    NoActiveLoan,

    #[error("Insufficient collateral: required {required}, available {available}")]
    InsufficientCollateral {
        required: Amount,
        available: Amount,
    },

    #[error("Position is not liquidatable: health {ratio_pct}% >= threshold {threshold_pct}%")]
    NotLiquidatable { ratio_pct: u64, threshold_pct: u64 },

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
