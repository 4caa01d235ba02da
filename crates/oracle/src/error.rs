//! Oracle error types

use thiserror::Error;

/// Oracle-related errors
#[derive(Debug, Error)]
pub enum OracleError {
    /// No price is currently available
    #[error("No collateral price available: {reason}")]
    PriceUnavailable { reason: String },

    /// Price data is stale (older than threshold)
    #[error("Stale collateral price: last update was {last_update}, threshold is {threshold_secs}s")]
    StalePrice {
        last_update: String,
        threshold_secs: u64,
    },

    /// Price data is invalid
    #[error("Invalid collateral price: {reason}")]
    InvalidPrice { reason: String },
}
