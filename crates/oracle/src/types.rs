//! Core oracle types

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::OracleError;

/// A reference price for the collateral asset, expressed as a multiplier of
/// par (1.0 = collateral trades at its face amount in ledger units).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    /// Multiplier of par
    pub value: Decimal,
    /// Timestamp when this price was fetched
    pub timestamp: DateTime<Utc>,
    /// Source of the price (e.g., "mock", "chainlink")
    pub source: String,
}

impl Price {
    /// Create a new price from a source.
    pub fn new(value: Decimal, source: impl Into<String>) -> Self {
        Self {
            value,
            timestamp: Utc::now(),
            source: source.into(),
        }
    }

    /// Par price: collateral at face value.
    pub fn par() -> Self {
        Self::new(Decimal::ONE, "par")
    }

    /// Check if the price is stale (older than threshold)
    pub fn is_stale(&self, max_age_secs: u64) -> bool {
        let age = Utc::now().signed_duration_since(self.timestamp);
        age.num_seconds() > max_age_secs as i64
    }
}

/// Price Oracle trait - interface for collateral price feeds
///
/// Implementations can be:
/// - MockOracle: fixed, settable price for tests
/// - a market-data or on-chain feed in a full deployment
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Get the current reference price of the collateral asset.
    async fn collateral_price(&self) -> Result<Price, OracleError>;
}
