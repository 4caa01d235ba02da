//! Mock Oracle for testing
//!
//! Provides a configurable fixed price for driving liquidation scenarios.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::RwLock;

use crate::error::OracleError;
use crate::types::{Price, PriceOracle};

/// Mock price oracle holding a single settable price.
///
/// Useful for unit tests and integration tests: drop the price below par to
/// make a position liquidatable.
pub struct MockOracle {
    price: RwLock<Price>,
}

impl MockOracle {
    /// Create a mock oracle at the par price.
    pub fn new() -> Self {
        Self {
            price: RwLock::new(Price::par()),
        }
    }

    /// Create a mock oracle at a fixed price.
    pub fn with_price(value: Decimal) -> Self {
        let oracle = Self::new();
        oracle.set_price(value);
        oracle
    }

    /// Set the collateral price (multiplier of par).
    pub fn set_price(&self, value: Decimal) {
        let mut price = self.price.write().expect("lock poisoned");
        *price = Price::new(value, "mock");
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceOracle for MockOracle {
    async fn collateral_price(&self) -> Result<Price, OracleError> {
        Ok(self.price.read().expect("lock poisoned").clone())
    }
}
