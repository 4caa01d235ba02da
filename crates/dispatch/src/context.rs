//! Application context - wires the store, oracle, and engines together

use std::sync::Arc;

use versebank_ledger::{AccountManager, LedgerError};
use versebank_oracle::{MockOracle, OracleError, PriceOracle};
use versebank_risk::{LiquidationConfig, LiquidationMonitor, LoanConfig, LoanEngine, RiskError};
use versebank_store::{InMemoryStore, LedgerStore, StoreError};

/// Application context - wires together the ledger store, the price oracle,
/// and the account/loan/liquidation components behind one dispatch surface.
pub struct AppContext {
    pub(crate) store: Arc<dyn LedgerStore>,
    pub(crate) oracle: Arc<dyn PriceOracle>,
    pub(crate) accounts: AccountManager,
    pub(crate) loans: LoanEngine,
    pub(crate) monitor: LiquidationMonitor,
}

impl AppContext {
    /// Create a context over the given store and oracle with default policy.
    pub fn new(store: Arc<dyn LedgerStore>, oracle: Arc<dyn PriceOracle>) -> Self {
        Self::with_config(
            store,
            oracle,
            LoanConfig::default(),
            LiquidationConfig::default(),
        )
    }

    /// Create a context with explicit policy configuration.
    pub fn with_config(
        store: Arc<dyn LedgerStore>,
        oracle: Arc<dyn PriceOracle>,
        loan_config: LoanConfig,
        liquidation_config: LiquidationConfig,
    ) -> Self {
        Self {
            store,
            oracle,
            accounts: AccountManager::new(),
            loans: LoanEngine::new(loan_config),
            monitor: LiquidationMonitor::new(liquidation_config),
        }
    }

    /// In-memory context at the par price, for tests and embedding.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()), Arc::new(MockOracle::new()))
    }

    /// The ledger store behind this context.
    pub fn store(&self) -> &dyn LedgerStore {
        self.store.as_ref()
    }

    /// The price oracle behind this context.
    pub fn oracle(&self) -> &dyn PriceOracle {
        self.oracle.as_ref()
    }
}

/// Errors surfaced by dispatch
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Risk error: {0}")]
    Risk(#[from] RiskError),

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
