//! VerseBank Risk - loan issuance and liquidation
//!
//! The risk crate owns the two policy gates in front of the ledger:
//! - the loan engine: issuance against pledged collateral, retirement on
//!   exact repayment
//! - the liquidation monitor: health checks and collateral seizure
//!
//! Both validate on store snapshots and commit with a single trailing write,
//! so a rejected transition never mutates state.

pub mod error;
pub mod liquidation;
pub mod loans;

pub use error::RiskError;
pub use liquidation::{
    LiquidationConfig, LiquidationEvent, LiquidationMonitor, LIQUIDATION_THRESHOLD_PCT,
};
pub use loans::{LoanConfig, LoanEngine, MIN_COLLATERAL_RATIO_PCT};
