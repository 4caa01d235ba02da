//! VerseBank Price Oracle - collateral reference price feeds
//!
//! The ledger holds one asset; the oracle reports what its collateral is
//! worth relative to par. The core transition functions take the resolved
//! price as an argument - only the dispatcher awaits a feed.

pub mod error;
pub mod mock;
pub mod types;

pub use error::OracleError;
pub use mock::MockOracle;
pub use types::{Price, PriceOracle};
