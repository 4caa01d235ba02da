//! VerseBank Dispatch - the single entry point for ledger transitions
//!
//! Maps each inbound operation (caller identity, action, arguments) onto
//! exactly one account/loan/liquidation handler and propagates the first
//! error with no partial state mutation. The execution environment is
//! assumed to serialize mutating calls; read-only queries observe a
//! consistent snapshot and never mutate.

pub mod commands;
pub mod context;

pub use commands::{dispatch, Call, CallOutcome};
pub use context::{AppContext, BankError};
