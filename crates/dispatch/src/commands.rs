//! Transition dispatch - maps inbound operations onto the core handlers
//!
//! Each call runs to completion or not at all: handlers validate on store
//! snapshots and commit with one trailing write, so the first error
//! propagated here guarantees no partial state mutation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use versebank_core::{AccountId, Amount, Loan};
use versebank_ledger::AccountInfo;
use versebank_risk::LiquidationEvent;

use crate::context::{AppContext, BankError};

/// An inbound operation: one variant per external call.
///
/// The caller identity is implicit (passed alongside to `dispatch`);
/// read-only queries that may target another account carry the `owner`
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Call {
    CreateAccount,
    Deposit { amount: Amount },
    Withdraw { amount: Amount },
    GetBalance,
    GetAccountInfo { owner: AccountId },
    TakeLoan { amount: Amount },
    RepayLoan { amount: Amount },
    GetLoanDetails { owner: AccountId },
    CheckLiquidation { owner: AccountId },
    Liquidate { borrower: AccountId },
}

impl Call {
    /// Whether the operation mutates ledger state.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Call::CreateAccount
                | Call::Deposit { .. }
                | Call::Withdraw { .. }
                | Call::TakeLoan { .. }
                | Call::RepayLoan { .. }
                | Call::Liquidate { .. }
        )
    }

    /// The logical operation identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Call::CreateAccount => "create-account",
            Call::Deposit { .. } => "deposit",
            Call::Withdraw { .. } => "withdraw",
            Call::GetBalance => "get-balance",
            Call::GetAccountInfo { .. } => "get-account-info",
            Call::TakeLoan { .. } => "take-loan",
            Call::RepayLoan { .. } => "repay-loan",
            Call::GetLoanDetails { .. } => "get-loan-details",
            Call::CheckLiquidation { .. } => "check-liquidation",
            Call::Liquidate { .. } => "liquidate",
        }
    }
}

/// Successful result of a dispatched call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOutcome {
    AccountCreated(AccountId),
    /// New or current balance (deposit, withdraw, get-balance)
    Balance(Amount),
    AccountInfo(Option<AccountInfo>),
    LoanIssued(Loan),
    /// The retired loan, in its terminal Repaid state
    LoanRepaid(Loan),
    LoanDetails(Option<Loan>),
    LiquidationStatus(bool),
    Liquidated(LiquidationEvent),
}

/// Dispatch a call from `caller` to exactly one handler.
///
/// Only `check-liquidation` and `liquidate` consult the oracle; every other
/// operation is a pure function of (store state, call).
pub async fn dispatch(
    ctx: &AppContext,
    caller: &AccountId,
    call: Call,
) -> Result<CallOutcome, BankError> {
    let correlation_id = Uuid::new_v4();
    tracing::debug!(%correlation_id, caller = %caller, op = call.name(), "dispatch");

    match call {
        Call::CreateAccount => {
            let id = ctx.accounts.create_account(ctx.store(), caller)?;
            Ok(CallOutcome::AccountCreated(id))
        }
        Call::Deposit { amount } => {
            let balance = ctx.accounts.deposit(ctx.store(), caller, amount)?;
            Ok(CallOutcome::Balance(balance))
        }
        Call::Withdraw { amount } => {
            let balance = ctx.accounts.withdraw(ctx.store(), caller, amount)?;
            Ok(CallOutcome::Balance(balance))
        }
        Call::GetBalance => {
            let balance = ctx.accounts.balance(ctx.store(), caller)?;
            Ok(CallOutcome::Balance(balance))
        }
        Call::GetAccountInfo { owner } => {
            let info = ctx.accounts.account_info(ctx.store(), &owner)?;
            Ok(CallOutcome::AccountInfo(info))
        }
        Call::TakeLoan { amount } => {
            let loan = ctx.loans.take_loan(ctx.store(), caller, amount)?;
            Ok(CallOutcome::LoanIssued(loan))
        }
        Call::RepayLoan { amount } => {
            let loan = ctx.loans.repay_loan(ctx.store(), caller, amount)?;
            Ok(CallOutcome::LoanRepaid(loan))
        }
        Call::GetLoanDetails { owner } => {
            let loan = ctx.loans.loan_details(ctx.store(), &owner)?;
            Ok(CallOutcome::LoanDetails(loan))
        }
        Call::CheckLiquidation { owner } => {
            let price = ctx.oracle().collateral_price().await?;
            let unhealthy = ctx
                .monitor
                .check_liquidation(ctx.store(), &owner, price.value)?;
            Ok(CallOutcome::LiquidationStatus(unhealthy))
        }
        Call::Liquidate { borrower } => {
            let price = ctx.oracle().collateral_price().await?;
            let event = ctx
                .monitor
                .liquidate(ctx.store(), caller, &borrower, price.value)?;
            Ok(CallOutcome::Liquidated(event))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_names_match_wire_identifiers() {
        assert_eq!(Call::CreateAccount.name(), "create-account");
        assert_eq!(
            Call::TakeLoan {
                amount: Amount::new(1)
            }
            .name(),
            "take-loan"
        );
        assert_eq!(
            Call::Liquidate {
                borrower: AccountId::new("alice")
            }
            .name(),
            "liquidate"
        );
    }

    #[test]
    fn test_mutating_calls_flagged() {
        assert!(Call::CreateAccount.mutates());
        assert!(Call::Deposit {
            amount: Amount::new(1)
        }
        .mutates());
        assert!(!Call::GetBalance.mutates());
        assert!(!Call::CheckLiquidation {
            owner: AccountId::new("alice")
        }
        .mutates());
    }
}
