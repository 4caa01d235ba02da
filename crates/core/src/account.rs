//! Account records - the persisted state of the ledger
//!
//! One `Account` per identity. The `Loan` is embedded in its account and has
//! no independent lifecycle: created on issuance, removed on repayment or
//! liquidation.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

use crate::amount::Amount;

/// Unique principal identity owning an account.
///
/// Identifiers are normalized to uppercase ("alice" and "ALICE" name the
/// same principal).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new identity, normalizing to uppercase.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// Loan lifecycle status.
///
/// `Active` is the only state that may transition; `Repaid` and `Liquidated`
/// are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    Active,
    Repaid,
    Liquidated,
}

impl LoanStatus {
    /// Terminal states admit no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoanStatus::Repaid | LoanStatus::Liquidated)
    }
}

/// An outstanding borrow against an account's balance.
///
/// Never mutated in place except `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Amount borrowed, owed back in full
    pub principal: Amount,
    /// Balance earmarked at issuance, seizable on liquidation
    pub collateral: Amount,
    pub status: LoanStatus,
}

impl Loan {
    /// Create an Active loan.
    pub fn new(principal: Amount, collateral: Amount) -> Self {
        Self {
            principal,
            collateral,
            status: LoanStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }
}

/// A participant's custodial account: one per identity, at most one active
/// loan at a time.
///
/// # Invariant
/// `balance >= 0` always (guaranteed by `Amount`), and while a loan is
/// Active, `balance >= loan.collateral` - the earmark is part of the balance,
/// not a separate pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub owner: AccountId,
    pub balance: Amount,
    pub loan: Option<Loan>,
}

impl Account {
    /// Open a new account with a zero balance and no loan.
    pub fn open(owner: AccountId) -> Self {
        Self {
            owner,
            balance: Amount::ZERO,
            loan: None,
        }
    }

    /// The active loan, if any.
    ///
    /// Terminal loans are cleared from the slot on transition, so a
    /// populated slot always holds an Active loan.
    pub fn active_loan(&self) -> Option<&Loan> {
        self.loan.as_ref().filter(|loan| loan.is_active())
    }

    /// Collateral currently locked by an Active loan.
    pub fn locked_collateral(&self) -> Amount {
        self.active_loan()
            .map(|loan| loan.collateral)
            .unwrap_or(Amount::ZERO)
    }

    /// Balance minus collateral locked by an Active loan; the only amount
    /// withdrawable.
    pub fn free_balance(&self) -> Amount {
        self.balance
            .checked_sub(&self.locked_collateral())
            .unwrap_or(Amount::ZERO)
    }
}
