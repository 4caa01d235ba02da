//! Liquidation monitor - loan health checks and collateral seizure
//!
//! State machine per loan: Active -> {Repaid, Liquidated}, both terminal.
//! A loan's health is the current value of its collateral relative to the
//! principal; when the ratio falls strictly below the threshold, any
//! participant may seize the earmarked collateral and clear the loan.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use versebank_core::{AccountId, Amount, Loan, LoanStatus};
use versebank_ledger::{load_account, LedgerError};
use versebank_store::LedgerStore;

use crate::error::RiskError;

/// Liquidation threshold in percent. Strictly below the issuance minimum so
/// a freshly issued loan carries a buffer before becoming seizable.
pub const LIQUIDATION_THRESHOLD_PCT: u64 = 120;

/// Configuration for the liquidation monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidationConfig {
    /// Health ratio below which a loan becomes liquidatable (percent)
    pub liquidation_threshold_pct: u64,
}

impl Default for LiquidationConfig {
    fn default() -> Self {
        Self {
            liquidation_threshold_pct: LIQUIDATION_THRESHOLD_PCT,
        }
    }
}

/// Result of a successful liquidation. Returned to the caller, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationEvent {
    pub borrower: AccountId,
    pub liquidator: AccountId,
    /// The closed loan, in its terminal Liquidated state
    pub loan: Loan,
    /// Collateral moved from borrower to liquidator
    pub collateral_seized: Amount,
    /// Health ratio (percent) at the moment of seizure
    pub ratio_pct: u64,
    pub timestamp: DateTime<Utc>,
}

/// Current value of `collateral` in ledger units at `price`.
///
/// Rounds down. Negative prices clamp to zero; valuations beyond `u64::MAX`
/// saturate, which can only make a position look healthier.
fn collateral_value(collateral: Amount, price: Decimal) -> Amount {
    if price.is_sign_negative() {
        return Amount::ZERO;
    }
    match Decimal::from(collateral.value()).checked_mul(price) {
        Some(value) => Amount::new(value.floor().to_u64().unwrap_or(u64::MAX)),
        None => Amount::MAX,
    }
}

/// Liquidation monitor - evaluates loan health against the threshold and,
/// when unhealthy, atomically transfers collateral to a liquidator and
/// clears the loan.
#[derive(Debug, Default)]
pub struct LiquidationMonitor {
    config: LiquidationConfig,
}

impl LiquidationMonitor {
    /// Create a new liquidation monitor
    pub fn new(config: LiquidationConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &LiquidationConfig {
        &self.config
    }

    /// Health ratio of a loan in percent at the given collateral price.
    pub fn health_ratio_pct(&self, loan: &Loan, price: Decimal) -> u64 {
        if loan.principal.is_zero() {
            // Zero-principal loans are unissuable; report maximal health
            return u64::MAX;
        }
        let value = collateral_value(loan.collateral, price);
        let ratio = u128::from(value.value()) * 100 / u128::from(loan.principal.value());
        u64::try_from(ratio).unwrap_or(u64::MAX)
    }

    /// Whether the loan is unhealthy at `price`.
    ///
    /// Strict comparison: a loan exactly at the threshold is NOT
    /// liquidatable.
    pub fn is_unhealthy(&self, loan: &Loan, price: Decimal) -> bool {
        self.health_ratio_pct(loan, price) < self.config.liquidation_threshold_pct
    }

    /// Read-only health check for `owner`'s loan.
    ///
    /// Fails `NotFound` if the account is absent; an account without an
    /// Active loan reports `false` rather than an error.
    pub fn check_liquidation(
        &self,
        store: &dyn LedgerStore,
        owner: &AccountId,
        price: Decimal,
    ) -> Result<bool, RiskError> {
        let account = load_account(store, owner)?;
        Ok(account
            .active_loan()
            .map(|loan| self.is_unhealthy(loan, price))
            .unwrap_or(false))
    }

    /// Seize an unhealthy loan's collateral for `liquidator`.
    ///
    /// The earmarked collateral (its stored amount, not its repriced value)
    /// moves from borrower to liquidator, the loan is marked Liquidated and
    /// cleared, and both account mutations commit together. Self-liquidation
    /// (liquidator == borrower) is permitted and commits a single record.
    pub fn liquidate(
        &self,
        store: &dyn LedgerStore,
        liquidator: &AccountId,
        borrower: &AccountId,
        price: Decimal,
    ) -> Result<LiquidationEvent, RiskError> {
        let mut debtor = load_account(store, borrower)?;
        let Some(loan) = debtor.active_loan().copied() else {
            return Err(RiskError::NoActiveLoan);
        };
        let ratio_pct = self.health_ratio_pct(&loan, price);
        if ratio_pct >= self.config.liquidation_threshold_pct {
            return Err(RiskError::NotLiquidatable {
                ratio_pct,
                threshold_pct: self.config.liquidation_threshold_pct,
            });
        }

        let seized = loan.collateral;
        debtor.balance = debtor.balance.checked_sub(&seized).ok_or(
            RiskError::Ledger(LedgerError::InsufficientFunds {
                available: debtor.balance,
                requested: seized,
            }),
        )?;
        let mut closed = loan;
        closed.status = LoanStatus::Liquidated;
        debtor.loan = None;

        let records = if liquidator == borrower {
            debtor.balance = debtor
                .balance
                .checked_add(&seized)
                .ok_or(RiskError::Ledger(LedgerError::Overflow))?;
            vec![debtor]
        } else {
            let mut claimant = load_account(store, liquidator)?;
            claimant.balance = claimant
                .balance
                .checked_add(&seized)
                .ok_or(RiskError::Ledger(LedgerError::Overflow))?;
            vec![debtor, claimant]
        };
        store.put_many(records)?;

        tracing::info!(
            borrower = %borrower,
            liquidator = %liquidator,
            seized = %seized,
            ratio_pct,
            "loan liquidated"
        );

        Ok(LiquidationEvent {
            borrower: borrower.clone(),
            liquidator: liquidator.clone(),
            loan: closed,
            collateral_seized: seized,
            ratio_pct,
            timestamp: Utc::now(),
        })
    }
}
