//! Account Manager - account lifecycle and balance movements
//!
//! Handlers validate on a store snapshot and mutate with a single trailing
//! `put`; an error return leaves the store untouched.

use serde::{Deserialize, Serialize};

use versebank_core::{Account, AccountId, Amount};
use versebank_store::LedgerStore;

use crate::error::LedgerError;

/// Load the account for `id`, failing `NotFound` if absent.
pub fn load_account(store: &dyn LedgerStore, id: &AccountId) -> Result<Account, LedgerError> {
    store
        .get(id)?
        .ok_or_else(|| LedgerError::NotFound(id.to_string()))
}

/// Read-only snapshot of an account's balance and loan presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub balance: Amount,
    /// Collateral locked by an Active loan, zero otherwise
    pub locked_collateral: Amount,
    /// Balance minus locked collateral; the withdrawable portion
    pub free_balance: Amount,
    pub has_active_loan: bool,
}

impl From<&Account> for AccountInfo {
    fn from(account: &Account) -> Self {
        Self {
            balance: account.balance,
            locked_collateral: account.locked_collateral(),
            free_balance: account.free_balance(),
            has_active_loan: account.active_loan().is_some(),
        }
    }
}

/// Account Manager - creates accounts, enforces one account per identity,
/// and validates deposits and withdrawals against the balance.
///
/// The manager holds no state of its own; every method takes the store
/// explicitly.
#[derive(Debug, Default)]
pub struct AccountManager;

impl AccountManager {
    pub fn new() -> Self {
        Self
    }

    /// Open an account for `owner` with a zero balance and no loan.
    ///
    /// Fails `AlreadyExists` if a record for this identity exists.
    pub fn create_account(
        &self,
        store: &dyn LedgerStore,
        owner: &AccountId,
    ) -> Result<AccountId, LedgerError> {
        if store.exists(owner)? {
            return Err(LedgerError::AlreadyExists(owner.to_string()));
        }
        store.put(Account::open(owner.clone()))?;
        tracing::debug!(account = %owner, "account created");
        Ok(owner.clone())
    }

    /// Credit `amount` to the account. Returns the new balance.
    pub fn deposit(
        &self,
        store: &dyn LedgerStore,
        owner: &AccountId,
        amount: Amount,
    ) -> Result<Amount, LedgerError> {
        let mut account = load_account(store, owner)?;
        if amount.is_zero() {
            return Err(LedgerError::InvalidAmount("amount must be positive"));
        }
        account.balance = account
            .balance
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;

        let new_balance = account.balance;
        store.put(account)?;
        tracing::debug!(account = %owner, amount = %amount, balance = %new_balance, "deposit");
        Ok(new_balance)
    }

    /// Debit `amount` from the account. Returns the new balance.
    ///
    /// Collateral pledged to an Active loan is earmarked in place: a
    /// withdrawal may not take the balance below the earmark.
    pub fn withdraw(
        &self,
        store: &dyn LedgerStore,
        owner: &AccountId,
        amount: Amount,
    ) -> Result<Amount, LedgerError> {
        let mut account = load_account(store, owner)?;
        if amount.is_zero() {
            return Err(LedgerError::InvalidAmount("amount must be positive"));
        }
        let remaining =
            account
                .balance
                .checked_sub(&amount)
                .ok_or(LedgerError::InsufficientFunds {
                    available: account.balance,
                    requested: amount,
                })?;
        if remaining < account.locked_collateral() {
            return Err(LedgerError::CollateralLocked {
                free: account.free_balance(),
                requested: amount,
            });
        }
        account.balance = remaining;

        store.put(account)?;
        tracing::debug!(account = %owner, amount = %amount, balance = %remaining, "withdrawal");
        Ok(remaining)
    }

    /// Current balance. Fails `NotFound` for a missing account.
    pub fn balance(
        &self,
        store: &dyn LedgerStore,
        owner: &AccountId,
    ) -> Result<Amount, LedgerError> {
        Ok(load_account(store, owner)?.balance)
    }

    /// Snapshot of balance and loan presence. `Ok(None)` for a missing
    /// account.
    pub fn account_info(
        &self,
        store: &dyn LedgerStore,
        owner: &AccountId,
    ) -> Result<Option<AccountInfo>, LedgerError> {
        Ok(store.get(owner)?.map(|account| AccountInfo::from(&account)))
    }
}
