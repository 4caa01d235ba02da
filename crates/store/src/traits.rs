//! Ledger store trait boundary

use versebank_core::{Account, AccountId};

use crate::error::StoreResult;

/// Keyed account store.
///
/// All implementations must satisfy these invariants:
/// - Read-your-writes: a `get` after a `put` within one transition observes
///   the written record.
/// - `put_many` commits all records or none; a reader never observes a
///   partially-applied batch.
/// - Reads return clones. Mutating a returned `Account` does not touch the
///   store until the record is `put` back.
/// - All backend errors are propagated, never silently ignored.
pub trait LedgerStore: Send + Sync {
    /// Read an account by identity.
    ///
    /// Returns `Ok(None)` if no record exists for `id`.
    fn get(&self, id: &AccountId) -> StoreResult<Option<Account>>;

    /// Insert or replace the record keyed by `account.owner`.
    fn put(&self, account: Account) -> StoreResult<()>;

    /// Write several records as one atomic commit.
    ///
    /// Required for transitions that touch more than one account
    /// (liquidation moves collateral across two records).
    fn put_many(&self, accounts: Vec<Account>) -> StoreResult<()>;

    /// Check whether a record exists for `id`.
    ///
    /// Default implementation reads the record. Backends with a cheaper
    /// existence probe should override.
    fn exists(&self, id: &AccountId) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }
}
