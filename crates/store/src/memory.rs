//! In-memory ledger store

use std::collections::HashMap;
use std::sync::RwLock;

use versebank_core::{Account, AccountId};

use crate::error::StoreResult;
use crate::traits::LedgerStore;

/// In-memory, HashMap-based account store.
///
/// Intended for tests and embedding. Records are held in memory behind a
/// `RwLock` for safe concurrent reads; reads clone, writes replace whole
/// records.
pub struct InMemoryStore {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Number of accounts currently stored.
    pub fn len(&self) -> usize {
        self.accounts.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.read().expect("lock poisoned").is_empty()
    }

    /// Remove all accounts from the store.
    pub fn clear(&self) {
        self.accounts.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryStore {
    fn get(&self, id: &AccountId) -> StoreResult<Option<Account>> {
        let map = self.accounts.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn put(&self, account: Account) -> StoreResult<()> {
        let mut map = self.accounts.write().expect("lock poisoned");
        map.insert(account.owner.clone(), account);
        Ok(())
    }

    fn put_many(&self, accounts: Vec<Account>) -> StoreResult<()> {
        // Single write lock: readers see the whole batch or none of it.
        let mut map = self.accounts.write().expect("lock poisoned");
        for account in accounts {
            map.insert(account.owner.clone(), account);
        }
        Ok(())
    }

    fn exists(&self, id: &AccountId) -> StoreResult<bool> {
        let map = self.accounts.read().expect("lock poisoned");
        Ok(map.contains_key(id))
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("account_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use versebank_core::Amount;

    fn account(id: &str, balance: u64) -> Account {
        let mut account = Account::open(AccountId::new(id));
        account.balance = Amount::new(balance);
        account
    }

    #[test]
    fn put_and_get_roundtrip() {
        let store = InMemoryStore::new();
        store.put(account("alice", 100)).unwrap();

        let read_back = store.get(&AccountId::new("alice")).unwrap().unwrap();
        assert_eq!(read_back.balance, Amount::new(100));
        assert_eq!(read_back.owner, AccountId::new("ALICE"));
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryStore::new();
        assert!(store.get(&AccountId::new("nobody")).unwrap().is_none());
    }

    #[test]
    fn exists_tracks_puts() {
        let store = InMemoryStore::new();
        let id = AccountId::new("alice");

        assert!(!store.exists(&id).unwrap());
        store.put(account("alice", 0)).unwrap();
        assert!(store.exists(&id).unwrap());
    }

    #[test]
    fn put_replaces_existing_record() {
        let store = InMemoryStore::new();
        store.put(account("alice", 100)).unwrap();
        store.put(account("alice", 250)).unwrap();

        assert_eq!(store.len(), 1);
        let read_back = store.get(&AccountId::new("alice")).unwrap().unwrap();
        assert_eq!(read_back.balance, Amount::new(250));
    }

    #[test]
    fn put_many_commits_all_records() {
        let store = InMemoryStore::new();
        store
            .put_many(vec![account("alice", 100), account("bob", 200)])
            .unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.exists(&AccountId::new("alice")).unwrap());
        assert!(store.exists(&AccountId::new("bob")).unwrap());
    }

    #[test]
    fn clear_removes_all() {
        let store = InMemoryStore::new();
        store.put(account("alice", 1)).unwrap();
        store.put(account("bob", 2)).unwrap();
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn reads_are_snapshots() {
        let store = InMemoryStore::new();
        store.put(account("alice", 100)).unwrap();

        let mut snapshot = store.get(&AccountId::new("alice")).unwrap().unwrap();
        snapshot.balance = Amount::new(999);

        // The store is untouched until the record is put back
        let read_back = store.get(&AccountId::new("alice")).unwrap().unwrap();
        assert_eq!(read_back.balance, Amount::new(100));
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryStore::new());
        store.put(account("alice", 100)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let result = store.get(&AccountId::new("alice")).unwrap();
                    assert_eq!(result.unwrap().balance, Amount::new(100));
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread should not panic");
        }
    }

    #[test]
    fn default_creates_empty_store() {
        let store = InMemoryStore::default();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryStore::new();
        store.put(account("alice", 1)).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryStore"));
        assert!(debug.contains("account_count"));
    }
}
