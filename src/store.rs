use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::account::{Account, AccountId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Account id {id} already exists!")]
    DuplicateAccount { id: AccountId },
}

/// In-memory account store. Owns every account record; callers only ever
/// get cloned snapshots back, so store state cannot be mutated through a
/// returned handle.
///
/// Transfers hold the map-wide write guard across their whole
/// read-check-write sequence, which serializes them against each other
/// and against concurrent [`get_account`](Self::get_account) readers.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the account unless the id is already taken. The existence
    /// check and the insert happen under one write guard, so two racing
    /// callers can never both succeed for the same id.
    pub fn create_account(&self, account: Account) -> Result<(), StoreError> {
        match self.write().entry(account.id().to_owned()) {
            Entry::Occupied(entry) => Err(StoreError::DuplicateAccount {
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(account);
                Ok(())
            }
        }
    }

    pub fn get_account(&self, id: &str) -> Option<Account> {
        self.read().get(id).cloned()
    }

    /// Snapshot of every account, in no particular order.
    pub fn accounts(&self) -> Vec<Account> {
        self.read().values().cloned().collect()
    }

    /// Removes all accounts. Reset hook for tests, not part of the
    /// serving path.
    pub fn clear_accounts(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<AccountId, Account>> {
        // A poisoned guard still holds a consistent map: mutations are
        // only applied after every check has passed.
        self.accounts.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, HashMap<AccountId, Account>> {
        self.accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    fn account(id: &str, balance: u32) -> Account {
        Account::new(id, Decimal::from_u32(balance).unwrap()).unwrap()
    }

    #[test]
    fn create_and_get_roundtrip() {
        let store = AccountStore::new();
        store.create_account(account("Id-123", 1000)).unwrap();
        store.create_account(account("Id-223", 2000)).unwrap();

        let acc = store.get_account("Id-123").unwrap();
        assert_eq!(acc.id(), "Id-123");
        assert_eq!(acc.balance(), Decimal::from_u32(1000).unwrap());
        assert!(store.get_account("Id-999").is_none());
    }

    #[test]
    fn reject_duplicate_id() {
        let store = AccountStore::new();
        store.create_account(account("Id-123", 1000)).unwrap();
        let err = store.create_account(account("Id-123", 500)).unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateAccount {
                id: "Id-123".to_owned()
            }
        );
        // the original record is untouched
        let acc = store.get_account("Id-123").unwrap();
        assert_eq!(acc.balance(), Decimal::from_u32(1000).unwrap());
    }

    #[test]
    fn snapshots_are_decoupled_from_store_state() {
        let store = AccountStore::new();
        store.create_account(account("Id-123", 1000)).unwrap();

        let mut snapshot = store.get_account("Id-123").unwrap();
        snapshot.set_balance(Decimal::from_u32(7).unwrap());
        assert_eq!(
            store.get_account("Id-123").unwrap().balance(),
            Decimal::from_u32(1000).unwrap()
        );
    }

    #[test]
    fn clear_accounts() {
        let store = AccountStore::new();
        store.create_account(account("Id-123", 1000)).unwrap();
        store.clear_accounts();
        assert!(store.get_account("Id-123").is_none());
        assert!(store.accounts().is_empty());
        // the id is free again after a reset
        store.create_account(account("Id-123", 5)).unwrap();
    }
}
