use crate::models::{Account, NewAccount};
use crate::storage::{AccountStore, StoreError};
use crate::types::AccountId;
use dashmap::DashMap;
use tracing::debug;

/// Volatile store backed by a concurrent map. Iteration order is unspecified.
pub struct MemoryAccountStore {
    accounts: DashMap<AccountId, Account>
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new()
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn check_holder_name(holder_name: &str) -> Result<(), StoreError> {
        if holder_name.is_empty() {
            return Err(StoreError::Constraint("holder_name must not be empty".to_string()))
        }

        Ok(())
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for MemoryAccountStore {
    fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        Self::check_holder_name(&account.holder_name)?;

        let account = account.into_account(AccountId::generate());
        self.accounts.insert(account.account_id, account.clone());
        debug!("Inserted account [{}] in memory", account.account_id);

        Ok(account)
    }

    fn save(&self, account: &Account) -> Result<Account, StoreError> {
        Self::check_holder_name(&account.holder_name)?;

        let mut entry = self.accounts.get_mut(&account.account_id)
            .ok_or_else(|| StoreError::missing(account.account_id))?;
        *entry = account.clone();

        Ok(account.clone())
    }

    fn find_by_id(&self, account_id: AccountId) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.get(&account_id).map(|entry| entry.value().clone()))
    }

    fn find_all(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.accounts.iter().map(|entry| entry.value().clone()).collect())
    }

    fn delete(&self, account: &Account) -> Result<(), StoreError> {
        self.accounts.remove(&account.account_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::missing(account.account_id))
    }
}
