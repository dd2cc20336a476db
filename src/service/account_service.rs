use std::sync::Arc;

use tracing::{info, warn};

use crate::models::{Account, AccountError, NewAccount};
use crate::storage::AccountStore;
use crate::types::AccountId;

/// Account lifecycle rules on top of an [`AccountStore`].
///
/// Every lookup that misses becomes `AccountError::NotFound`, and blocked
/// accounts are never written to or removed. Store failures pass through as
/// `AccountError::Store`.
pub struct AccountService<S: AccountStore> {
    store: Arc<S>
}

impl<S: AccountStore> AccountService<S> {
    /// Creates a new service over the provided store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Persists a new account and returns it with its store-assigned identifier.
    pub fn create_account(&self, account: NewAccount) -> Result<Account, AccountError> {
        info!("Creating {} account for holder [{}]", account.account_type, account.holder_name);

        let created = self.store.insert(account)?;
        info!("Account [{}] created", created.account_id);

        Ok(created)
    }

    /// Returns every stored account in whatever order the store yields them.
    pub fn list_accounts(&self) -> Result<Vec<Account>, AccountError> {
        info!("Listing accounts");

        let accounts = self.store.find_all()?;
        info!("Found {} accounts", accounts.len());

        Ok(accounts)
    }

    pub fn get_account_by_id(&self, account_id: AccountId) -> Result<Account, AccountError> {
        info!("Looking up account [{account_id}]");

        self.find(account_id)
    }

    /// Reports whether the account is active.
    ///
    /// A blocked account is `Ok(false)`; only an unknown identifier is an error.
    pub fn is_account_active(&self, account_id: AccountId) -> Result<bool, AccountError> {
        info!("Checking status of account [{account_id}]");

        let account = self.find(account_id)?;

        if account.is_active {
            info!("Account [{account_id}] is active");
        } else {
            info!("Account [{account_id}] is blocked");
        }

        Ok(account.is_active)
    }

    /// Renames the holder and sets the active flag of an active account.
    ///
    /// Passing `is_active = false` blocks the account; there is no way back.
    ///
    /// # Errors
    /// - `AccountError::NotFound` if no account has this identifier.
    /// - `AccountError::Blocked` if the account is already blocked. Nothing is written.
    pub fn update_account(&self, account_id: AccountId, holder_name: String, is_active: bool) -> Result<Account, AccountError> {
        info!("Updating account [{account_id}]");

        let mut account = self.find(account_id)?;

        if let Err(error) = account.apply_update(holder_name, is_active) {
            warn!("{error}");
            return Err(error)
        }

        let updated = self.store.save(&account)?;
        info!("Account [{}] updated", updated.account_id);

        Ok(updated)
    }

    /// Permanently removes an active account.
    ///
    /// # Errors
    /// - `AccountError::NotFound` if no account has this identifier.
    /// - `AccountError::Blocked` if the account is blocked. The store is not touched.
    pub fn delete_account(&self, account_id: AccountId) -> Result<(), AccountError> {
        info!("Deleting account [{account_id}]");

        let account = self.find(account_id)?;

        if let Err(error) = account.ensure_closable() {
            warn!("{error}");
            return Err(error)
        }

        self.store.delete(&account)?;
        info!("Account [{account_id}] closed");

        Ok(())
    }

    fn find(&self, account_id: AccountId) -> Result<Account, AccountError> {
        self.store.find_by_id(account_id)?
            .ok_or_else(|| AccountError::not_found(account_id))
    }
}
