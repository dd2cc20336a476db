mod errors;
mod memory_store;
mod sqlite_store;

use crate::models::{Account, NewAccount};
use crate::types::AccountId;

pub use errors::StoreError;
pub use memory_store::MemoryAccountStore;
pub use sqlite_store::SqliteAccountStore;

/// Durable CRUD over account records.
///
/// Implementations own identifier generation and any locking they need; callers
/// get no atomicity across separate calls.
pub trait AccountStore: Send + Sync + 'static {
    /// Persists a new account and returns it with its freshly assigned identifier.
    fn insert(&self, account: NewAccount) -> Result<Account, StoreError>;
    /// Overwrites an account that already exists in the store.
    fn save(&self, account: &Account) -> Result<Account, StoreError>;
    fn find_by_id(&self, account_id: AccountId) -> Result<Option<Account>, StoreError>;
    fn find_all(&self) -> Result<Vec<Account>, StoreError>;
    fn delete(&self, account: &Account) -> Result<(), StoreError>;
}
