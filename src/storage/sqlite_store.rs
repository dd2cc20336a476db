use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Account, AccountType, NewAccount};
use crate::storage::{AccountStore, StoreError};
use crate::types::AccountId;

const SELECT_ACCOUNT: &str =
    "SELECT account_id, holder_name, balance, account_type, is_active FROM bank_account";

/// Durable store over a single SQLite table.
///
/// One connection is shared behind a mutex, so calls are serialised but a
/// lookup followed by a write from the same caller is still two separate steps.
pub struct SqliteAccountStore {
    connection: Mutex<Connection>
}

impl SqliteAccountStore {
    /// Opens (or creates) the database at `path` and makes sure the table exists.
    /// `:memory:` opens a transient database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let connection = Connection::open(path)?;
        debug!("Opened SQLite database at {}", path.display());

        Self::with_connection(connection)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(connection: Connection) -> Result<Self, StoreError> {
        // Crash recovery for file databases; in-memory ones report "memory" and carry on.
        connection.pragma_update(None, "journal_mode", "WAL")?;
        setup_schema(&connection)?;

        Ok(Self {
            connection: Mutex::new(connection)
        })
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.connection.lock().map_err(|_| StoreError::Poisoned)
    }
}

fn setup_schema(connection: &Connection) -> Result<(), StoreError> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS bank_account (
            account_id TEXT PRIMARY KEY NOT NULL,
            holder_name TEXT NOT NULL CHECK (holder_name <> ''),
            balance TEXT NOT NULL DEFAULT '0',
            account_type TEXT NOT NULL CHECK (account_type IN ('CHECKING', 'SAVINGS')),
            is_active INTEGER NOT NULL DEFAULT 1
        )",
        [],
    )?;

    Ok(())
}

/// A row exactly as SQLite hands it back, before any domain parsing.
struct AccountRow {
    account_id: String,
    holder_name: String,
    balance: String,
    account_type: String,
    is_active: bool
}

impl AccountRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            account_id: row.get(0)?,
            holder_name: row.get(1)?,
            balance: row.get(2)?,
            account_type: row.get(3)?,
            is_active: row.get(4)?
        })
    }

    fn into_account(self) -> Result<Account, StoreError> {
        let account_id = AccountId::from_str(&self.account_id)
            .map_err(|error| StoreError::Corrupt(format!("account_id [{}]: {error}", self.account_id)))?;
        let balance = Decimal::from_str(&self.balance)
            .map_err(|error| StoreError::Corrupt(format!("balance [{}] of [{account_id}]: {error}", self.balance)))?;
        let account_type = AccountType::from_str(&self.account_type)
            .map_err(|error| StoreError::Corrupt(format!("account_type of [{account_id}]: {error}")))?;

        Ok(Account {
            account_id,
            holder_name: self.holder_name,
            balance,
            account_type,
            is_active: self.is_active
        })
    }
}

impl AccountStore for SqliteAccountStore {
    fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let account = account.into_account(AccountId::generate());
        let connection = self.connection()?;

        connection.execute(
            "INSERT INTO bank_account (account_id, holder_name, balance, account_type, is_active)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                account.account_id.to_string(),
                account.holder_name,
                account.balance.to_string(),
                account.account_type.as_str(),
                account.is_active
            ],
        )?;
        debug!("Inserted account [{}] into bank_account", account.account_id);

        Ok(account)
    }

    fn save(&self, account: &Account) -> Result<Account, StoreError> {
        let connection = self.connection()?;

        let changed = connection.execute(
            "UPDATE bank_account
             SET holder_name = ?2, balance = ?3, account_type = ?4, is_active = ?5
             WHERE account_id = ?1",
            params![
                account.account_id.to_string(),
                account.holder_name,
                account.balance.to_string(),
                account.account_type.as_str(),
                account.is_active
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::missing(account.account_id))
        }

        Ok(account.clone())
    }

    fn find_by_id(&self, account_id: AccountId) -> Result<Option<Account>, StoreError> {
        let connection = self.connection()?;

        let row = connection
            .query_row(
                &format!("{SELECT_ACCOUNT} WHERE account_id = ?1"),
                params![account_id.to_string()],
                AccountRow::read,
            )
            .optional()?;

        row.map(AccountRow::into_account).transpose()
    }

    fn find_all(&self) -> Result<Vec<Account>, StoreError> {
        let connection = self.connection()?;
        let mut statement = connection.prepare(&format!("{SELECT_ACCOUNT} ORDER BY rowid"))?;

        let rows = statement
            .query_map([], AccountRow::read)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(AccountRow::into_account).collect()
    }

    fn delete(&self, account: &Account) -> Result<(), StoreError> {
        let connection = self.connection()?;

        let changed = connection.execute(
            "DELETE FROM bank_account WHERE account_id = ?1",
            params![account.account_id.to_string()],
        )?;

        if changed == 0 {
            return Err(StoreError::missing(account.account_id))
        }

        Ok(())
    }
}
