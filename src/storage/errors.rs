use crate::types::AccountId;
use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store error: {0}")]
    Sqlite(rusqlite::Error),
    #[error("Store constraint violated: {0}")]
    Constraint(String),
    #[error("Store has no account [{account_id}]")]
    Missing {
        account_id: AccountId
    },
    #[error("Store returned an unreadable account: {0}")]
    Corrupt(String),
    #[error("Store connection lock was poisoned")]
    Poisoned
}

impl StoreError {
    pub fn missing(account_id: AccountId) -> Self {
        Self::Missing { account_id }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        match error {
            rusqlite::Error::SqliteFailure(failure, message) if failure.code == ErrorCode::ConstraintViolation => {
                Self::Constraint(message.unwrap_or_else(|| failure.to_string()))
            }
            other => Self::Sqlite(other)
        }
    }
}
