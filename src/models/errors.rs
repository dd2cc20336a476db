use std::fmt;
use std::fmt::{Display, Formatter};

use crate::storage::StoreError;
use crate::types::AccountId;
use thiserror::Error;

/// The operation a blocked account refused.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BlockedAction {
    Update,
    Close
}

impl Display for BlockedAction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BlockedAction::Update => formatter.write_str("blocked account cannot be updated"),
            BlockedAction::Close => formatter.write_str("blocked account cannot be closed; contact account manager")
        }
    }
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Account [{account_id}] was not found")]
    NotFound {
        account_id: AccountId
    },
    #[error("Account [{account_id}]: {action}")]
    Blocked {
        account_id: AccountId,
        action: BlockedAction
    },
    #[error(transparent)]
    Store(#[from] StoreError)
}

impl AccountError {
    pub fn not_found(account_id: AccountId) -> Self {
        Self::NotFound { account_id }
    }

    pub fn blocked(account_id: AccountId, action: BlockedAction) -> Self {
        Self::Blocked { account_id, action }
    }
}

#[derive(Debug, Error)]
pub enum AccountTypeError {
    #[error("Unknown account type [{0}], expected CHECKING or SAVINGS")]
    Unknown(String)
}
