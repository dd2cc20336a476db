use crate::models::errors::{AccountError, BlockedAction};
use crate::models::AccountType;
use crate::types::AccountId;
use rust_decimal::Decimal;
use serde::Serialize;

/// An account as it exists in the store.
///
/// The identifier is assigned once by the store when the account is inserted and
/// never changes afterwards. Only `holder_name` and `is_active` are mutable, and
/// only while the account is still active.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Account {
    /// Store-assigned identifier.
    pub account_id: AccountId,
    /// Name of the account holder, never empty.
    pub holder_name: String,
    /// Current balance. No operation here moves funds.
    pub balance: Decimal,
    pub account_type: AccountType,
    /// Whether the account is open for changes. Once false, the account is frozen.
    pub is_active: bool
}

/// An account that has not been persisted yet and therefore has no identifier.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NewAccount {
    pub holder_name: String,
    pub balance: Decimal,
    pub account_type: AccountType,
    pub is_active: bool
}

impl NewAccount {
    /// Creates an active account with a zero balance.
    pub fn new(holder_name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            holder_name: holder_name.into(),
            balance: Decimal::ZERO,
            account_type,
            is_active: true
        }
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Binds the account to the identifier the store generated for it.
    pub fn into_account(self, account_id: AccountId) -> Account {
        Account {
            account_id,
            holder_name: self.holder_name,
            balance: self.balance,
            account_type: self.account_type,
            is_active: self.is_active
        }
    }
}

impl Account {
    /// Rejects any change to a blocked account.
    pub fn ensure_updatable(&self) -> Result<(), AccountError> {
        if !self.is_active {
            return Err(AccountError::blocked(self.account_id, BlockedAction::Update))
        }

        Ok(())
    }

    /// Rejects closing a blocked account.
    pub fn ensure_closable(&self) -> Result<(), AccountError> {
        if !self.is_active {
            return Err(AccountError::blocked(self.account_id, BlockedAction::Close))
        }

        Ok(())
    }

    /// Replaces the holder name and active flag.
    ///
    /// The gate is checked against the flag *before* the change, so an active
    /// account may block itself here but a blocked one can never be touched again.
    ///
    /// # Errors
    /// Returns `AccountError::Blocked` if the account is already inactive; the
    /// account is left unchanged.
    pub fn apply_update(&mut self, holder_name: String, is_active: bool) -> Result<(), AccountError> {
        self.ensure_updatable()?;

        self.holder_name = holder_name;
        self.is_active = is_active;

        Ok(())
    }
}
