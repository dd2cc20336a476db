mod account;
mod errors;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub use account::{Account, NewAccount};
pub use errors::{AccountError, AccountTypeError, BlockedAction};

/// The closed set of account categories a holder can open.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AccountType {
    Checking,
    Savings
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "CHECKING",
            AccountType::Savings => "SAVINGS"
        }
    }
}

impl Display for AccountType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = AccountTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "CHECKING" => Ok(AccountType::Checking),
            "SAVINGS" => Ok(AccountType::Savings),
            _ => Err(AccountTypeError::Unknown(value.to_string()))
        }
    }
}

impl Serialize for AccountType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        AccountType::from_str(&value).map_err(de::Error::custom)
    }
}
