use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info};

use crate::import::ImportError;
use crate::models::{AccountType, NewAccount};
use crate::service::AccountService;
use crate::storage::AccountStore;

/// A single row of an import file.
///
/// `balance` stays textual until parsed so no digits are lost to float inference,
/// and both it and `is_active` fall back to the account defaults when empty.
#[derive(Debug, Deserialize)]
struct ImportRecord {
    holder_name: String,
    account_type: AccountType,
    balance: Option<String>,
    is_active: Option<bool>
}

impl ImportRecord {
    fn into_new_account(self) -> Result<NewAccount, ImportError> {
        let mut account = NewAccount::new(self.holder_name, self.account_type);

        if let Some(balance) = self.balance.filter(|value| !value.is_empty()) {
            account.balance = Decimal::from_str(&balance).map_err(|_| ImportError::InvalidBalance {
                holder_name: account.holder_name.clone(),
                value: balance
            })?;
        }

        if let Some(is_active) = self.is_active {
            account.is_active = is_active;
        }

        Ok(account)
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize
}

/// Creates accounts in bulk from CSV through the service, so every row obeys the
/// same rules as a single `create`.
pub struct CsvImporter<'a, S: AccountStore> {
    service: &'a AccountService<S>
}

impl<'a, S: AccountStore> CsvImporter<'a, S> {
    pub fn new(service: &'a AccountService<S>) -> Self {
        Self { service }
    }

    /// Imports every row of the file at `path`.
    ///
    /// # Errors
    /// Only failing to open the file is an error; bad rows are logged and counted
    /// as skipped.
    pub fn run(&self, path: &Path) -> Result<ImportSummary, ImportError> {
        let reader = Self::builder()
            .from_path(path)
            .map_err(|source| ImportError::Open { path: path.to_path_buf(), source })?;

        Ok(self.import(reader))
    }

    pub fn run_reader<R: Read>(&self, reader: R) -> ImportSummary {
        self.import(Self::builder().from_reader(reader))
    }

    fn builder() -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder.trim(Trim::All).flexible(true);
        builder
    }

    fn import<R: Read>(&self, mut reader: csv::Reader<R>) -> ImportSummary {
        let mut summary = ImportSummary::default();

        for result in reader.deserialize::<ImportRecord>() {
            let account = match result {
                Ok(record) => record.into_new_account(),
                Err(error) => {
                    error!("CSV deserialization error: {error}");
                    summary.skipped += 1;
                    continue;
                }
            };

            let created = account
                .map_err(anyhow::Error::from)
                .and_then(|account| self.service.create_account(account).map_err(anyhow::Error::from));

            match created {
                Ok(_) => summary.imported += 1,
                Err(error) => {
                    error!("Skipping CSV row: {error}");
                    summary.skipped += 1;
                }
            }
        }

        info!("Imported {} accounts, skipped {} rows", summary.imported, summary.skipped);

        summary
    }
}
