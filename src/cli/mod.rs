#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::level_filters::LevelFilter;

use crate::models::AccountType;
use crate::types::AccountId;

#[derive(Debug, Parser)]
#[command(name = "bank-accounts")]
#[command(about = "Bank account records backed by SQLite", long_about = None)]
pub struct Cli {
    /// SQLite database file, `:memory:` for a throwaway database
    #[arg(long, global = true, env = "BANK_ACCOUNTS_DATABASE", default_value = "bank_accounts.db")]
    pub database: PathBuf,

    /// error, warn, info, debug or trace
    #[arg(long, global = true, env = "BANK_ACCOUNTS_LOG", default_value = "error")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open a new account
    Create {
        #[arg(long)]
        holder_name: String,
        #[arg(long)]
        account_type: AccountType,
        #[arg(long, default_value_t = Decimal::ZERO)]
        balance: Decimal,
        /// Open the account already blocked
        #[arg(long)]
        inactive: bool,
    },
    /// List every account
    List,
    /// Show a single account
    Get {
        account_id: AccountId,
    },
    /// Print whether an account is active
    Status {
        account_id: AccountId,
    },
    /// Change the holder name and active flag of an active account
    Update {
        account_id: AccountId,
        #[arg(long)]
        holder_name: String,
        #[arg(long, required = true, action = clap::ArgAction::Set)]
        active: bool,
    },
    /// Close an active account
    Delete {
        account_id: AccountId,
    },
    /// Create accounts from a CSV file (holder_name,account_type,balance,is_active)
    Import {
        path: PathBuf,
    },
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
