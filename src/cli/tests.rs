use super::{parse_log_level, Cli, Commands};
use crate::models::AccountType;
use anyhow::{bail, Result};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

#[test]
fn test_parse_log_level_accepts_known_levels_and_falls_back_to_error() {
    assert_eq!(parse_log_level("trace"), LevelFilter::TRACE);
    assert_eq!(parse_log_level("DEBUG"), LevelFilter::DEBUG);
    assert_eq!(parse_log_level("Info"), LevelFilter::INFO);
    assert_eq!(parse_log_level("warn"), LevelFilter::WARN);
    assert_eq!(parse_log_level("error"), LevelFilter::ERROR);
    assert_eq!(parse_log_level("verbose"), LevelFilter::ERROR);
}

#[test]
fn test_create_command_applies_defaults() -> Result<()> {
    let cli = Cli::try_parse_from([
        "bank-accounts", "--database", "test.db", "create",
        "--holder-name", "Jorge Felipe", "--account-type", "checking"
    ])?;

    assert_eq!(cli.database, PathBuf::from("test.db"));

    let Commands::Create { holder_name, account_type, balance, inactive } = cli.command else {
        bail!("expected the create command");
    };

    assert_eq!(holder_name, "Jorge Felipe");
    assert_eq!(account_type, AccountType::Checking);
    assert!(balance.is_zero());
    assert!(!inactive);

    Ok(())
}

#[test]
fn test_create_command_accepts_balance_and_inactive_flag() -> Result<()> {
    let cli = Cli::try_parse_from([
        "bank-accounts", "create", "--holder-name", "Maria", "--account-type", "SAVINGS",
        "--balance", "1500.75", "--inactive", "--database", ":memory:"
    ])?;

    assert_eq!(cli.database, PathBuf::from(":memory:"));

    let Commands::Create { account_type, balance, inactive, .. } = cli.command else {
        bail!("expected the create command");
    };

    assert_eq!(account_type, AccountType::Savings);
    assert_eq!(balance, Decimal::from_str("1500.75")?);
    assert!(inactive);

    Ok(())
}

#[test]
fn test_update_command_requires_explicit_active_value() -> Result<()> {
    let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    let cli = Cli::try_parse_from([
        "bank-accounts", "update", id, "--holder-name", "Jorge Felipe", "--active", "false"
    ])?;

    let Commands::Update { account_id, holder_name, active } = cli.command else {
        bail!("expected the update command");
    };

    assert_eq!(account_id.to_string(), id);
    assert_eq!(holder_name, "Jorge Felipe");
    assert!(!active);

    assert!(Cli::try_parse_from(["bank-accounts", "update", id, "--holder-name", "Jorge Felipe"]).is_err());

    Ok(())
}

#[test]
fn test_invalid_arguments_are_rejected() {
    assert!(Cli::try_parse_from(["bank-accounts", "get", "not-a-uuid"]).is_err());
    assert!(Cli::try_parse_from([
        "bank-accounts", "create", "--holder-name", "Jorge", "--account-type", "credit"
    ]).is_err());
    assert!(Cli::try_parse_from(["bank-accounts"]).is_err());
}
