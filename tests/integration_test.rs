use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::{anyhow, Result};
use tempfile::{NamedTempFile, TempDir};

const HEADER: &str = "account_id,holder_name,balance,account_type,is_active";

fn bank_accounts(database: &Path, args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_bank-accounts");

    let output = Command::new(binary_path)
        .arg("--database")
        .arg(database)
        .args(args)
        .output()?;

    Ok(output)
}

fn stdout_lines(output: &Output) -> Result<Vec<String>> {
    let stdout = String::from_utf8(output.stdout.clone())?;
    Ok(stdout.lines().map(str::to_string).collect())
}

fn create_account(database: &Path, holder_name: &str, extra: &[&str]) -> Result<String> {
    let mut args = vec!["create", "--holder-name", holder_name, "--account-type", "checking"];
    args.extend_from_slice(extra);

    let output = bank_accounts(database, &args)?;

    assert!(output.status.success());

    let lines = stdout_lines(&output)?;

    assert_eq!(lines[0], HEADER);

    let account_id = lines[1].split(',').next().ok_or_else(|| anyhow!("create printed no account id"))?;

    Ok(account_id.to_string())
}

#[test]
fn test_cli_creates_and_lists_accounts() -> Result<()> {
    let directory = TempDir::new()?;
    let database = directory.path().join("accounts.db");

    let account_id = create_account(&database, "Jorge Felipe", &["--balance", "1000.50"])?;

    let output = bank_accounts(&database, &["list"])?;

    assert!(output.status.success());

    let lines = stdout_lines(&output)?;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], format!("{account_id},Jorge Felipe,1000.50,CHECKING,true"));

    Ok(())
}

#[test]
fn test_cli_lists_empty_database_with_header_only() -> Result<()> {
    let directory = TempDir::new()?;
    let database = directory.path().join("accounts.db");

    let output = bank_accounts(&database, &["list"])?;

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output)?, vec![HEADER.to_string()]);

    Ok(())
}

#[test]
fn test_cli_blocked_account_is_frozen() -> Result<()> {
    let directory = TempDir::new()?;
    let database = directory.path().join("accounts.db");
    let account_id = create_account(&database, "Jorge Felipe", &[])?;

    let status = bank_accounts(&database, &["status", &account_id])?;

    assert!(status.status.success());
    assert_eq!(stdout_lines(&status)?, vec!["true".to_string()]);

    let block = bank_accounts(&database, &["update", &account_id, "--holder-name", "Jorge Felipe", "--active", "false"])?;

    assert!(block.status.success());
    assert!(stdout_lines(&block)?[1].ends_with(",false"));

    let status = bank_accounts(&database, &["status", &account_id])?;

    assert_eq!(stdout_lines(&status)?, vec!["false".to_string()]);

    let update = bank_accounts(&database, &["update", &account_id, "--holder-name", "Maria", "--active", "true"])?;

    assert_eq!(update.status.code(), Some(4));
    assert!(String::from_utf8(update.stderr)?.contains("blocked account cannot be updated"));

    let delete = bank_accounts(&database, &["delete", &account_id])?;

    assert_eq!(delete.status.code(), Some(4));
    assert!(String::from_utf8(delete.stderr)?.contains("blocked account cannot be closed; contact account manager"));

    let get = bank_accounts(&database, &["get", &account_id])?;

    assert!(get.status.success());
    assert_eq!(stdout_lines(&get)?[1], format!("{account_id},Jorge Felipe,0,CHECKING,false"));

    Ok(())
}

#[test]
fn test_cli_deletes_active_account() -> Result<()> {
    let directory = TempDir::new()?;
    let database = directory.path().join("accounts.db");
    let account_id = create_account(&database, "Jorge Felipe", &[])?;

    let delete = bank_accounts(&database, &["delete", &account_id])?;

    assert!(delete.status.success());

    let get = bank_accounts(&database, &["get", &account_id])?;

    assert_eq!(get.status.code(), Some(3));

    let status = bank_accounts(&database, &["status", &account_id])?;

    assert_eq!(status.status.code(), Some(3));

    Ok(())
}

#[test]
fn test_cli_reports_unknown_account() -> Result<()> {
    let directory = TempDir::new()?;
    let database = directory.path().join("accounts.db");
    let unknown = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    for args in [vec!["get", unknown], vec!["status", unknown], vec!["delete", unknown]] {
        let output = bank_accounts(&database, &args)?;

        assert_eq!(output.status.code(), Some(3));
        assert!(String::from_utf8(output.stderr)?.contains("was not found"));
    }

    let update = bank_accounts(&database, &["update", unknown, "--holder-name", "Jorge", "--active", "true"])?;

    assert_eq!(update.status.code(), Some(3));

    Ok(())
}

#[test]
fn test_cli_imports_csv_file() -> Result<()> {
    let directory = TempDir::new()?;
    let database = directory.path().join("accounts.db");
    let mut file = NamedTempFile::new()?;

    writeln!(file, "holder_name,account_type,balance,is_active")?;
    writeln!(file, "Jorge Felipe,checking,1000,true")?;
    writeln!(file, "Maria Souza,savings,,")?;
    writeln!(file, "Broken,credit,1,true")?;
    file.flush()?;

    let path = file.path().to_str().ok_or_else(|| anyhow!("temporary path is not UTF-8"))?;
    let import = bank_accounts(&database, &["import", path])?;

    assert!(import.status.success());
    assert_eq!(stdout_lines(&import)?, vec!["imported,skipped".to_string(), "2,1".to_string()]);

    let list = bank_accounts(&database, &["list"])?;
    let lines = stdout_lines(&list)?;

    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with(",Jorge Felipe,1000,CHECKING,true"));
    assert!(lines[2].ends_with(",Maria Souza,0,SAVINGS,true"));

    Ok(())
}

#[test]
fn test_cli_rejects_invalid_arguments() -> Result<()> {
    let directory = TempDir::new()?;
    let database = directory.path().join("accounts.db");

    let output = bank_accounts(&database, &["get", "not-a-uuid"])?;

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));

    Ok(())
}
