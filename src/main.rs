use std::io::{stderr, stdout, Write};
use std::process::exit;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use bank_accounts::cli::{parse_log_level, Cli, Commands};
use bank_accounts::import::CsvImporter;
use bank_accounts::models::{Account, AccountError, NewAccount};
use bank_accounts::service::AccountService;
use bank_accounts::storage::SqliteAccountStore;

const EXIT_NOT_FOUND: i32 = 3;
const EXIT_BLOCKED: i32 = 4;

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let store = Arc::new(SqliteAccountStore::open(&cli.database)?);
    let service = AccountService::new(store);
    debug!("Using database {}", cli.database.display());

    match run(&service, cli.command) {
        Ok(()) => Ok(()),
        Err(error) => match error.downcast_ref::<AccountError>() {
            Some(account_error @ AccountError::NotFound { .. }) => {
                eprintln!("{account_error}");
                exit(EXIT_NOT_FOUND);
            }
            Some(account_error @ AccountError::Blocked { .. }) => {
                eprintln!("{account_error}");
                exit(EXIT_BLOCKED);
            }
            _ => Err(error)
        }
    }
}

fn run(service: &AccountService<SqliteAccountStore>, command: Commands) -> Result<()> {
    match command {
        Commands::Create { holder_name, account_type, balance, inactive } => {
            let account = NewAccount::new(holder_name, account_type)
                .with_balance(balance)
                .with_active(!inactive);
            write_accounts_to_stdout(&[service.create_account(account)?])
        }
        Commands::List => write_accounts_to_stdout(&service.list_accounts()?),
        Commands::Get { account_id } => write_accounts_to_stdout(&[service.get_account_by_id(account_id)?]),
        Commands::Status { account_id } => {
            let is_active = service.is_account_active(account_id)?;
            writeln!(stdout().lock(), "{is_active}")?;
            Ok(())
        }
        Commands::Update { account_id, holder_name, active } => {
            write_accounts_to_stdout(&[service.update_account(account_id, holder_name, active)?])
        }
        Commands::Delete { account_id } => {
            service.delete_account(account_id)?;
            Ok(())
        }
        Commands::Import { path } => {
            let summary = CsvImporter::new(service).run(&path)?;
            if summary.skipped > 0 {
                error!("{} rows of {} were skipped", summary.skipped, path.display());
            }

            let mut output = stdout().lock();
            writeln!(output, "imported,skipped")?;
            writeln!(output, "{},{}", summary.imported, summary.skipped)?;
            Ok(())
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries command output, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_accounts_to_stdout(accounts: &[Account]) -> Result<()> {
    let mut output = csv::Writer::from_writer(stdout().lock());

    //NOTE: an empty listing still gets its header row
    if accounts.is_empty() {
        output.write_record(["account_id", "holder_name", "balance", "account_type", "is_active"])?;
    }

    for account in accounts {
        output.serialize(account)?;
    }

    output.flush()?;

    Ok(())
}
