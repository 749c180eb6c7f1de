use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fundboard::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to an alternate ledger file
    #[arg(short, long, global = true)]
    ledger_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fundboard::AppCommand {
    fn from(cmd: Commands) -> fundboard::AppCommand {
        match cmd {
            Commands::Dashboard => fundboard::AppCommand::Dashboard,
            Commands::Transactions => fundboard::AppCommand::Transactions,
            Commands::Alloc => fundboard::AppCommand::Alloc,
            Commands::Check => fundboard::AppCommand::Check,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default ledger file
    Setup,
    /// Display the finance dashboard
    Dashboard,
    /// Display the full transaction history
    Transactions,
    /// Compare allocation targets against actual balances
    Alloc,
    /// Report inconsistent ledger entries
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fundboard::cli::setup::setup(),
        Some(cmd) => fundboard::run_command(cmd.into(), cli.ledger_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
