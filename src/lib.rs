pub mod cli;
pub mod core;

use crate::core::ledger::Ledger;
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Dashboard,
    Transactions,
    Alloc,
    Check,
}

pub fn run_command(command: AppCommand, ledger_path: Option<&str>) -> Result<()> {
    info!("Fund board starting...");

    let ledger = match ledger_path {
        Some(path) => Ledger::load_from_path(path)?,
        None => Ledger::load()?,
    };
    debug!(
        "Loaded ledger with {} funds and {} transactions",
        ledger.funds.len(),
        ledger.transactions.len()
    );

    match command {
        AppCommand::Dashboard => cli::dashboard::run(&ledger),
        AppCommand::Transactions => cli::transactions::run(&ledger),
        AppCommand::Alloc => cli::alloc::run(&ledger),
        AppCommand::Check => cli::check::run(&ledger),
    }
}
