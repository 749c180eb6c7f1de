use crate::core::ledger::Ledger;
use anyhow::{Context, Result};
use std::path::Path;

/// Creates a default ledger file with example content at the default location
pub fn setup() -> Result<()> {
    let path = Ledger::default_ledger_path()?;
    setup_at_path(path)
}

/// Creates a default ledger file with example content at the specified path
pub fn setup_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Ledger file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    // Include the example ledger as a string literal in the binary
    let default_ledger = include_str!("../../docs/example_ledger.yaml");

    std::fs::write(path, default_ledger)
        .with_context(|| format!("Failed to write ledger file to {}", path.display()))?;

    tracing::info!("Created default ledger at {}", path.display());
    Ok(())
}
