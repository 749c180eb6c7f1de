use crate::core::format::generate_id;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Fund {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: Option<String>,
    pub current_balance: f64,
    #[serde(default)]
    pub lifetime_inflow: f64,
    #[serde(default)]
    pub lifetime_outflow: f64,
}

impl Fund {
    pub fn net_flow(&self) -> f64 {
        self.lifetime_inflow - self.lifetime_outflow
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Transaction {
    #[serde(default = "generate_id")]
    pub id: String,
    pub description: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: TransactionKind,
    /// Only meaningful for income entries
    #[serde(default)]
    pub profit: Option<f64>,
    #[serde(default)]
    pub fund: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Allocation {
    pub fund: String,
    pub percentage: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DisplaySettings {
    #[serde(default = "default_recent_limit")]
    pub recent_transactions: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            recent_transactions: default_recent_limit(),
        }
    }
}

fn default_recent_limit() -> usize {
    5
}

/// A read-only snapshot of the user's ledger file. Funds are keyed by
/// identifier; transactions keep their file order.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Ledger {
    #[serde(default)]
    pub funds: BTreeMap<String, Fund>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub allocations: Vec<Allocation>,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
    #[serde(default)]
    pub settings: DisplaySettings,
}

impl Ledger {
    pub fn load() -> Result<Self> {
        debug!("Loading ledger from default path");
        let ledger_path = Self::default_ledger_path()?;
        Self::load_from_path(&ledger_path)
    }

    pub fn default_ledger_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "fundboard", "fundboard")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("ledger.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let ledger_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read ledger file: {}", path.as_ref().display()))?;

        let mut ledger: Self = serde_yaml::from_str(&ledger_str)
            .with_context(|| format!("Failed to parse ledger file: {}", path.as_ref().display()))?;
        // Funds carry their map key as id unless one was given explicitly
        for (id, fund) in &mut ledger.funds {
            if fund.id.is_empty() {
                fund.id = id.clone();
            }
        }
        debug!("Successfully loaded ledger");
        Ok(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_deserialization() {
        let yaml_str = r##"
funds:
  emergency:
    name: "Emergency"
    description: "Rainy day reserve"
    color: "#3B82F6"
    current_balance: 1200.0
    lifetime_inflow: 2000.0
    lifetime_outflow: 800.0
  travel:
    name: "Travel"
    current_balance: 450.0
transactions:
  - id: "txn-1"
    description: "July freelance invoice"
    date: 2026-07-01
    amount: 1500.0
    kind: INCOME
    profit: 600.0
    fund: emergency
  - description: "Train tickets"
    date: 2026-07-03
    amount: 120.0
    kind: EXPENSE
allocations:
  - fund: emergency
    percentage: 60.0
  - fund: travel
    percentage: 40.0
last_updated: 2026-07-03T18:30:00
"##;

        let ledger: Ledger = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(ledger.funds.len(), 2);
        let emergency = &ledger.funds["emergency"];
        assert_eq!(emergency.name, "Emergency");
        assert_eq!(emergency.description, "Rainy day reserve");
        assert_eq!(emergency.color, Some("#3B82F6".to_string()));
        assert_eq!(emergency.current_balance, 1200.0);
        assert_eq!(emergency.net_flow(), 1200.0);
        let travel = &ledger.funds["travel"];
        assert_eq!(travel.description, "");
        assert_eq!(travel.lifetime_inflow, 0.0);

        assert_eq!(ledger.transactions.len(), 2);
        assert_eq!(ledger.transactions[0].id, "txn-1");
        assert_eq!(ledger.transactions[0].kind, TransactionKind::Income);
        assert_eq!(ledger.transactions[0].profit, Some(600.0));
        assert_eq!(ledger.transactions[0].fund, Some("emergency".to_string()));
        assert_eq!(
            ledger.transactions[0].date,
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()
        );
        assert_eq!(ledger.transactions[1].kind, TransactionKind::Expense);
        assert_eq!(ledger.transactions[1].profit, None);
        assert_eq!(ledger.transactions[1].fund, None);

        assert_eq!(ledger.allocations.len(), 2);
        assert_eq!(ledger.allocations[0].fund, "emergency");
        assert_eq!(ledger.allocations[0].percentage, 60.0);

        assert!(ledger.last_updated.is_some());
        assert_eq!(ledger.settings.recent_transactions, 5);
    }

    #[test]
    fn test_transaction_id_generated_when_missing() {
        let yaml_str = r#"
transactions:
  - description: "A"
    date: 2026-01-01
    amount: 1.0
    kind: INCOME
  - description: "B"
    date: 2026-01-01
    amount: 2.0
    kind: EXPENSE
"#;

        let ledger: Ledger = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert!(!ledger.transactions[0].id.is_empty());
        assert!(!ledger.transactions[1].id.is_empty());
        assert_ne!(ledger.transactions[0].id, ledger.transactions[1].id);
    }

    #[test]
    fn test_fund_id_backfilled_from_key() {
        let yaml_str = r#"
funds:
  savings:
    name: "Savings"
    current_balance: 10.0
"#;
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), yaml_str).unwrap();

        let ledger = Ledger::load_from_path(file.path()).expect("Failed to load");
        assert_eq!(ledger.funds["savings"].id, "savings");
    }

    #[test]
    fn test_empty_sections_default() {
        let ledger: Ledger = serde_yaml::from_str("funds: {}").expect("Failed to deserialize");
        assert!(ledger.funds.is_empty());
        assert!(ledger.transactions.is_empty());
        assert!(ledger.allocations.is_empty());
        assert!(ledger.last_updated.is_none());
        assert_eq!(ledger.settings.recent_transactions, 5);
    }
}
