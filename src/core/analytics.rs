//! Provides functions for deriving portfolio metrics from the ledger.
use crate::core::ledger::{Fund, Transaction, TransactionKind};
use std::collections::BTreeMap;

/// Portfolio-level totals derived from funds and transactions.
///
/// This is the single source of truth for every aggregate shown on the
/// dashboard; views read these fields instead of re-deriving sums.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FundTotals {
    pub total_balance: f64,
    pub total_income: f64,
    pub total_profit: f64,
    pub net_after_costs: f64,
}

/// Folds the fund mapping and transaction history into [`FundTotals`].
///
/// Balances are summed across all funds; income and profit are summed
/// over income transactions, with absent profit counted as 0. Empty
/// inputs produce zero totals. Inputs are never mutated.
pub fn calculate_fund_totals(
    funds: &BTreeMap<String, Fund>,
    transactions: &[Transaction],
) -> FundTotals {
    let total_balance = funds.values().map(|f| f.current_balance).sum();

    let mut total_income = 0.0;
    let mut total_profit = 0.0;
    for transaction in transactions {
        if transaction.kind == TransactionKind::Income {
            total_income += transaction.amount;
            total_profit += transaction.profit.unwrap_or(0.0);
        }
    }

    FundTotals {
        total_balance,
        total_income,
        total_profit,
        net_after_costs: total_income - total_profit,
    }
}

/// Returns up to `limit` transactions, most recent first. Entries with
/// equal dates keep their ledger order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered.truncate(limit);
    ordered
}

/// A fund's balance as a percentage of the total balance. `None` when
/// the total is not positive.
pub fn fund_share(fund: &Fund, totals: &FundTotals) -> Option<f64> {
    if totals.total_balance > 0.0 {
        Some((fund.current_balance / totals.total_balance) * 100.0)
    } else {
        None
    }
}
