use super::ui;
use crate::core::format::format_currency;
use crate::core::ledger::{Ledger, TransactionKind};
use crate::core::validation::{is_valid_amount, is_valid_percentage, validate_allocation_sum};
use anyhow::Result;

/// Allowed drift between a fund's balance and its lifetime flows.
const BALANCE_TOLERANCE: f64 = 0.01;

pub fn run(ledger: &Ledger) -> Result<()> {
    let problems = collect_problems(ledger);

    if problems.is_empty() {
        println!("{}", ui::style_text("Ledger OK", ui::StyleType::TotalValue));
        return Ok(());
    }

    println!(
        "{}",
        ui::style_text(
            &format!("Found {} problem(s):", problems.len()),
            ui::StyleType::Error
        )
    );
    for problem in &problems {
        println!("  - {problem}");
    }
    anyhow::bail!("ledger check failed with {} problem(s)", problems.len())
}

/// Reports every entry that violates the ledger's bookkeeping rules.
/// Nothing is rejected at load time; this is the surface where invalid
/// values are shown to the user.
pub fn collect_problems(ledger: &Ledger) -> Vec<String> {
    let mut problems = Vec::new();

    for transaction in &ledger.transactions {
        if !is_valid_amount(transaction.amount) {
            problems.push(format!(
                "transaction '{}': amount {} is not a valid non-negative number",
                transaction.description, transaction.amount
            ));
        }
        match transaction.kind {
            TransactionKind::Income => {
                if let Some(profit) = transaction.profit {
                    if !is_valid_amount(profit) {
                        problems.push(format!(
                            "transaction '{}': profit {} is not a valid non-negative number",
                            transaction.description, profit
                        ));
                    } else if profit > transaction.amount {
                        problems.push(format!(
                            "transaction '{}': profit {} exceeds amount {}",
                            transaction.description,
                            format_currency(profit),
                            format_currency(transaction.amount)
                        ));
                    }
                }
            }
            TransactionKind::Expense => {
                if transaction.profit.is_some() {
                    problems.push(format!(
                        "transaction '{}': profit is only meaningful on income entries",
                        transaction.description
                    ));
                }
            }
        }
        if let Some(fund_id) = &transaction.fund {
            if !ledger.funds.contains_key(fund_id) {
                problems.push(format!(
                    "transaction '{}': unknown fund '{fund_id}'",
                    transaction.description
                ));
            }
        }
    }

    for (id, fund) in &ledger.funds {
        let drift = fund.current_balance - fund.net_flow();
        if drift.is_nan() || drift.abs() > BALANCE_TOLERANCE {
            problems.push(format!(
                "fund '{id}': balance {} does not match lifetime flows ({} in, {} out)",
                format_currency(fund.current_balance),
                format_currency(fund.lifetime_inflow),
                format_currency(fund.lifetime_outflow)
            ));
        }
    }

    for allocation in &ledger.allocations {
        if !is_valid_percentage(allocation.percentage) {
            problems.push(format!(
                "allocation '{}': {} is not a valid percentage",
                allocation.fund, allocation.percentage
            ));
        }
        if !ledger.funds.contains_key(&allocation.fund) {
            problems.push(format!(
                "allocation references unknown fund '{}'",
                allocation.fund
            ));
        }
    }
    if !ledger.allocations.is_empty() && !validate_allocation_sum(&ledger.allocations) {
        let total: f64 = ledger.allocations.iter().map(|a| a.percentage).sum();
        problems.push(format!(
            "allocation percentages sum to {total}, expected 100"
        ));
    }

    problems
}
