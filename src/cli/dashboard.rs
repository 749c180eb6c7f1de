use super::ui;
use crate::core::analytics::{FundTotals, calculate_fund_totals, recent_transactions};
use crate::core::format::{format_currency, fund_color};
use crate::core::ledger::{Ledger, TransactionKind};
use anyhow::Result;
use comfy_table::Cell;

pub fn run(ledger: &Ledger) -> Result<()> {
    let totals = calculate_fund_totals(&ledger.funds, &ledger.transactions);

    println!("{}", ui::style_text("Dashboard", ui::StyleType::Title));
    let last_updated = ledger
        .last_updated
        .map_or("N/A".to_string(), |ts| ts.format("%b %-d, %Y %H:%M").to_string());
    println!(
        "{}",
        ui::style_text(
            &format!("Last updated: {last_updated}"),
            ui::StyleType::Subtle
        )
    );

    print_metrics(ledger, &totals);
    ui::print_separator();
    print_funds_overview(ledger);
    print_recent_transactions(ledger);

    Ok(())
}

fn print_metrics(ledger: &Ledger, totals: &FundTotals) {
    println!(
        "\n{} {}  {}",
        ui::style_text("Total Balance:", ui::StyleType::TotalLabel),
        ui::style_text(
            &format_currency(totals.total_balance),
            ui::StyleType::TotalValue
        ),
        ui::style_text(
            &format!("across {} funds", ledger.funds.len()),
            ui::StyleType::Subtle
        ),
    );
    println!(
        "{} {}  {}",
        ui::style_text("Total Income: ", ui::StyleType::TotalLabel),
        ui::style_text(
            &format_currency(totals.total_income),
            ui::StyleType::TotalValue
        ),
        ui::style_text("lifetime total", ui::StyleType::Subtle),
    );
    println!(
        "{} {}  {}",
        ui::style_text("Net Profit:   ", ui::StyleType::TotalLabel),
        ui::style_text(
            &format_currency(totals.total_profit),
            ui::StyleType::TotalValue
        ),
        ui::style_text(
            &format!("after costs: {}", format_currency(totals.net_after_costs)),
            ui::StyleType::Subtle
        ),
    );
}

fn print_funds_overview(ledger: &Ledger) {
    println!("\n{}", ui::style_text("Funds Overview", ui::StyleType::Title));
    if ledger.funds.is_empty() {
        println!("No funds configured yet.");
        return;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Fund"),
        ui::header_cell("Balance"),
        ui::header_cell("Lifetime In"),
        ui::header_cell("Lifetime Out"),
    ]);

    for (index, fund) in ledger.funds.values().enumerate() {
        let hex = fund.color.as_deref().unwrap_or_else(|| fund_color(index));
        let label = if fund.description.is_empty() {
            format!("{} {}", ui::fund_dot(hex), fund.name)
        } else {
            format!(
                "{} {}\n{}",
                ui::fund_dot(hex),
                fund.name,
                ui::style_text(&fund.description, ui::StyleType::Subtle)
            )
        };
        table.add_row(vec![
            Cell::new(label),
            ui::money_cell(fund.current_balance),
            ui::money_cell(fund.lifetime_inflow),
            ui::money_cell(fund.lifetime_outflow),
        ]);
    }

    println!("{table}");
}

fn print_recent_transactions(ledger: &Ledger) {
    println!(
        "\n{}",
        ui::style_text("Recent Transactions", ui::StyleType::Title)
    );

    let recent = recent_transactions(&ledger.transactions, ledger.settings.recent_transactions);
    if recent.is_empty() {
        println!("No transactions yet. Add your first transaction to get started.");
        return;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Description"),
        ui::header_cell("Amount"),
        ui::header_cell("Profit"),
    ]);

    for transaction in recent {
        let profit_cell = match transaction.kind {
            TransactionKind::Income => ui::money_cell(transaction.profit.unwrap_or(0.0)),
            TransactionKind::Expense => ui::subtle_cell("Expense"),
        };
        table.add_row(vec![
            Cell::new(transaction.date.format("%b %-d, %Y").to_string()),
            Cell::new(&transaction.description),
            ui::signed_amount_cell(transaction.kind, transaction.amount),
            profit_cell,
        ]);
    }

    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::{DisplaySettings, Fund, Transaction};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn sample_ledger() -> Ledger {
        let mut funds = BTreeMap::new();
        funds.insert(
            "emergency".to_string(),
            Fund {
                id: "emergency".to_string(),
                name: "Emergency".to_string(),
                description: "Rainy day reserve".to_string(),
                color: Some("#3B82F6".to_string()),
                current_balance: 1200.0,
                lifetime_inflow: 2000.0,
                lifetime_outflow: 800.0,
            },
        );
        funds.insert(
            "travel".to_string(),
            Fund {
                id: "travel".to_string(),
                name: "Travel".to_string(),
                description: String::new(),
                color: None,
                current_balance: -50.0,
                lifetime_inflow: 200.0,
                lifetime_outflow: 250.0,
            },
        );

        Ledger {
            funds,
            transactions: vec![
                Transaction {
                    id: "t1".to_string(),
                    description: "Invoice".to_string(),
                    date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
                    amount: 1500.0,
                    kind: TransactionKind::Income,
                    profit: Some(600.0),
                    fund: Some("emergency".to_string()),
                },
                Transaction {
                    id: "t2".to_string(),
                    description: "Train tickets".to_string(),
                    date: NaiveDate::from_ymd_opt(2026, 7, 3).unwrap(),
                    amount: 120.0,
                    kind: TransactionKind::Expense,
                    profit: None,
                    fund: Some("travel".to_string()),
                },
            ],
            allocations: Vec::new(),
            last_updated: NaiveDate::from_ymd_opt(2026, 7, 3).unwrap().and_hms_opt(18, 30, 0),
            settings: DisplaySettings::default(),
        }
    }

    #[test]
    fn test_dashboard_renders_sample_ledger() {
        let ledger = sample_ledger();
        assert!(run(&ledger).is_ok());
    }

    #[test]
    fn test_dashboard_renders_empty_ledger() {
        let ledger = Ledger {
            funds: BTreeMap::new(),
            transactions: Vec::new(),
            allocations: Vec::new(),
            last_updated: None,
            settings: DisplaySettings::default(),
        };
        assert!(run(&ledger).is_ok());
    }
}
