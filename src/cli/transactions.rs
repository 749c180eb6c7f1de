use super::ui;
use crate::core::analytics::{calculate_fund_totals, recent_transactions};
use crate::core::format::format_currency;
use crate::core::ledger::{Ledger, TransactionKind};
use anyhow::Result;
use comfy_table::Cell;

pub fn run(ledger: &Ledger) -> Result<()> {
    println!(
        "{}",
        ui::style_text("Transaction History", ui::StyleType::Title)
    );

    if ledger.transactions.is_empty() {
        println!("No transactions yet. Add your first transaction to get started.");
        return Ok(());
    }

    let ordered = recent_transactions(&ledger.transactions, ledger.transactions.len());

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Description"),
        ui::header_cell("Fund"),
        ui::header_cell("Amount"),
        ui::header_cell("Profit"),
    ]);

    for transaction in ordered {
        let fund_cell = match transaction.fund.as_deref() {
            Some(fund_id) => match ledger.funds.get(fund_id) {
                Some(fund) => Cell::new(&fund.name),
                None => ui::error_cell(fund_id),
            },
            None => ui::na_cell(),
        };
        let profit_cell = match transaction.kind {
            TransactionKind::Income => ui::money_cell(transaction.profit.unwrap_or(0.0)),
            TransactionKind::Expense => ui::subtle_cell("Expense"),
        };
        table.add_row(vec![
            Cell::new(transaction.date.format("%b %-d, %Y").to_string()),
            Cell::new(&transaction.description),
            fund_cell,
            ui::signed_amount_cell(transaction.kind, transaction.amount),
            profit_cell,
        ]);
    }

    println!("{table}");

    let totals = calculate_fund_totals(&ledger.funds, &ledger.transactions);
    println!(
        "\n{} {}   {} {}",
        ui::style_text("Total Income:", ui::StyleType::TotalLabel),
        ui::style_text(
            &format_currency(totals.total_income),
            ui::StyleType::TotalValue
        ),
        ui::style_text("Net Profit:", ui::StyleType::TotalLabel),
        ui::style_text(
            &format_currency(totals.total_profit),
            ui::StyleType::TotalValue
        ),
    );

    Ok(())
}
