use super::ui;
use crate::core::analytics::{calculate_fund_totals, fund_share};
use crate::core::format::format_percentage;
use crate::core::ledger::Ledger;
use crate::core::validation::{is_valid_percentage, validate_allocation_sum};
use anyhow::Result;
use comfy_table::Cell;

pub fn run(ledger: &Ledger) -> Result<()> {
    println!("{}", ui::style_text("Allocation Plan", ui::StyleType::Title));

    if ledger.allocations.is_empty() {
        println!("No allocations configured.");
        return Ok(());
    }

    let totals = calculate_fund_totals(&ledger.funds, &ledger.transactions);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Fund"),
        ui::header_cell("Target"),
        ui::header_cell("Actual"),
        ui::header_cell("Drift"),
    ]);

    for allocation in &ledger.allocations {
        let (fund_cell, actual) = match ledger.funds.get(&allocation.fund) {
            Some(fund) => (Cell::new(&fund.name), fund_share(fund, &totals)),
            None => (
                ui::error_cell(&format!("{} (unknown)", allocation.fund)),
                None,
            ),
        };
        let target_cell = if is_valid_percentage(allocation.percentage) {
            ui::percentage_cell(allocation.percentage)
        } else {
            ui::error_cell(&format!(
                "{} (invalid)",
                format_percentage(allocation.percentage)
            ))
        };
        let actual_cell = actual.map_or_else(ui::na_cell, ui::percentage_cell);
        let drift_cell = actual.map_or_else(ui::na_cell, |share| {
            ui::drift_cell(share - allocation.percentage)
        });
        table.add_row(vec![fund_cell, target_cell, actual_cell, drift_cell]);
    }

    println!("{table}");

    let total: f64 = ledger.allocations.iter().map(|a| a.percentage).sum();
    if validate_allocation_sum(&ledger.allocations) {
        println!(
            "\nTargets sum to {}.",
            ui::style_text(&format_percentage(total), ui::StyleType::TotalValue)
        );
    } else {
        println!(
            "\n{}",
            ui::style_text(
                &format!(
                    "Targets sum to {}, expected 100%.",
                    format_percentage(total)
                ),
                ui::StyleType::Error
            )
        );
    }

    Ok(())
}
