use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

use crate::core::format::{FUND_PALETTE, format_currency, format_percentage};
use crate::core::ledger::TransactionKind;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Money cell, right aligned. Negative amounts are shown in red.
pub fn money_cell(amount: f64) -> Cell {
    let cell = Cell::new(format_currency(amount)).set_alignment(CellAlignment::Right);
    if amount < 0.0 { cell.fg(Color::Red) } else { cell }
}

/// Signed transaction amount: income green with `+`, expense red with `-`.
pub fn signed_amount_cell(kind: TransactionKind, amount: f64) -> Cell {
    let (sign, color) = match kind {
        TransactionKind::Income => ("+", Color::Green),
        TransactionKind::Expense => ("-", Color::Red),
    };
    Cell::new(format!("{sign}{}", format_currency(amount)))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

/// Right-aligned percentage cell.
pub fn percentage_cell(value: f64) -> Cell {
    Cell::new(format_percentage(value)).set_alignment(CellAlignment::Right)
}

/// Cell showing deviation from an allocation target.
pub fn drift_cell(drift: f64) -> Cell {
    let text = format!("{drift:+.1}%");
    let color = if drift.abs() < 1.0 {
        Color::Green
    } else {
        Color::Red
    };
    Cell::new(text).fg(color).set_alignment(CellAlignment::Right)
}

/// Creates a cell for "N/A" values.
pub fn na_cell() -> Cell {
    Cell::new("N/A")
        .fg(Color::DarkGrey)
        .set_alignment(CellAlignment::Right)
}

/// Dimmed text cell.
pub fn subtle_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::DarkGrey)
}

/// Error text cell.
pub fn error_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Red)
}

/// Colored marker approximating a fund's palette color in the terminal.
pub fn fund_dot(hex: &str) -> String {
    let index = FUND_PALETTE
        .iter()
        .position(|c| c.eq_ignore_ascii_case(hex));
    let dot = match index {
        Some(0) => style("●").blue(),
        Some(1) => style("●").green(),
        Some(2) => style("●").magenta(),
        Some(3) => style("●").red(),
        Some(4) => style("●").yellow(),
        Some(5) => style("●").color256(63),
        Some(6) => style("●").color256(205),
        Some(7) => style("●").color256(245),
        Some(8) => style("●").color256(112),
        Some(9) => style("●").color256(208),
        _ => style("●").white(),
    };
    dot.to_string()
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    println!("\n{}", "─".repeat(term_width));
}
