//! Display formatting and identifier helpers

use uuid::Uuid;

/// Fixed palette cycled across funds; index 10 wraps back to index 0.
pub const FUND_PALETTE: [&str; 10] = [
    "#3B82F6", // blue
    "#10B981", // emerald
    "#8B5CF6", // violet
    "#EF4444", // red
    "#F59E0B", // amber
    "#6366F1", // indigo
    "#EC4899", // pink
    "#6B7280", // gray
    "#84CC16", // lime
    "#F97316", // orange
];

/// Renders an amount as a USD string with two fraction digits and comma
/// grouping, e.g. `1234.5` becomes `"$1,234.50"`.
pub fn format_currency(amount: f64) -> String {
    let magnitude = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = magnitude
        .split_once('.')
        .unwrap_or((magnitude.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

/// Renders a value with one fraction digit and a trailing percent sign.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Returns a fresh identifier for ledger entries.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Deterministic palette color for a fund's position in the ledger.
pub fn fund_color(index: usize) -> &'static str {
    FUND_PALETTE[index % FUND_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(format_currency(42.0), "$42.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(12.34), "12.3%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(100.0), "100.0%");
        assert_eq!(format_percentage(-3.25), "-3.2%");
    }

    #[test]
    fn test_fund_color_cycles() {
        assert_eq!(fund_color(0), fund_color(10));
        assert_eq!(fund_color(3), fund_color(13));
        assert_ne!(fund_color(0), fund_color(1));
        assert_eq!(fund_color(0), "#3B82F6");
    }

    #[test]
    fn test_generate_id_is_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
