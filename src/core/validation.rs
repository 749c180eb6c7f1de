//! Validation predicates for ledger inputs
//!
//! Every check returns a plain boolean; callers decide how a rejected
//! value is surfaced to the user.

use crate::core::ledger::Allocation;
use chrono::NaiveDate;

/// Tolerance for floating-point summation error in allocation plans.
pub const SUM_TOLERANCE: f64 = 0.01;

/// True iff `0 <= value <= 100`, bounds inclusive.
pub fn is_valid_percentage(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

/// True iff the value is a non-negative number. NaN is rejected.
pub fn is_valid_amount(value: f64) -> bool {
    !value.is_nan() && value >= 0.0
}

/// True iff the string is a well-formed `YYYY-MM-DD` calendar date.
pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// True iff the plan's percentages sum to 100 within [`SUM_TOLERANCE`].
/// An empty plan sums to 0 and fails.
pub fn validate_allocation_sum(allocations: &[Allocation]) -> bool {
    let total: f64 = allocations.iter().map(|a| a.percentage).sum();
    (total - 100.0).abs() < SUM_TOLERANCE
}
