//! # Bill Calculation
//!
//! The pure arithmetic at the heart of Tippy. An immutable [`BillInput`]
//! snapshot goes in, an immutable [`BillBreakdown`] comes out, and nothing
//! in between touches I/O or UI state.
//!
//! ```text
//! BillInput  →  BillBreakdown::from_input()  →  BillBreakdown
//! ```
//!
//! The caller re-runs the transformation on every input event (keystroke,
//! slider move, split toggle). There is no caching and no hidden state, so
//! repeated calls with the same snapshot always produce the same breakdown.

use crate::core::currency::CurrencyFormat;

/// Tip percentage slider range, matching the on-screen control.
pub const MIN_TIP_PERCENT: f64 = 0.0;
pub const MAX_TIP_PERCENT: f64 = 30.0;
pub const DEFAULT_TIP_PERCENT: f64 = 15.0;

/// Participant slider range, matching the on-screen control.
pub const MIN_PEOPLE: u32 = 1;
pub const MAX_PEOPLE: u32 = 10;
pub const DEFAULT_PEOPLE: u32 = 1;

/// Immutable snapshot of everything the user has entered.
///
/// `amount_text` is kept raw — parsing happens inside the transformation so
/// that a half-typed value (`"12."`, `""`, `"abc"`) never produces an error,
/// only a zero amount.
#[derive(Debug, Clone, PartialEq)]
pub struct BillInput {
    /// Free-form text from the amount field.
    pub amount_text: String,
    /// Tip percentage. The reducer clamps this to [0, 30] before it gets here.
    pub tip_percent: f64,
    /// Participant count. The reducer clamps this to [1, 10] before it gets here.
    pub people: u32,
}

impl BillInput {
    pub fn new(amount_text: impl Into<String>, tip_percent: f64, people: u32) -> Self {
        Self {
            amount_text: amount_text.into(),
            tip_percent,
            people,
        }
    }
}

impl Default for BillInput {
    fn default() -> Self {
        Self {
            amount_text: String::new(),
            tip_percent: DEFAULT_TIP_PERCENT,
            people: DEFAULT_PEOPLE,
        }
    }
}

/// Derived values for one input snapshot, plus their display strings.
///
/// The raw `f64` fields carry full precision; rounding to cents happens only
/// in the formatted strings (half-even, see [`CurrencyFormat`]).
#[derive(Debug, Clone, PartialEq)]
pub struct BillBreakdown {
    pub amount: f64,
    pub tip: f64,
    pub total: f64,
    pub per_person: f64,
    pub tip_display: String,
    pub total_display: String,
    pub per_person_display: String,
}

impl BillBreakdown {
    /// The one pure transformation: input snapshot → derived breakdown.
    pub fn from_input(input: &BillInput, currency: &CurrencyFormat) -> Self {
        let amount = parse_amount(&input.amount_text);
        let tip = compute_tip(amount, input.tip_percent);
        let total = compute_total(amount, tip);
        let per_person = compute_per_person(total, input.people);
        Self {
            amount,
            tip,
            total,
            per_person,
            tip_display: currency.format(tip),
            total_display: currency.format(total),
            per_person_display: currency.format(per_person),
        }
    }
}

/// Converts free-form text to a decimal amount.
///
/// Empty or non-numeric input maps to 0.0 rather than an error; the amount
/// field never shows a failure state. Surrounding whitespace is ignored.
/// Negative text parses to a negative value and propagates; this function
/// does not guard against it.
pub fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// `amount * percent / 100`. No rounding; formatting owns that.
pub fn compute_tip(amount: f64, percent: f64) -> f64 {
    amount * percent / 100.0
}

pub fn compute_total(amount: f64, tip: f64) -> f64 {
    amount + tip
}

/// Splits `total` across `people`. A non-positive count falls back to the
/// undivided total instead of dividing by zero.
pub fn compute_per_person(total: f64, people: u32) -> f64 {
    if people > 0 {
        total / f64::from(people)
    } else {
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_parse_amount_valid() {
        assert!((parse_amount("100") - 100.0).abs() < EPS);
        assert!((parse_amount("50.5") - 50.5).abs() < EPS);
        assert!((parse_amount("  12.34  ") - 12.34).abs() < EPS);
    }

    #[test]
    fn test_parse_amount_invalid_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12,50"), 0.0);
        assert_eq!(parse_amount("1.2.3"), 0.0);
    }

    #[test]
    fn test_parse_amount_negative_propagates() {
        assert!((parse_amount("-5") - -5.0).abs() < EPS);
    }

    #[test]
    fn test_compute_tip() {
        assert!((compute_tip(100.0, 15.0) - 15.0).abs() < EPS);
        assert!((compute_tip(200.0, 20.0) - 40.0).abs() < EPS);
        assert_eq!(compute_tip(50.5, 0.0), 0.0);
    }

    #[test]
    fn test_compute_total() {
        assert!((compute_total(100.0, 15.0) - 115.0).abs() < EPS);
        assert_eq!(compute_total(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_compute_per_person_divides() {
        assert!((compute_per_person(240.0, 4) - 60.0).abs() < EPS);
        assert!((compute_per_person(50.5, 2) - 25.25).abs() < EPS);
    }

    #[test]
    fn test_compute_per_person_zero_people_falls_back() {
        assert_eq!(compute_per_person(115.0, 0), 115.0);
    }

    #[test]
    fn test_breakdown_is_idempotent() {
        let input = BillInput::new("200", 20.0, 4);
        let currency = CurrencyFormat::default();
        let a = BillBreakdown::from_input(&input, &currency);
        let b = BillBreakdown::from_input(&input, &currency);
        assert_eq!(a, b);
    }

    #[test]
    fn test_breakdown_scenario_full() {
        let currency = CurrencyFormat::default();
        let b = BillBreakdown::from_input(&BillInput::new("100", 15.0, 1), &currency);
        assert!((b.tip - 15.0).abs() < EPS);
        assert!((b.total - 115.0).abs() < EPS);
        assert!((b.per_person - 115.0).abs() < EPS);
        assert_eq!(b.tip_display, "R 15,00");
        assert_eq!(b.total_display, "R 115,00");
    }

    #[test]
    fn test_breakdown_empty_amount() {
        let currency = CurrencyFormat::default();
        let b = BillBreakdown::from_input(&BillInput::new("", 15.0, 1), &currency);
        assert_eq!(b.amount, 0.0);
        assert_eq!(b.tip, 0.0);
        assert_eq!(b.total, 0.0);
        assert_eq!(b.tip_display, "R 0,00");
    }
}
