//! # Currency Formatting
//!
//! Renders decimal amounts in one fixed regional format. The default matches
//! the South African Rand as the platform formatter prints it: symbol, space
//! as thousands separator, comma as decimal separator — `R 1 234,56`.
//!
//! Rounding to cents uses half-even (banker's rounding) and happens only
//! here, at display time; the calculation core never rounds.

use serde::{Deserialize, Serialize};

/// A fixed regional currency format. The separators are configurable through
/// the config file but default to the ZAR conventions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CurrencyFormat {
    /// Currency symbol placed before the amount.
    pub symbol: String,
    /// Separator between thousands groups.
    pub thousands_separator: String,
    /// Separator before the two fractional digits.
    pub decimal_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R".to_string(),
            thousands_separator: " ".to_string(),
            decimal_separator: ",".to_string(),
        }
    }
}

impl CurrencyFormat {
    /// Formats an amount with the symbol and exactly two fractional digits.
    ///
    /// Negative amounts carry a leading minus before the symbol.
    pub fn format(&self, amount: f64) -> String {
        let cents = round_cents_half_even(amount);
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.abs();
        let whole = cents / 100;
        let minor = cents % 100;
        format!(
            "{sign}{} {}{}{minor:02}",
            self.symbol,
            group_thousands(whole, &self.thousands_separator),
            self.decimal_separator,
        )
    }
}

/// Rounds an amount to whole cents, ties to even.
fn round_cents_half_even(amount: f64) -> i64 {
    let scaled = amount * 100.0;
    let floor = scaled.floor();
    let frac = scaled - floor;
    // Treat anything within a hair of .5 as an exact tie; the inputs here are
    // user-typed cents, not accumulated sums, so the tolerance is safe.
    if (frac - 0.5).abs() < 1e-6 {
        let lower = floor as i64;
        if lower % 2 == 0 { lower } else { lower + 1 }
    } else {
        scaled.round() as i64
    }
}

/// Inserts the thousands separator into a non-negative whole-unit count.
fn group_thousands(mut whole: i64, separator: &str) -> String {
    if whole < 1000 {
        return whole.to_string();
    }
    let mut groups = Vec::new();
    while whole >= 1000 {
        groups.push(format!("{:03}", whole % 1000));
        whole /= 1000;
    }
    groups.push(whole.to_string());
    groups.reverse();
    groups.join(separator)
}
