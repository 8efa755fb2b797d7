//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::calculator::BillInput;
use crate::core::currency::CurrencyFormat;
use crate::core::state::App;

/// Creates a test App with default inputs and the ZAR format.
pub fn test_app() -> App {
    App::new(BillInput::default(), CurrencyFormat::default(), false)
}
