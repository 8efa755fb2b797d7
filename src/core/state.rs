//! # Application State
//!
//! Core business state for Tippy. This module contains domain data only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── input: BillInput           // current input snapshot
//! ├── currency: CurrencyFormat   // fixed display format (ZAR by default)
//! ├── breakdown: BillBreakdown   // derived from `input`, never stale
//! ├── show_split: bool           // split section visible?
//! └── status_message: String     // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! which refreshes `breakdown` after every mutation. So no surprise staleness.

use crate::core::calculator::{BillBreakdown, BillInput};
use crate::core::config::ResolvedConfig;
use crate::core::currency::CurrencyFormat;

pub struct App {
    /// The immutable input snapshot the breakdown derives from.
    pub input: BillInput,
    pub currency: CurrencyFormat,
    /// Derived values for `input`. Recomputed by the reducer on every change.
    pub breakdown: BillBreakdown,
    /// Whether the split section (participant slider + per-person line) shows.
    pub show_split: bool,
    pub status_message: String,
}

impl App {
    pub fn new(input: BillInput, currency: CurrencyFormat, show_split: bool) -> Self {
        let breakdown = BillBreakdown::from_input(&input, &currency);
        Self {
            input,
            currency,
            breakdown,
            show_split,
            status_message: String::from("Welcome to Tippy!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let input = BillInput::new(
            config.amount_text.clone(),
            config.tip_percent,
            config.people,
        );
        Self::new(input, config.currency.clone(), config.show_split)
    }

    /// Re-runs the pure transformation over the current snapshot.
    pub fn refresh(&mut self) {
        self.breakdown = BillBreakdown::from_input(&self.input, &self.currency);
    }
}
