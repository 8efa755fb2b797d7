//! # Actions
//!
//! Everything that can happen in Tippy becomes an `Action`.
//! User types a digit? That's `Action::SetAmountText`.
//! User nudges the tip slider? That's `Action::AdjustTip(delta)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, refreshes the derived breakdown, and returns an `Effect` for the
//! caller. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Clamping lives here: the arithmetic in `calculator.rs` trusts its domain,
//! and this reducer is the "input control" that enforces it — tip percent to
//! [0, 30], participants to [1, 10].

use log::debug;

use crate::core::calculator::{MAX_PEOPLE, MAX_TIP_PERCENT, MIN_PEOPLE, MIN_TIP_PERCENT};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Amount field content changed; carries the full new text.
    SetAmountText(String),
    /// Nudge the tip percentage by a signed delta (slider arrow keys).
    AdjustTip(f64),
    /// Nudge the participant count by a signed delta.
    AdjustPeople(i32),
    /// Show or hide the split section (the "Split Bill" button).
    ToggleSplit,
    Quit,
}

/// What the caller should do after an update. The reducer itself never
/// performs side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SetAmountText(text) => {
            app.input.amount_text = text;
        }
        Action::AdjustTip(delta) => {
            app.input.tip_percent =
                (app.input.tip_percent + delta).clamp(MIN_TIP_PERCENT, MAX_TIP_PERCENT);
            app.status_message = format!("Tip: {}%", app.input.tip_percent as u32);
        }
        Action::AdjustPeople(delta) => {
            let people = app.input.people as i32 + delta;
            app.input.people = people.clamp(MIN_PEOPLE as i32, MAX_PEOPLE as i32) as u32;
            app.status_message = format!(
                "Splitting across {} {}",
                app.input.people,
                if app.input.people == 1 { "person" } else { "people" }
            );
        }
        Action::ToggleSplit => {
            app.show_split = !app.show_split;
            app.status_message = if app.show_split {
                String::from("Splitting the bill")
            } else {
                String::from("Split hidden")
            };
        }
        Action::Quit => return Effect::Quit,
    }
    // Derived values follow every input change immediately.
    app.refresh();
    Effect::None
}
