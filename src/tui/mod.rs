//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core never sees a key code or a Rect.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event: it sleeps in
//! `poll_event_timeout` for up to 250ms, drains every pending event, runs
//! them through the reducer, and draws once. Every input change therefore
//! triggers exactly one full recomputation and one frame.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{AmountInput, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which control ←/→ and typing currently target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The amount text field. ←/→ move the cursor.
    Amount,
    /// The tip percentage slider. ←/→ nudge by 1%.
    Tip,
    /// The participant slider (only reachable while the split is open).
    Split,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// The amount field's buffer and cursor.
    pub amount_input: AmountInput,
    pub focus: Focus,
}

impl TuiState {
    pub fn new(initial_amount: String) -> Self {
        Self {
            amount_input: AmountInput::new(initial_amount),
            focus: Focus::Amount, // User expects to type immediately
        }
    }

    /// Moves focus forward or backward, skipping the split slider while the
    /// split section is hidden.
    fn cycle_focus(&mut self, forward: bool, split_visible: bool) {
        self.focus = match (self.focus, forward) {
            (Focus::Amount, true) => Focus::Tip,
            (Focus::Tip, true) if split_visible => Focus::Split,
            (Focus::Tip, true) => Focus::Amount,
            (Focus::Split, true) => Focus::Amount,
            (Focus::Amount, false) if split_visible => Focus::Split,
            (Focus::Amount, false) => Focus::Tip,
            (Focus::Tip, false) => Focus::Amount,
            (Focus::Split, false) => Focus::Tip,
        };
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for amount editing
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(app.input.amount_text.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    'outer: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&event, &mut tui, app.show_split) {
                if update(&mut app, action) == Effect::Quit {
                    break 'outer;
                }
            }
            // Focus can't stay on a slider that just disappeared
            if !app.show_split && tui.focus == Focus::Split {
                tui.focus = Focus::Tip;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Translates a low-level event into a core action, using the current focus.
/// Pure TUI bookkeeping (cursor moves, focus cycling) happens here and
/// returns `None`.
fn route_event(event: &TuiEvent, tui: &mut TuiState, split_visible: bool) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::ToggleSplit => Some(Action::ToggleSplit),
        TuiEvent::Resize => None,

        TuiEvent::FocusNext | TuiEvent::Down => {
            tui.cycle_focus(true, split_visible);
            None
        }
        TuiEvent::FocusPrev | TuiEvent::Up => {
            tui.cycle_focus(false, split_visible);
            None
        }

        TuiEvent::Left | TuiEvent::Right => match tui.focus {
            // In the amount field the arrows move the cursor
            Focus::Amount => forward_to_input(event, tui),
            Focus::Tip => {
                let delta = if matches!(event, TuiEvent::Left) { -1.0 } else { 1.0 };
                Some(Action::AdjustTip(delta))
            }
            Focus::Split => {
                let delta = if matches!(event, TuiEvent::Left) { -1 } else { 1 };
                Some(Action::AdjustPeople(delta))
            }
        },

        // Typing always edits the amount field and pulls focus to it
        TuiEvent::InputChar(_)
        | TuiEvent::Paste(_)
        | TuiEvent::Backspace
        | TuiEvent::Delete
        | TuiEvent::Home
        | TuiEvent::End => {
            tui.focus = Focus::Amount;
            forward_to_input(event, tui)
        }
    }
}

fn forward_to_input(event: &TuiEvent, tui: &mut TuiState) -> Option<Action> {
    match tui.amount_input.handle_event(event) {
        Some(InputEvent::Changed(text)) => Some(Action::SetAmountText(text)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_focus_skips_hidden_split() {
        let mut tui = TuiState::new(String::new());
        tui.cycle_focus(true, false);
        assert_eq!(tui.focus, Focus::Tip);
        tui.cycle_focus(true, false);
        assert_eq!(tui.focus, Focus::Amount);
    }

    #[test]
    fn test_cycle_focus_includes_visible_split() {
        let mut tui = TuiState::new(String::new());
        tui.cycle_focus(true, true); // Amount → Tip
        tui.cycle_focus(true, true); // Tip → Split
        assert_eq!(tui.focus, Focus::Split);
        tui.cycle_focus(true, true); // Split → Amount
        assert_eq!(tui.focus, Focus::Amount);
        tui.cycle_focus(false, true); // Amount → Split
        assert_eq!(tui.focus, Focus::Split);
    }

    #[test]
    fn test_route_typing_becomes_set_amount() {
        let mut tui = TuiState::new(String::new());
        tui.focus = Focus::Tip;
        let action = route_event(&TuiEvent::InputChar('9'), &mut tui, false);
        assert_eq!(action, Some(Action::SetAmountText("9".to_string())));
        assert_eq!(tui.focus, Focus::Amount);
    }

    #[test]
    fn test_route_arrows_adjust_focused_slider() {
        let mut tui = TuiState::new(String::new());
        tui.focus = Focus::Tip;
        assert_eq!(
            route_event(&TuiEvent::Right, &mut tui, false),
            Some(Action::AdjustTip(1.0))
        );
        tui.focus = Focus::Split;
        assert_eq!(
            route_event(&TuiEvent::Left, &mut tui, true),
            Some(Action::AdjustPeople(-1))
        );
    }

    #[test]
    fn test_route_arrows_in_amount_move_cursor_only() {
        let mut tui = TuiState::new("12".to_string());
        tui.focus = Focus::Amount;
        assert_eq!(route_event(&TuiEvent::Left, &mut tui, false), None);
    }

    #[test]
    fn test_route_quit() {
        let mut tui = TuiState::new(String::new());
        assert_eq!(route_event(&TuiEvent::Quit, &mut tui, false), Some(Action::Quit));
        assert_eq!(
            route_event(&TuiEvent::ForceQuit, &mut tui, false),
            Some(Action::Quit)
        );
    }
}
