//! # TitleBar Component
//!
//! Top status line showing the app name, the currency in use, and a
//! transient status message.
//!
//! Stateless: all fields are props from core state, and the component just
//! renders what it's given. A plain `Span` rather than a `Block` — the bar
//! is always one line and needs no borders.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top status bar component.
///
/// # Props
///
/// - `currency_symbol`: the fixed display currency (e.g. "R")
/// - `status_message`: transient status (e.g. "Tip: 18%")
pub struct TitleBar {
    pub currency_symbol: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(currency_symbol: String, status_message: String) -> Self {
        Self {
            currency_symbol,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Tippy ({})", self.currency_symbol)
        } else {
            format!("Tippy ({}) | {}", self.currency_symbol, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
