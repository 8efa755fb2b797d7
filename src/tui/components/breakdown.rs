//! # Breakdown Component
//!
//! The output panel: formatted tip, total, and (while the split section is
//! open) per-person amounts. Stateless — it renders whatever the current
//! [`BillBreakdown`](crate::core::calculator::BillBreakdown) says.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

/// Formatted output panel.
///
/// # Props
///
/// - `tip_display` / `total_display`: always shown
/// - `per_person_display`: `Some` only while the split section is open
pub struct Breakdown {
    pub tip_display: String,
    pub total_display: String,
    pub per_person_display: Option<String>,
}

impl Breakdown {
    pub fn new(
        tip_display: String,
        total_display: String,
        per_person_display: Option<String>,
    ) -> Self {
        Self {
            tip_display,
            total_display,
            per_person_display,
        }
    }

    /// Number of terminal rows the panel needs, borders included.
    pub fn required_height(&self) -> u16 {
        let lines = if self.per_person_display.is_some() { 3 } else { 2 };
        lines + 2
    }

    fn row(label: &str, value: &str, emphasized: bool) -> Line<'static> {
        let value_style = if emphasized {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        Line::from(vec![
            Span::styled(format!("{label:<18}"), Style::default().fg(Color::Gray)),
            Span::styled(value.to_string(), value_style),
        ])
    }
}

impl Component for Breakdown {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Self::row("Tip", &self.tip_display, false),
            Self::row("Final amount", &self.total_display, false),
        ];
        if let Some(ref per_person) = self.per_person_display {
            lines.push(Self::row("Amount per person", per_person, true));
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Breakdown");

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
