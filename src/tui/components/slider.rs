//! # Slider Component
//!
//! Horizontal value slider used for the tip percentage and the participant
//! count. Purely presentational: the value lives in core state, arrives here
//! as a prop, and the event loop maps ←/→ to `AdjustTip` / `AdjustPeople`
//! actions. The slider itself never mutates anything.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

/// Horizontal slider with a title and a value label.
///
/// # Props
///
/// - `title`: block title, e.g. "Tip percentage"
/// - `value_label`: shown at the right edge of the track, e.g. "15%"
/// - `ratio`: fill ratio in [0, 1] — (value - min) / (max - min)
/// - `focused`: whether ←/→ currently target this slider
pub struct Slider {
    pub title: String,
    pub value_label: String,
    pub ratio: f64,
    pub focused: bool,
}

impl Slider {
    pub fn new(title: impl Into<String>, value_label: impl Into<String>, ratio: f64) -> Self {
        Self {
            title: title.into(),
            value_label: value_label.into(),
            ratio: ratio.clamp(0.0, 1.0),
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Builds the track line: filled portion, thumb, empty portion, label.
    fn track_line(&self, inner_width: u16) -> Line<'_> {
        let label = format!(" {}", self.value_label);
        let track_width = (inner_width as usize).saturating_sub(label.chars().count());
        if track_width == 0 {
            return Line::from(label);
        }

        let filled = ((track_width.saturating_sub(1)) as f64 * self.ratio).round() as usize;
        let empty = track_width.saturating_sub(1).saturating_sub(filled);

        let (track_style, thumb_style) = if self.focused {
            (
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
            )
        };

        Line::from(vec![
            Span::styled("━".repeat(filled), track_style),
            Span::styled("█", thumb_style),
            Span::styled("─".repeat(empty), Style::default().fg(Color::DarkGray)),
            Span::raw(label),
        ])
    }
}

impl Component for Slider {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.clone());

        let inner_width = area.width.saturating_sub(2);
        let paragraph = Paragraph::new(self.track_line(inner_width)).block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(slider: &mut Slider, width: u16) -> String {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                slider.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_slider_shows_title_and_label() {
        let mut slider = Slider::new("Tip percentage", "15%", 0.5);
        let text = rendered_text(&mut slider, 40);
        assert!(text.contains("Tip percentage"));
        assert!(text.contains("15%"));
        assert!(text.contains('█'));
    }

    #[test]
    fn test_slider_empty_at_zero() {
        let mut slider = Slider::new("Tip percentage", "0%", 0.0);
        let text = rendered_text(&mut slider, 40);
        // Thumb pinned left: no filled track before it
        assert!(!text.contains('━'));
        assert!(text.contains('█'));
    }

    #[test]
    fn test_slider_full_at_one() {
        let mut slider = Slider::new("People", "10", 1.0);
        let text = rendered_text(&mut slider, 40);
        // Thumb pinned right: the filled track spans up to it
        assert!(text.contains("━━━"));
        assert!(text.contains('█'));
    }

    #[test]
    fn test_ratio_is_clamped() {
        let slider = Slider::new("Tip percentage", "30%", 7.5);
        assert_eq!(slider.ratio, 1.0);
    }
}
