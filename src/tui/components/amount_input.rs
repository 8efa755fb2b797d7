//! # AmountInput Component
//!
//! Single-line free-text field for the base bill amount.
//!
//! ## Responsibilities
//!
//! - Capture text input (any character — validation is not this field's job;
//!   unparseable text simply computes as zero)
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Emit `InputEvent::Changed` with the full new text on every edit so the
//!   core can recompute immediately
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. Whether the field is focused is
//! a prop from the TUI state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the AmountInput
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The buffer changed; carries the full new text.
    Changed(String),
}

/// Single-line text input for the bill amount.
///
/// # Props
///
/// - `focused`: whether keystrokes are currently routed here
///
/// # State
///
/// - `buffer`: current text
/// - `cursor_pos`: byte offset of the cursor within `buffer`
pub struct AmountInput {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether the field has keyboard focus (Prop)
    pub focused: bool,
    /// Cursor byte position within `buffer`
    cursor_pos: usize,
}

impl AmountInput {
    /// Create a field prefilled with `initial` (cursor at the end).
    pub fn new(initial: String) -> Self {
        let cursor_pos = initial.len();
        Self {
            buffer: initial,
            focused: true,
            cursor_pos,
        }
    }

    fn prev_char_boundary(&self) -> usize {
        self.buffer[..self.cursor_pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_char_boundary(&self) -> usize {
        self.buffer[self.cursor_pos..]
            .chars()
            .next()
            .map(|c| self.cursor_pos + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::Changed(self.buffer.clone()))
    }
}

impl Component for AmountInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Base amount");

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green));

        frame.render_widget(input, area);

        if self.focused {
            // Cursor column accounts for wide characters before the cursor.
            let prefix_width = self.buffer[..self.cursor_pos].width() as u16;
            let x = area.x + 1 + prefix_width.min(area.width.saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for AmountInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor_pos, *c);
                self.cursor_pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Paste flattens to one line; the field is single-line.
                let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                self.buffer.insert_str(self.cursor_pos, &text);
                self.cursor_pos += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = self.prev_char_boundary();
                    self.buffer.drain(prev..self.cursor_pos);
                    self.cursor_pos = prev;
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor_pos < self.buffer.len() {
                    let next = self.next_char_boundary();
                    self.buffer.drain(self.cursor_pos..next);
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::Left => {
                if self.cursor_pos > 0 {
                    self.cursor_pos = self.prev_char_boundary();
                }
                None
            }
            TuiEvent::Right => {
                if self.cursor_pos < self.buffer.len() {
                    self.cursor_pos = self.next_char_boundary();
                }
                None
            }
            TuiEvent::Home => {
                self.cursor_pos = 0;
                None
            }
            TuiEvent::End => {
                self.cursor_pos = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}
