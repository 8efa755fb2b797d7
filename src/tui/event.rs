use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit,
    ToggleSplit, // Ctrl+S — the "Split Bill" button

    // TUI-local events (routed by focus in the event loop)
    InputChar(char),
    Paste(String), // Bracketed paste into the amount field
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    FocusNext, // Tab
    FocusPrev, // Shift+Tab
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    // Ctrl+S toggles the split section
                    (KeyModifiers::CONTROL, KeyCode::Char('s')) => Some(TuiEvent::ToggleSplit),
                    (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
                    (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                    (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                    (_, KeyCode::Left) => Some(TuiEvent::Left),
                    (_, KeyCode::Right) => Some(TuiEvent::Right),
                    (_, KeyCode::Up) => Some(TuiEvent::Up),
                    (_, KeyCode::Down) => Some(TuiEvent::Down),
                    (_, KeyCode::Home) => Some(TuiEvent::Home),
                    (_, KeyCode::End) => Some(TuiEvent::End),
                    _ => None,
                }
            }
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
