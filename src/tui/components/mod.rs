//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, as elsewhere in the tree:
//!
//! - **Stateless (props-based)**: `TitleBar`, `Slider`, `Breakdown` receive
//!   everything they render as struct fields filled in from core state.
//! - **Stateful (event-driven)**: `AmountInput` owns its buffer and cursor
//!   and emits `InputEvent::Changed` for the event loop to turn into actions.
//!
//! Each component file is self-contained: state types, event types,
//! rendering, event handling, and tests all live together.

pub mod amount_input;
pub mod breakdown;
pub mod slider;
pub mod title_bar;

pub use amount_input::{AmountInput, InputEvent};
pub use breakdown::Breakdown;
pub use slider::Slider;
pub use title_bar::TitleBar;
