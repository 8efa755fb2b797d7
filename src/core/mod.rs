//! # Core Application Logic
//!
//! This module contains Tippy's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • BillInput (snapshot) │
//!                    │  • BillBreakdown        │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`]: the pure arithmetic — parse, tip, total, per-person
//! - [`currency`]: fixed-locale currency display formatting
//! - [`state`]: the `App` struct — all application state in one place
//! - [`action`]: the `Action` enum — everything that can happen in the app
//! - [`config`]: config file, env var, and CLI flag resolution

pub mod action;
pub mod calculator;
pub mod config;
pub mod currency;
pub mod state;
