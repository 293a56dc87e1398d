//! Ratatui-based picker adapter
//!
//! This module implements the `LinePicker` trait with ratatui for drawing
//! and crossterm for raw mode and key events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiPicker                     │
//! │  (implements LinePicker trait)              │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  Session   │ │  Ratatui  │ │ Crossterm │
//! │ (matching) │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! The frame is drawn on `/dev/tty` so stdin can carry candidates and stdout
//! the result.

mod events;
mod finder;
mod theme;
pub mod widgets;

pub use events::{decode_event, decode_key, key_to_string};
pub use finder::{RatatuiPicker, list_bounds};
pub use theme::Theme;
