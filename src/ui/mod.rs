//! UI abstraction layer
//!
//! This module separates the picker session from the device it runs on.
//! Business logic talks to the [`LinePicker`] trait; the terminal frontend
//! and the scripted test picker both implement it by driving a
//! [`Session`](crate::session::Session).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      commands::pick                     │
//! └────────────────┬────────────────────────┘
//!                  │ Uses trait
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      LinePicker                         │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ RatatuiPicker │  │ ScriptedPicker    │
//! │ (terminal)    │  │ (tests)           │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Picker
//!
//! ```
//! use linepick::session::InputEvent;
//! use linepick::ui::{LinePicker, PickOutcome, PickRequest, Result};
//!
//! struct FirstMatch;
//!
//! impl LinePicker for FirstMatch {
//!     fn pick(&self, request: PickRequest) -> Result<PickOutcome> {
//!         let mut session = request.into_session(10, 80);
//!         session.handle(InputEvent::Confirm)?;
//!         PickOutcome::from_session(&session)
//!     }
//! }
//!
//! let request = PickRequest::new(vec!["one".into(), "two".into()]);
//! let outcome = FirstMatch.pick(request).unwrap();
//! assert_eq!(outcome.line(), Some("one"));
//! ```

mod error;
mod traits;
mod types;

pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::RatatuiPicker;
pub use traits::LinePicker;
pub use types::{PickOutcome, PickRequest};
