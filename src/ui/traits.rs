//! Core traits for UI abstraction layer

use super::error::Result;
use super::types::{PickOutcome, PickRequest};

/// Trait for picker frontends
///
/// A frontend owns the input and display devices. It builds a
/// [`Session`](crate::session::Session) from the request, feeds it decoded
/// events until it finishes, and reports the outcome. Matching, scrolling
/// and auto-select all live in the session, so frontends only translate.
pub trait LinePicker {
    /// Run one pick
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend cannot be initialized or its input
    /// fails before the session finishes.
    fn pick(&self, request: PickRequest) -> Result<PickOutcome>;
}
