//! Interactive picker session
//!
//! A session owns the query text, the match engine and the viewport, and
//! turns a stream of [`InputEvent`]s into state changes. It starts in
//! [`SessionState::Editing`] and ends in either `Selected` or `Cancelled`;
//! once it has ended every further event is rejected with
//! [`SessionError::Finished`].
//!
//! With `select_one` enabled the session ends on its own as soon as an event
//! leaves exactly one match. This check runs after each handled event, not at
//! construction, so a single-candidate list still waits for the first key.

mod error;
mod event;
mod view;

pub use error::{Result, SessionError};
pub use event::{InputEvent, PAGE_STEP, Transition};
pub use view::{RenderView, VisibleRow};

use crate::matcher::{MatchEngine, MatchOptions};
use crate::viewport::ViewportState;
use std::fmt;
use tracing::{debug, trace};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting input
    Editing,
    /// Ended with a candidate id chosen
    Selected(usize),
    /// Ended without a selection
    Cancelled,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Editing => write!(f, "editing"),
            Self::Selected(id) => write!(f, "selected candidate {id}"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Behaviour switches for a session
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Matching and ordering options
    pub match_options: MatchOptions,
    /// End the session as soon as exactly one candidate matches
    pub select_one: bool,
}

impl SessionOptions {
    /// Set the match options
    #[must_use]
    pub fn with_match_options(mut self, match_options: MatchOptions) -> Self {
        self.match_options = match_options;
        self
    }

    /// Enable or disable auto-select
    #[must_use]
    pub const fn with_select_one(mut self, select_one: bool) -> Self {
        self.select_one = select_one;
        self
    }
}

/// Query, match set, viewport and lifecycle of one pick
#[derive(Debug)]
pub struct Session {
    engine: MatchEngine,
    viewport: ViewportState,
    query: String,
    /// Chars appended to `query` by each keystroke, oldest first
    keystrokes: Vec<usize>,
    state: SessionState,
    select_one: bool,
    notice: Option<String>,
}

impl Session {
    /// Start a session over `candidates` with an empty query
    #[must_use]
    pub fn new(
        candidates: Vec<String>,
        options: SessionOptions,
        max_visible_lines: usize,
        max_columns: usize,
    ) -> Self {
        let engine = MatchEngine::new(candidates, options.match_options);
        let mut viewport = ViewportState::new(max_visible_lines, max_columns);
        viewport.reconcile(engine.match_count());

        debug!(
            candidates = engine.candidate_count(),
            select_one = options.select_one,
            "session started"
        );

        Self {
            engine,
            viewport,
            query: String::new(),
            keystrokes: Vec::new(),
            state: SessionState::Editing,
            select_one: options.select_one,
            notice: None,
        }
    }

    /// Apply one event
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Finished`] if the session already ended.
    pub fn handle(&mut self, event: InputEvent) -> Result<Transition> {
        if self.state != SessionState::Editing {
            return Err(SessionError::Finished(self.state));
        }

        trace!(?event, "handling event");
        self.notice = None;

        let transition = match event {
            InputEvent::Char(c) if c.is_control() => {
                return Ok(self.unknown(format!("{c:?}")));
            }
            InputEvent::Char(c) => {
                let lower = c.to_lowercase();
                self.keystrokes.push(lower.len());
                self.query.extend(lower);
                self.refresh();
                Transition::QueryChanged
            }
            InputEvent::Backspace => match self.keystrokes.pop() {
                Some(count) => {
                    for _ in 0..count {
                        self.query.pop();
                    }
                    self.refresh();
                    Transition::QueryChanged
                }
                None => Transition::Ignored,
            },
            InputEvent::Navigate(delta) => {
                self.viewport.move_choice(delta, self.engine.match_count());
                Transition::Moved
            }
            InputEvent::Confirm => match self.current() {
                Some(id) => self.finish(SessionState::Selected(id)),
                None => Transition::Ignored,
            },
            InputEvent::Cancel => self.finish(SessionState::Cancelled),
            InputEvent::Resize { lines, columns } => {
                self.viewport
                    .resize(lines, columns, self.engine.match_count());
                Transition::Resized
            }
            InputEvent::Unknown(description) => return Ok(self.unknown(description)),
        };

        if transition.is_terminal() {
            return Ok(transition);
        }

        if self.select_one && self.engine.match_count() == 1 {
            if let Some(&id) = self.engine.matches().first() {
                debug!(id, "single match left, selecting it");
                return Ok(self.finish(SessionState::Selected(id)));
            }
        }

        Ok(transition)
    }

    fn refresh(&mut self) {
        self.engine.set_query(&self.query);
        self.viewport.reconcile(self.engine.match_count());
    }

    fn finish(&mut self, state: SessionState) -> Transition {
        self.state = state;
        debug!(%state, query = %self.query, "session finished");
        match state {
            SessionState::Selected(id) => Transition::Selected(id),
            SessionState::Editing | SessionState::Cancelled => Transition::Cancelled,
        }
    }

    fn unknown(&mut self, description: String) -> Transition {
        debug!(key = %description, "unmapped key");
        self.notice = Some(format!("unknown key: {description}"));
        Transition::Ignored
    }

    /// Snapshot of everything a frontend draws
    #[must_use]
    pub fn view(&self) -> RenderView<'_> {
        let matches = self.engine.matches();
        let range = self.viewport.visible_range(matches.len());
        let offset = range.start;
        let choice = self.viewport.choice();

        let rows = matches[range]
            .iter()
            .enumerate()
            .filter_map(|(row, &id)| {
                self.engine.line(id).map(|text| VisibleRow {
                    id,
                    text,
                    is_choice: offset + row == choice,
                })
            })
            .collect::<Vec<_>>();

        let choice_row = rows.iter().position(|row| row.is_choice);

        RenderView {
            query: &self.query,
            rows,
            choice_row,
            match_count: matches.len(),
            candidate_count: self.engine.candidate_count(),
            notice: self.notice.as_deref(),
            max_columns: self.viewport.max_columns(),
        }
    }

    /// Candidate id under the choice, if any match exists
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.engine.matches().get(self.viewport.choice()).copied()
    }

    /// The chosen candidate once the session ended with a selection
    #[must_use]
    pub fn selection(&self) -> Option<(usize, &str)> {
        match self.state {
            SessionState::Selected(id) => self.engine.line(id).map(|line| (id, line)),
            SessionState::Editing | SessionState::Cancelled => None,
        }
    }

    /// Lifecycle state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session has ended
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state != SessionState::Editing
    }

    /// Current query text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current match set, as candidate ids
    #[must_use]
    pub fn matches(&self) -> &[usize] {
        self.engine.matches()
    }

    /// Choice and scroll state
    #[must_use]
    pub const fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Underlying match engine
    #[must_use]
    pub const fn engine(&self) -> &MatchEngine {
        &self.engine
    }
}
