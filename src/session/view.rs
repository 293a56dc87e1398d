//! What a frontend needs to paint the picker after each event

/// One match on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    /// Candidate id
    pub id: usize,
    /// Original candidate text, untruncated
    pub text: &'a str,
    /// Whether this row holds the current choice
    pub is_choice: bool,
}

/// Read-only snapshot of a session for rendering
///
/// Rows are not truncated; the renderer cuts each line to `max_columns` and
/// places the cursor after the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderView<'a> {
    /// Current query text
    pub query: &'a str,
    /// Matches in the viewport, top to bottom
    pub rows: Vec<VisibleRow<'a>>,
    /// Position of the choice within `rows`
    pub choice_row: Option<usize>,
    /// Size of the whole match set
    pub match_count: usize,
    /// Size of the candidate list
    pub candidate_count: usize,
    /// Transient message about the last event, if any
    pub notice: Option<&'a str>,
    /// Columns available for each row
    pub max_columns: usize,
}

impl RenderView<'_> {
    /// Row text cut to `max_columns` characters
    #[must_use]
    pub fn clipped(&self, row: &VisibleRow<'_>) -> String {
        row.text.chars().take(self.max_columns).collect()
    }
}
