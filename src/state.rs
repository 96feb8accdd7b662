//! Search screen state and its transitions.
//!
//! [`UiState`] is a value: every transition consumes the old state and
//! returns the next one. Network resolutions are tagged with the
//! [`SearchTicket`] issued when the request started, so a response that
//! arrives after a newer search was submitted is dropped instead of
//! overwriting the newer outcome.

use crate::model::Meal;
use log::debug;

/// Shown when upstream answered but nothing matched.
pub const NO_MEALS_MESSAGE: &str = "No meals found. Try a different search term.";

/// Shown when the request or its decoding failed.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch meals. Please try again.";

/// Why the last search produced no results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Upstream answered with no records
    NoMatches,
    /// Transport or decoding failure; the cause is only logged
    FetchFailed,
}

impl SearchError {
    /// The message shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            SearchError::NoMatches => NO_MEALS_MESSAGE,
            SearchError::FetchFailed => FETCH_FAILED_MESSAGE,
        }
    }
}

/// Issued for each submitted search; resolutions must present it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The trimmed query the request was issued with.
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    query: String,
    results: Vec<Meal>,
    loading: bool,
    error: Option<SearchError>,
    selected: Option<Meal>,
    generation: u64,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Meal] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The message for the last search's failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.map(SearchError::message)
    }

    pub fn error_kind(&self) -> Option<SearchError> {
        self.error
    }

    pub fn selected(&self) -> Option<&Meal> {
        self.selected.as_ref()
    }

    /// Replace the query verbatim. Trimming happens only on submit.
    #[must_use]
    pub fn with_query(self, text: impl Into<String>) -> Self {
        UiState {
            query: text.into(),
            ..self
        }
    }

    /// Start a search for the current query.
    ///
    /// Returns the state unchanged and no ticket when the trimmed query is
    /// empty.
    #[must_use]
    pub fn begin_search(self) -> (Self, Option<SearchTicket>) {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return (self, None);
        }

        let ticket = SearchTicket {
            generation: self.generation + 1,
            query: trimmed.to_string(),
        };
        let next = UiState {
            loading: true,
            error: None,
            generation: ticket.generation,
            ..self
        };
        (next, Some(ticket))
    }

    /// Upstream returned at least one record.
    #[must_use]
    pub fn search_succeeded(self, ticket: &SearchTicket, meals: Vec<Meal>) -> Self {
        if meals.is_empty() {
            return self.search_empty(ticket);
        }
        self.resolve(ticket, meals, None)
    }

    /// Upstream answered with no records.
    #[must_use]
    pub fn search_empty(self, ticket: &SearchTicket) -> Self {
        self.resolve(ticket, Vec::new(), Some(SearchError::NoMatches))
    }

    /// The request or decoding failed.
    #[must_use]
    pub fn search_failed(self, ticket: &SearchTicket) -> Self {
        self.resolve(ticket, Vec::new(), Some(SearchError::FetchFailed))
    }

    fn resolve(
        self,
        ticket: &SearchTicket,
        results: Vec<Meal>,
        error: Option<SearchError>,
    ) -> Self {
        if ticket.generation != self.generation {
            debug!(
                "dropping stale result for {:?} (generation {} < {})",
                ticket.query, ticket.generation, self.generation
            );
            return self;
        }

        UiState {
            results,
            loading: false,
            error,
            selected: None,
            ..self
        }
    }

    /// Open the detail view for `results[index]`; out of range is a no-op.
    #[must_use]
    pub fn select(self, index: usize) -> Self {
        match self.results.get(index).cloned() {
            Some(meal) => UiState {
                selected: Some(meal),
                ..self
            },
            None => self,
        }
    }

    /// Close the detail view.
    #[must_use]
    pub fn dismiss(self) -> Self {
        UiState {
            selected: None,
            ..self
        }
    }
}
