//! Session state machines for search and selection.
//!
//! Both sessions are pure state: every change goes through a named
//! transition, and async completions are applied through a generation
//! check. A response is honored only if it carries the generation
//! current at response time; all earlier-generation responses are
//! discarded unconditionally, regardless of arrival order. This is the
//! sole correctness mechanism against out-of-order completions.

use mortydex_core::character::{CharacterDetail, CharacterSummary};
use mortydex_core::filter::{apply_status_filter, StatusFilter};

/// Ephemeral state of one search box.
///
/// Created on first input, mutated on every debounced query and filter
/// change, dropped when the owning view goes away.
#[derive(Debug, Default)]
pub struct SearchSession {
    query_text: String,
    request_generation: u64,
    results: Vec<CharacterSummary>,
    status_filter: StatusFilter,
    loading: bool,
    error: Option<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new debounced query.
    ///
    /// Increments the generation, clears the previous result list and
    /// error, and marks the session loading. Returns the generation to
    /// tag the outgoing request with.
    pub fn begin_query(&mut self, text: &str) -> u64 {
        self.query_text = text.to_string();
        self.request_generation += 1;
        self.results.clear();
        self.loading = true;
        self.error = None;
        self.request_generation
    }

    /// Apply a search completion tagged with its originating generation.
    ///
    /// Returns `false` (and changes nothing) when a newer query has
    /// already superseded the request. A failed search surfaces a
    /// generic error state with an empty list; zero matches is not an
    /// error.
    pub fn apply_result(
        &mut self,
        generation: u64,
        result: Result<Vec<CharacterSummary>, String>,
    ) -> bool {
        if generation != self.request_generation {
            return false;
        }

        self.loading = false;
        match result {
            Ok(results) => self.results = results,
            Err(message) => {
                self.results.clear();
                self.error = Some(message);
            }
        }
        true
    }

    /// Change the local status filter. Never issues a remote call.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// The fetched results narrowed by the current filter, in order.
    pub fn visible_results(&self) -> Vec<&CharacterSummary> {
        apply_status_filter(self.status_filter, &self.results)
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn generation(&self) -> u64 {
        self.request_generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// The full fetched list, unfiltered.
    pub fn results(&self) -> &[CharacterSummary] {
        &self.results
    }
}

/// Where the current selection stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Loading,
    Ready(CharacterDetail),
    Failed(String),
}

/// Ephemeral state of the detail pane.
#[derive(Debug, Default)]
pub struct SelectionSession {
    selected_id: Option<i64>,
    request_generation: u64,
    phase: SelectionPhase,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading the detail for a newly selected id.
    ///
    /// Returns the generation to tag the outgoing request with. A
    /// selection made while a previous detail fetch is in flight
    /// supersedes it: the old response will fail the generation check.
    pub fn begin_selection(&mut self, id: i64) -> u64 {
        self.selected_id = Some(id);
        self.request_generation += 1;
        self.phase = SelectionPhase::Loading;
        self.request_generation
    }

    /// Apply a detail completion tagged with its originating generation.
    ///
    /// Returns `false` (and changes nothing) for superseded requests.
    pub fn apply_detail(
        &mut self,
        generation: u64,
        result: Result<CharacterDetail, String>,
    ) -> bool {
        if generation != self.request_generation {
            return false;
        }

        self.phase = match result {
            Ok(detail) => SelectionPhase::Ready(detail),
            Err(message) => SelectionPhase::Failed(message),
        };
        true
    }

    /// Invalidate the selection outright (the search query changed).
    ///
    /// Bumps the generation so that any in-flight detail response is
    /// discarded when it eventually arrives.
    pub fn reset(&mut self) {
        self.selected_id = None;
        self.request_generation += 1;
        self.phase = SelectionPhase::Idle;
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected_id
    }

    pub fn generation(&self) -> u64 {
        self.request_generation
    }

    pub fn phase(&self) -> &SelectionPhase {
        &self.phase
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
