//! The explorer controller: one event loop per view instance.
//!
//! UI commands, debounced queries, and network completions all
//! interleave on a single task, so session state never needs a lock.
//! Remote calls run on spawned tasks and post `(generation, result)`
//! completions back; the sessions' generation checks decide whether a
//! completion is still current. There is no wire-level cancellation --
//! a superseded request simply has its response discarded on arrival.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use mortydex_core::character::{CharacterDetail, CharacterSummary};
use mortydex_core::filter::StatusFilter;

use crate::backend::{BackendError, DetailBackend, SearchBackend};
use crate::debounce::spawn_debouncer;
use crate::session::{SearchSession, SelectionPhase, SelectionSession};

/// Commands a renderer feeds into the controller.
#[derive(Debug)]
pub enum Command {
    /// Raw text typed into the search box (pre-debounce).
    Input(String),
    /// Change the local status filter.
    SetFilter(StatusFilter),
    /// Select a character id from the current result list.
    Select(i64),
}

/// Immutable snapshot of everything a renderer needs.
///
/// Published on every observable state change via a watch channel; the
/// renderer only ever sees complete, consistent snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// The debounced query the current result list belongs to.
    pub query_text: String,
    /// Whether a search request is in flight.
    pub searching: bool,
    /// Error from the most recent search, if it failed.
    pub search_error: Option<String>,
    /// Active status filter.
    pub status_filter: StatusFilter,
    /// Result list narrowed by the status filter, in catalog order.
    pub results: Vec<CharacterSummary>,
    /// Currently selected character, if any.
    pub selected_id: Option<i64>,
    /// State of the detail pane.
    pub detail: SelectionPhase,
}

impl ViewState {
    /// Number of results after filtering.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

/// Handle to a running explorer controller.
///
/// Dropping the handle does not stop the controller; call
/// [`shutdown`](Self::shutdown) to tear it down.
pub struct ExplorerHandle {
    commands: mpsc::UnboundedSender<Command>,
    view: watch::Receiver<ViewState>,
    cancel: CancellationToken,
}

impl ExplorerHandle {
    /// Feed raw search-box input (debounced internally).
    pub fn input(&self, text: impl Into<String>) {
        let _ = self.commands.send(Command::Input(text.into()));
    }

    /// Change the local status filter.
    pub fn set_filter(&self, filter: StatusFilter) {
        let _ = self.commands.send(Command::SetFilter(filter));
    }

    /// Select a character from the current result list.
    pub fn select(&self, id: i64) {
        let _ = self.commands.send(Command::Select(id));
    }

    /// Subscribe to view snapshots.
    pub fn view(&self) -> watch::Receiver<ViewState> {
        self.view.clone()
    }

    /// Stop the controller and its debouncer.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

/// Start an explorer controller over the given backends.
///
/// Spawns the event-loop task and its debouncer and returns immediately.
pub fn start_explorer(
    search_backend: Arc<dyn SearchBackend>,
    detail_backend: Arc<dyn DetailBackend>,
    debounce_delay: Duration,
) -> ExplorerHandle {
    let cancel = CancellationToken::new();
    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let (view_tx, view_rx) = watch::channel(ViewState::default());
    let (debounce_tx, debounced_rx) = spawn_debouncer(debounce_delay, cancel.child_token());

    tokio::spawn(run_event_loop(
        commands_rx,
        debounce_tx,
        debounced_rx,
        search_backend,
        detail_backend,
        view_tx,
        cancel.clone(),
    ));

    ExplorerHandle {
        commands: commands_tx,
        view: view_rx,
        cancel,
    }
}

/// Map a detail failure to its user-facing message.
///
/// The renderer is not told the raw failure kind beyond this text.
fn detail_failure_message(err: &BackendError) -> String {
    match err {
        BackendError::NotConfigured => "Backend URL is not configured".to_string(),
        BackendError::NotFound => "Character not found".to_string(),
        BackendError::Request(_) | BackendError::Status { .. } => {
            "Could not load character detail".to_string()
        }
    }
}

async fn run_event_loop(
    mut commands: mpsc::UnboundedReceiver<Command>,
    debounce_tx: mpsc::UnboundedSender<String>,
    mut debounced: mpsc::UnboundedReceiver<String>,
    search_backend: Arc<dyn SearchBackend>,
    detail_backend: Arc<dyn DetailBackend>,
    view: watch::Sender<ViewState>,
    cancel: CancellationToken,
) {
    let mut search = SearchSession::new();
    let mut selection = SelectionSession::new();

    let (search_done_tx, mut search_done) =
        mpsc::unbounded_channel::<(u64, Result<Vec<CharacterSummary>, BackendError>)>();
    let (detail_done_tx, mut detail_done) =
        mpsc::unbounded_channel::<(u64, Result<CharacterDetail, BackendError>)>();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,

            maybe = commands.recv() => match maybe {
                None => break,
                Some(Command::Input(text)) => {
                    if debounce_tx.send(text).is_err() {
                        break;
                    }
                }
                Some(Command::SetFilter(filter)) => {
                    search.set_filter(filter);
                    publish(&view, &search, &selection);
                }
                Some(Command::Select(id)) => {
                    let generation = selection.begin_selection(id);
                    tracing::debug!(id, generation, "Fetching character detail");

                    let backend = Arc::clone(&detail_backend);
                    let done = detail_done_tx.clone();
                    tokio::spawn(async move {
                        let result = backend.fetch_detail(id).await;
                        let _ = done.send((generation, result));
                    });
                    publish(&view, &search, &selection);
                }
            },

            maybe = debounced.recv() => match maybe {
                None => break,
                Some(query) => {
                    let generation = search.begin_query(&query);
                    // A new query invalidates the prior selection outright.
                    selection.reset();
                    tracing::debug!(query = %query, generation, "Issuing search");

                    let backend = Arc::clone(&search_backend);
                    let done = search_done_tx.clone();
                    tokio::spawn(async move {
                        let result = backend.search(&query).await;
                        let _ = done.send((generation, result));
                    });
                    publish(&view, &search, &selection);
                }
            },

            Some((generation, result)) = search_done.recv() => {
                let applied = search.apply_result(
                    generation,
                    result.map_err(|e| {
                        tracing::warn!(generation, error = %e, "Search request failed");
                        "Search failed".to_string()
                    }),
                );
                if applied {
                    publish(&view, &search, &selection);
                } else {
                    tracing::debug!(generation, "Discarded stale search response");
                }
            }

            Some((generation, result)) = detail_done.recv() => {
                let applied = selection.apply_detail(
                    generation,
                    result.map_err(|e| {
                        tracing::warn!(generation, error = %e, "Detail request failed");
                        detail_failure_message(&e)
                    }),
                );
                if applied {
                    publish(&view, &search, &selection);
                } else {
                    tracing::debug!(generation, "Discarded stale detail response");
                }
            }
        }
    }
}

/// Publish a fresh snapshot of both sessions.
fn publish(view: &watch::Sender<ViewState>, search: &SearchSession, selection: &SelectionSession) {
    let state = ViewState {
        query_text: search.query_text().to_string(),
        searching: search.is_loading(),
        search_error: search.error().map(str::to_string),
        status_filter: search.status_filter(),
        results: search.visible_results().into_iter().cloned().collect(),
        selected_id: selection.selected_id(),
        detail: selection.phase().clone(),
    };
    let _ = view.send(state);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
