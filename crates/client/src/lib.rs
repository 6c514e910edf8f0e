//! Client-side orchestration for the character explorer.
//!
//! This crate owns everything between raw UI events and rendered data:
//! debounced search input, the remote search and detail lookups, and
//! the session state machines that discard stale responses from
//! superseded requests. Rendering itself is an external collaborator
//! that consumes [`controller::ViewState`] snapshots.

pub mod backend;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod session;

pub use backend::{BackendError, DetailBackend, HttpDetailClient, SearchBackend};
pub use config::ClientConfig;
pub use controller::{start_explorer, Command, ExplorerHandle, ViewState};
pub use session::{SearchSession, SelectionPhase, SelectionSession};
