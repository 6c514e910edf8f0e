use std::sync::Arc;

use mortydex_catalog::DetailAggregator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The
/// aggregator is stateless, so one instance serves all concurrent
/// requests without locking.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Detail aggregator over the shared catalog client.
    pub aggregator: Arc<DetailAggregator>,
}
