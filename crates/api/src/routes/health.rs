use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Configured upstream catalog base URL.
    pub catalog: String,
}

/// GET /health -- returns service status and the configured upstream.
///
/// Does not probe the upstream: reachability is judged per request by
/// the aggregator, and a health-check round trip would add load for a
/// signal that can go stale immediately.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        catalog: state.config.catalog_base_url.clone(),
    })
}

/// Mount health check routes at root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
