//! Shared fixtures for API integration tests.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the
//! router, and stands up a stub upstream catalog as a real local axum
//! server so the reqwest path (status handling, JSON decoding) is
//! exercised end to end.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use mortydex_api::config::ServerConfig;
use mortydex_api::router::build_app_router;
use mortydex_api::state::AppState;
use mortydex_catalog::{Catalog, CatalogClient, DetailAggregator};

/// Build a test `ServerConfig` pointed at the given stub catalog.
pub fn test_config(catalog_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        catalog_base_url: catalog_base_url.to_string(),
    }
}

/// Build the full application router with all middleware layers, with
/// the catalog client pointed at a stub upstream.
///
/// This goes through [`build_app_router`] so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(catalog_base_url: &str) -> Router {
    let config = test_config(catalog_base_url);

    let catalog: Arc<dyn Catalog> = Arc::new(CatalogClient::new(catalog_base_url.to_string()));
    let state = AppState {
        config: Arc::new(config.clone()),
        aggregator: Arc::new(DetailAggregator::new(catalog)),
    };

    build_app_router(state, &config)
}

/// Bind a stub upstream catalog on an ephemeral port and serve it.
///
/// The builder receives the stub's own base URL so character fixtures
/// can embed absolute location references pointing back at the stub.
pub async fn spawn_stub_catalog<F>(make_router: F) -> String
where
    F: FnOnce(&str) -> Router,
{
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub catalog");
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let router = make_router(&base_url);
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub catalog server error");
    });

    base_url
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
