//! Integration tests for `GET /character/{id}`.
//!
//! Each test stands up a stub upstream catalog with scripted responses
//! and drives the full request path: router, handler, aggregator, and
//! the real reqwest client.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use common::{body_json, build_test_app, spawn_stub_catalog};
use serde_json::json;

/// Upstream character fixture with a resolvable origin reference.
fn rick_json(location_url: &str) -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Rick Sanchez",
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "image": "https://example.test/1.jpeg",
        "origin": { "name": "Earth (C-137)", "url": location_url }
    })
}

// ---------------------------------------------------------------------------
// Test: two-hop compose returns 200 with the resolved location
// ---------------------------------------------------------------------------

#[tokio::test]
async fn detail_composes_character_and_location() {
    let base = spawn_stub_catalog(|base| {
        let character = rick_json(&format!("{base}/location/1"));
        Router::new()
            .route(
                "/character/{id}",
                get(move || {
                    let character = character.clone();
                    async move { Json(character) }
                }),
            )
            .route(
                "/location/{id}",
                get(|| async {
                    Json(json!({
                        "id": 1,
                        "name": "Earth (C-137)",
                        "type": "Planet",
                        "dimension": "Dimension C-137"
                    }))
                }),
            )
    })
    .await;

    let app = build_test_app(&base);
    let response = common::get(app, "/character/1").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Rick Sanchez");
    assert_eq!(body["status"], "Alive");
    assert_eq!(body["type"], "");
    assert_eq!(body["origin"]["name"], "Earth (C-137)");
    assert_eq!(body["origin"]["location"]["name"], "Earth (C-137)");
    assert_eq!(body["origin"]["location"]["type"], "Planet");
    assert_eq!(body["origin"]["location"]["dimension"], "Dimension C-137");
}

// ---------------------------------------------------------------------------
// Test: blank origin reference -> location null, no location request
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_origin_reference_skips_location_and_returns_null() {
    let location_calls = Arc::new(AtomicUsize::new(0));
    let calls = Arc::clone(&location_calls);

    let base = spawn_stub_catalog(move |_base| {
        let character = json!({
            "id": 5,
            "name": "Abradolf Lincler",
            "status": "unknown",
            "species": "Human",
            "type": "Genetic experiment",
            "gender": "Male",
            "image": "https://example.test/5.jpeg",
            "origin": { "name": "Earth (Replacement Dimension)", "url": "" }
        });
        Router::new()
            .route(
                "/character/{id}",
                get(move || {
                    let character = character.clone();
                    async move { Json(character) }
                }),
            )
            .route(
                "/location/{id}",
                get(move || {
                    let calls = Arc::clone(&calls);
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Json(json!({}))
                    }
                }),
            )
    })
    .await;

    let app = build_test_app(&base);
    let response = common::get(app, "/character/5").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "unknown");
    assert_eq!(body["origin"]["name"], "Earth (Replacement Dimension)");
    assert_eq!(body["origin"]["location"], serde_json::Value::Null);
    assert_eq!(location_calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Test: failed location lookup still returns 200 with location null
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_location_lookup_degrades_to_null() {
    let base = spawn_stub_catalog(|base| {
        let character = rick_json(&format!("{base}/location/1"));
        Router::new()
            .route(
                "/character/{id}",
                get(move || {
                    let character = character.clone();
                    async move { Json(character) }
                }),
            )
            .route(
                "/location/{id}",
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": "boom" })),
                    )
                }),
            )
    })
    .await;

    let app = build_test_app(&base);
    let response = common::get(app, "/character/1").await;

    // The primary resource resolved; the enrichment failure must not
    // mask that.
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["origin"]["name"], "Earth (C-137)");
    assert_eq!(body["origin"]["location"], serde_json::Value::Null);
}

// ---------------------------------------------------------------------------
// Test: unknown character id -> 404 NOT_FOUND
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_character_returns_404() {
    let base = spawn_stub_catalog(|_base| {
        Router::new().route(
            "/character/{id}",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Character not found" })),
                )
            }),
        )
    })
    .await;

    let app = build_test_app(&base);
    let response = common::get(app, "/character/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Character not found");
}

// ---------------------------------------------------------------------------
// Test: upstream 5xx -> 503 CATALOG_UNAVAILABLE
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_failure_returns_503() {
    let base = spawn_stub_catalog(|_base| {
        Router::new().route(
            "/character/{id}",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "boom" })),
                )
            }),
        )
    })
    .await;

    let app = build_test_app(&base);
    let response = common::get(app, "/character/1").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["code"], "CATALOG_UNAVAILABLE");
}

// ---------------------------------------------------------------------------
// Test: unreachable upstream -> 503 (connection refused, no stub at all)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_upstream_returns_503() {
    // Nothing listens on this port: reqwest fails at connect time.
    let app = build_test_app("http://127.0.0.1:9");
    let response = common::get(app, "/character/1").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["code"], "CATALOG_UNAVAILABLE");
}

// ---------------------------------------------------------------------------
// Test: id validation -> 400 for non-integer and non-positive ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_integer_id_returns_400() {
    let app = build_test_app("http://127.0.0.1:9");
    let response = common::get(app, "/character/rick").await;

    // Rejected by the Path<i64> extractor before the handler runs.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_positive_id_returns_400() {
    let app = build_test_app("http://127.0.0.1:9");
    let response = common::get(app, "/character/0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}
