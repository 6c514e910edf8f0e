//! Route definitions for the character detail endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at root level.
///
/// ```text
/// GET /character/{id}    -> get_character
/// ```
///
/// A non-integer `id` is rejected with 400 by the `Path<i64>` extractor
/// before the handler runs; non-positive ids are rejected in the
/// handler itself.
pub fn router() -> Router<AppState> {
    Router::new().route("/character/{id}", get(character::get_character))
}
