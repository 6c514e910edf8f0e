//! Handler for the aggregated character detail endpoint.

use axum::extract::{Path, State};
use axum::Json;

use mortydex_core::character::CharacterDetail;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /character/{id}
///
/// Returns the denormalized character detail, composed from the
/// upstream character record and (when resolvable) its origin location.
/// The body is the bare [`CharacterDetail`] object -- consumers read it
/// directly, there is no envelope.
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CharacterDetail>> {
    if id <= 0 {
        return Err(AppError::BadRequest(
            "character id must be a positive integer".into(),
        ));
    }

    let detail = state.aggregator.get_detail(id).await?;

    tracing::debug!(
        id,
        name = %detail.name,
        location_resolved = detail.origin.location.is_some(),
        "Character detail composed",
    );

    Ok(Json(detail))
}
