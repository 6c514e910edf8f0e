use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use mortydex_catalog::DetailError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`DetailError`] for aggregation failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON
/// error responses. Upstream failure detail never reaches the body
/// beyond the not-found/unavailable distinction; anything more goes to
/// the logs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An aggregation failure from `mortydex_catalog`.
    #[error(transparent)]
    Detail(#[from] DetailError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Detail(detail) => match detail {
                DetailError::NotFound => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "Character not found".to_string(),
                ),
                DetailError::Unavailable(cause) => {
                    tracing::error!(error = %cause, "Upstream catalog unavailable");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "CATALOG_UNAVAILABLE",
                        "Could not reach the character catalog".to_string(),
                    )
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
