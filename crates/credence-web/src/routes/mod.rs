//! Route handlers.

pub mod analyze;
pub mod health;

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// JSON error body returned by every failing endpoint.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub(crate) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorBody>) {
    (status, Json(ErrorBody { error: message.into() }))
}

/// Fallback handler for unknown routes.
pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}
