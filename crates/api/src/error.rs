//! `HarmonyError` → HTTP status classification.
//!
//! Classification lives entirely at this edge: `harmony-core` and
//! `harmony-infra` never know about HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use harmony_domain::HarmonyError;
use serde::Serialize;

/// Wrapper making [`HarmonyError`] usable as an axum handler error type.
pub struct ApiError(pub HarmonyError);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            HarmonyError::UnsupportedInput(_) | HarmonyError::Parse(_) => StatusCode::BAD_REQUEST,
            HarmonyError::NotFound(_) => StatusCode::NOT_FOUND,
            HarmonyError::Config(_) | HarmonyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(error = %self.0, status = %status, "request failed");
        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}

impl From<HarmonyError> for ApiError {
    fn from(err: HarmonyError) -> Self {
        Self(err)
    }
}
