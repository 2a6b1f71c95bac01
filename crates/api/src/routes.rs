//! Route handlers: capture upload + analysis, report retrieval, health.

use std::collections::BTreeMap;

use axum::extract::{Multipart, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use harmony_domain::{HarmonyError, SessionReport};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the application's axum [`Router`], wired to `state`.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/captures", post(upload_capture))
        .route("/reports/{id}", get(get_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Serialize)]
struct UploadResponse {
    reports: BTreeMap<String, String>,
}

/// `POST /captures` — multipart upload of a `.har`/`.chlsj`/`.chls` file.
///
/// Loads it via the Capture Loader, analyzes every session found within it,
/// stores each [`SessionReport`] in the cache under a generated id, and
/// returns `{ "reports": { "<sessionId>": "<reportId>", ... } }`.
async fn upload_capture(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut filename = None;
    let mut bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HarmonyError::UnsupportedInput(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            filename = field.file_name().map(str::to_string);
            bytes = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| HarmonyError::UnsupportedInput(format!("failed to read upload: {e}")))?,
            );
        }
    }

    let filename = filename
        .ok_or_else(|| HarmonyError::UnsupportedInput("missing file field".to_string()))?;
    let bytes =
        bytes.ok_or_else(|| HarmonyError::UnsupportedInput("missing file field".to_string()))?;

    let events = harmony_infra::loader::parse_network_file(&bytes, &filename)?;
    let config = state.config();
    let reports: Vec<SessionReport> = harmony_core::analyze_network_log(
        &events,
        &config.rules,
        &config.cadence,
        &config.anomaly,
    );

    let mut reports_by_session = BTreeMap::new();
    for report in reports {
        let session_id = report.session_id.clone();
        let report_id = state.cache().insert(report);
        reports_by_session.insert(session_id, report_id);
    }

    Ok(Json(UploadResponse { reports: reports_by_session }))
}

/// `GET /reports/:id` — returns the cached [`SessionReport`] or a 404.
async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionReport>, ApiError> {
    state
        .cache()
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError(HarmonyError::NotFound(format!("no report with id {id}"))))
}
