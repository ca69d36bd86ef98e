//! Assessment resource handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use campushub_core::{Assessment, AssessmentPatch, NewAssessment};

use super::AppState;
use crate::network::ApiError;
use crate::storage::Keyed;

/// `GET /api/assessments` -- all assessments, insertion order.
pub async fn list_assessments(State(state): State<AppState>) -> Json<Vec<Assessment>> {
    Json(state.store.assessments())
}

/// `GET /api/assessments/{id}`
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Assessment>, ApiError> {
    state
        .store
        .assessment(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(Assessment::KIND, id))
}

/// `POST /api/assessments`
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(input): Json<NewAssessment>,
) -> (StatusCode, Json<Assessment>) {
    (
        StatusCode::CREATED,
        Json(state.store.create_assessment(input)),
    )
}

/// `PATCH /api/assessments/{id}` -- merges the patch onto the stored
/// record and returns the merged snapshot. 404 for an unknown id.
pub async fn update_assessment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<AssessmentPatch>,
) -> Result<Json<Assessment>, ApiError> {
    state
        .store
        .update_assessment(&id, &patch)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(Assessment::KIND, id))
}
