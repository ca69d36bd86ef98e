//! Campus location handlers for the map widget.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use campushub_core::{CampusLocation, NewCampusLocation};

use super::AppState;

/// `GET /api/locations` -- every mapped location, insertion order.
pub async fn list_locations(State(state): State<AppState>) -> Json<Vec<CampusLocation>> {
    Json(state.store.campus_locations())
}

/// `POST /api/locations`
pub async fn create_location(
    State(state): State<AppState>,
    Json(input): Json<NewCampusLocation>,
) -> (StatusCode, Json<CampusLocation>) {
    (
        StatusCode::CREATED,
        Json(state.store.create_campus_location(input)),
    )
}
