//! Announcement resource handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use campushub_core::{Announcement, NewAnnouncement};

use super::AppState;

/// `GET /api/announcements` -- all announcements, most recent first.
pub async fn list_announcements(State(state): State<AppState>) -> Json<Vec<Announcement>> {
    Json(state.store.announcements())
}

/// `POST /api/announcements`
pub async fn create_announcement(
    State(state): State<AppState>,
    Json(input): Json<NewAnnouncement>,
) -> (StatusCode, Json<Announcement>) {
    (
        StatusCode::CREATED,
        Json(state.store.create_announcement(input)),
    )
}
