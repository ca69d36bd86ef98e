//! Message resource handlers: inbox, channel board, creation, and updates.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use campushub_core::{Message, MessagePatch, NewMessage};

use super::AppState;
use crate::network::ApiError;
use crate::storage::Keyed;

/// Query string for the inbox view.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxQuery {
    /// The user whose inbox to return. Passed through unvalidated.
    pub user_id: String,
}

/// Query string for the ranked channel board.
#[derive(Debug, Deserialize)]
pub struct RankedQuery {
    /// Restrict the board to one channel; omit for all messages.
    #[serde(default)]
    pub channel: Option<String>,
}

/// `GET /api/messages?userId=` -- messages sent by or addressed to the
/// user, most recent first.
pub async fn inbox(
    State(state): State<AppState>,
    Query(query): Query<InboxQuery>,
) -> Json<Vec<Message>> {
    Json(state.store.messages_for(&query.user_id))
}

/// `GET /api/messages/ranked?channel=` -- the channel board: pinned posts
/// first, then upvotes, then recency.
pub async fn ranked(
    State(state): State<AppState>,
    Query(query): Query<RankedQuery>,
) -> Json<Vec<Message>> {
    Json(state.store.ranked_messages(query.channel.as_deref()))
}

/// `GET /api/messages/{id}`
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    state
        .store
        .message(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(Message::KIND, id))
}

/// `POST /api/messages`
pub async fn create_message(
    State(state): State<AppState>,
    Json(input): Json<NewMessage>,
) -> (StatusCode, Json<Message>) {
    (StatusCode::CREATED, Json(state.store.create_message(input)))
}

/// `PATCH /api/messages/{id}` -- merges community-state fields onto the
/// stored record. 404 for an unknown id.
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<MessagePatch>,
) -> Result<Json<Message>, ApiError> {
    state
        .store
        .update_message(&id, &patch)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(Message::KIND, id))
}

/// `POST /api/messages/{id}/read` -- flags the message as read.
///
/// Always 204: marking an unknown id read is a no-op, not an error.
pub async fn mark_read(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.store.mark_message_read(&id);
    StatusCode::NO_CONTENT
}
