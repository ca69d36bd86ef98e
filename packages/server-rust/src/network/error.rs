//! Transport-level error mapping.
//!
//! The store itself never errors; an unknown identity is an absent value.
//! Handlers turn that absence into [`ApiError::NotFound`] here, at the
//! transport boundary, where it becomes a 404 with a JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors a handler can return to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record of the given kind with the given identity.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Lowercase entity-kind name.
        kind: &'static str,
        /// The identity the client asked for.
        id: String,
    },
}

impl ApiError {
    /// Not-found error for the given entity kind and identity.
    #[must_use]
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
