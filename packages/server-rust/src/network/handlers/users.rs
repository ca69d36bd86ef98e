//! User resource handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use campushub_core::{NewUser, User};

use super::AppState;
use crate::network::ApiError;
use crate::storage::Keyed;

/// Query string for the by-username lookup.
#[derive(Debug, Deserialize)]
pub struct UserLookup {
    /// Login name to search for. Matched exactly, first hit wins.
    pub username: String,
}

/// `POST /api/users` -- creates a user and returns the stored snapshot.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> (StatusCode, Json<User>) {
    (StatusCode::CREATED, Json(state.store.create_user(input)))
}

/// `GET /api/users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    state
        .store
        .user(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(User::KIND, id))
}

/// `GET /api/users?username=` -- linear scan on the unique login name.
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Query(lookup): Query<UserLookup>,
) -> Result<Json<User>, ApiError> {
    state
        .store
        .user_by_username(&lookup.username)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(User::KIND, lookup.username))
}

#[cfg(test)]
mod tests {
    use super::super::test_state;
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "pw".to_string(),
            name: "Alex Johnson".to_string(),
            email: format!("{username}@university.edu"),
            gpa: None,
            credits: None,
            avatar: None,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let state = test_state();
        let (status, created) =
            create_user(State(state.clone()), Json(new_user("alexjohnson"))).await;
        assert_eq!(status, StatusCode::CREATED);

        let fetched = get_user(State(state), Path(created.0.id.clone()))
            .await
            .expect("user exists");
        assert_eq!(fetched.0, created.0);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let state = test_state();
        let err = get_user(State(state), Path("ghost".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "user ghost not found");
    }

    #[tokio::test]
    async fn lookup_by_username() {
        let state = test_state();
        create_user(State(state.clone()), Json(new_user("alexjohnson"))).await;

        let found = get_user_by_username(
            State(state.clone()),
            Query(UserLookup {
                username: "alexjohnson".to_string(),
            }),
        )
        .await
        .expect("user exists");
        assert_eq!(found.0.username, "alexjohnson");

        let missing = get_user_by_username(
            State(state),
            Query(UserLookup {
                username: "nobody".to_string(),
            }),
        )
        .await;
        assert!(missing.is_err());
    }
}
