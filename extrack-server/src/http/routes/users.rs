//! User endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::User;
use crate::http::error::ApiError;
use crate::http::extractors::JsonOrForm;
use crate::http::server::AppState;
use crate::models::{Username, ValidationError};

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub id: Uuid,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            username: u.username,
            id: u.id,
        }
    }
}

/// GET /api/users - list all users
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /api/users - create a new user
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let raw = req
        .username
        .ok_or(ValidationError::Empty { field: "username" })?;
    let username = Username::new(&raw)?;

    let user = state.store.create_user(username).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "user created");

    Ok(Json(UserResponse::from(user)))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users", get(list_users).post(create_user))
}
