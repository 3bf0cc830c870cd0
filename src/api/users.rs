//! User endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::user::{CreateUser, User},
};

use super::AppJson;

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 500, description = "Server error")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing field or student_id for a Student"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    AppJson(request): AppJson<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let created = state.services.users.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
