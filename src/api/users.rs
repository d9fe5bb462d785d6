//! User endpoint handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateUserBody, Json, MovieListResponse};
use crate::domain::UserSnapshot;
use crate::infrastructure::services::CreateUserRequest;

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserBody>,
) -> Result<(StatusCode, Json<UserSnapshot>), ApiError> {
    let user = state
        .user_service
        .create_user(CreateUserRequest { name: body.name })
        .map_err(|e| ApiError::from(e).with_param("name"))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserSnapshot>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let user = state.user_service.get_user(&user_id)?;
    Ok(Json(user))
}

/// PUT /users/{user_id}/likes/{movie_id}
pub async fn like_movie(
    State(state): State<AppState>,
    Path((user_id, movie_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.user_service.like(&user_id, &movie_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /users/{user_id}/likes
pub async fn list_liked_movies(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let movies = state.user_service.liked_movies(&user_id).await?;
    Ok(Json(MovieListResponse::new(movies)))
}
