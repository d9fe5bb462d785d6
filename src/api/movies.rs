//! Movie catalog endpoint handlers

use axum::extract::{Path, Query, State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MovieListResponse, SearchParams};
use crate::domain::Movie;

/// GET /movies?search=term
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let term = params
        .search
        .ok_or_else(|| ApiError::bad_request("Missing 'search' parameter").with_param("search"))?;

    debug!(term = %term, "Searching movies");

    let movies = state.user_service.search_movies(&term).await?;
    Ok(Json(MovieListResponse::new(movies)))
}

/// GET /movies/{movie_id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let movie = state.user_service.get_movie(&movie_id).await?;
    Ok(Json(movie))
}
