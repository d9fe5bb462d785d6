//! Movie endpoint request and response types

use serde::{Deserialize, Serialize};

use crate::domain::Movie;

/// Query string of `GET /movies`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// A list of movies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
    pub count: usize,
}

impl MovieListResponse {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            count: movies.len(),
            movies,
        }
    }
}
