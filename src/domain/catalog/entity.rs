//! Movie entity and identifier

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

const MAX_MOVIE_ID_LENGTH: usize = 64;

/// Movie identifier in the external catalog (e.g. an IMDb id such as `tt0111161`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MovieId(String);

impl MovieId {
    /// Create a new movie ID with validation
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();

        if id.is_empty() {
            return Err(DomainError::invalid_id("Movie ID cannot be empty"));
        }

        if id.len() > MAX_MOVIE_ID_LENGTH {
            return Err(DomainError::invalid_id(format!(
                "Movie ID cannot exceed {} characters",
                MAX_MOVIE_ID_LENGTH
            )));
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::invalid_id(
                "Movie ID can only contain alphanumeric characters, hyphens, and underscores",
            ));
        }

        Ok(Self(id))
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MovieId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MovieId> for String {
    fn from(id: MovieId) -> Self {
        id.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MovieId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A movie as reported by the catalog.
///
/// `year` is kept as the catalog's string form since it may be a range
/// for series (e.g. `2008–2013`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: String,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: year.into(),
        }
    }
}
