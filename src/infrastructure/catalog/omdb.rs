use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::http_client::HttpClientTrait;
use crate::domain::{CatalogClient, DomainError, Movie, MovieId};

pub const DEFAULT_OMDB_BASE_URL: &str = "http://www.omdbapi.com";

const PROVIDER: &str = "omdb";

/// OMDb (Open Movie Database) catalog client
#[derive(Debug)]
pub struct OmdbCatalogClient<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
}

impl<C: HttpClientTrait> OmdbCatalogClient<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_OMDB_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            api_key: api_key.into(),
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/", self.base_url)
    }

    async fn fetch(&self, param: &str, value: &str) -> Result<serde_json::Value, DomainError> {
        let query = [("apikey", self.api_key.as_str()), (param, value)];

        // Failures from the HTTP layer are reported as catalog failures
        self.client
            .get_json(&self.endpoint(), &query)
            .await
            .map_err(|e| match e {
                DomainError::Provider { message, .. } => DomainError::provider(PROVIDER, message),
                other => other,
            })
    }
}

#[async_trait]
impl<C: HttpClientTrait> CatalogClient for OmdbCatalogClient<C> {
    async fn search(&self, term: &str) -> Result<Vec<Movie>, DomainError> {
        let json = self.fetch("s", term).await?;

        let response: OmdbSearchResponse = decode(json)?;
        let movies = response
            .search
            .unwrap_or_default()
            .into_iter()
            .map(OmdbMovie::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(term = %term, results = movies.len(), "Catalog search completed");
        Ok(movies)
    }

    async fn get(&self, id: &MovieId) -> Result<Option<Movie>, DomainError> {
        let json = self.fetch("i", id.as_str()).await?;

        // A non-empty "Error" field means the catalog has no such movie
        if let Some(error) = json.get("Error").and_then(|e| e.as_str()) {
            if !error.is_empty() {
                debug!(movie_id = %id, error = %error, "Movie not in catalog");
                return Ok(None);
            }
        }

        let movie: OmdbMovie = decode(json)?;
        movie.into_domain().map(Some)
    }

    async fn get_many(&self, ids: &[MovieId]) -> Result<Vec<Movie>, DomainError> {
        let mut movies = Vec::with_capacity(ids.len());

        for id in ids {
            if let Some(movie) = self.get(id).await? {
                movies.push(movie);
            }
        }

        Ok(movies)
    }
}

fn decode<T: DeserializeOwned>(json: serde_json::Value) -> Result<T, DomainError> {
    serde_json::from_value(json).map_err(|e| {
        warn!(error = %e, "Failed to decode catalog response");
        DomainError::provider(PROVIDER, format!("Failed to parse response: {}", e))
    })
}

// OMDb response types

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    search: Option<Vec<OmdbMovie>>,
}

#[derive(Debug, Deserialize)]
struct OmdbMovie {
    #[serde(rename = "imdbID")]
    id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
}

impl OmdbMovie {
    fn into_domain(self) -> Result<Movie, DomainError> {
        let id = MovieId::new(self.id).map_err(|e| {
            DomainError::provider(PROVIDER, format!("Invalid movie ID in response: {}", e))
        })?;

        Ok(Movie::new(id, self.title, self.year))
    }
}
