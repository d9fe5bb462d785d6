//! Catalog client trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{Movie, MovieId};
use crate::domain::DomainError;

/// Read-only access to the external movie catalog.
///
/// Implementations perform network I/O. Callers must not hold any
/// directory lock while awaiting these calls.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search movies by a free-text term. No match yields an empty list.
    async fn search(&self, term: &str) -> Result<Vec<Movie>, DomainError>;

    /// Get a movie by ID. `Ok(None)` when the catalog reports no such movie.
    async fn get(&self, id: &MovieId) -> Result<Option<Movie>, DomainError>;

    /// Get several movies in input order.
    ///
    /// Movies the catalog does not know are skipped. The first failed
    /// lookup aborts the batch and its error is returned.
    async fn get_many(&self, ids: &[MovieId]) -> Result<Vec<Movie>, DomainError>;
}
