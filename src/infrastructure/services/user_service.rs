//! User service - user directory operations plus catalog lookups for likes

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{validate_name, UserDirectory, UserId, UserSnapshot};
use crate::domain::{CatalogClient, DomainError, Movie, MovieId};

/// Request to create a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Service combining the user directory with the movie catalog
#[derive(Clone)]
pub struct UserService {
    directory: Arc<dyn UserDirectory>,
    catalog: Arc<dyn CatalogClient>,
}

impl UserService {
    /// Create a new UserService
    pub fn new(directory: Arc<dyn UserDirectory>, catalog: Arc<dyn CatalogClient>) -> Self {
        Self { directory, catalog }
    }

    /// Get a user by ID
    pub fn get_user(&self, id: &str) -> Result<UserSnapshot, DomainError> {
        let user_id = parse_user_id(id)?;
        Ok(self.directory.get(&user_id)?.snapshot())
    }

    /// Create a new user with a trimmed, non-empty name
    pub fn create_user(&self, request: CreateUserRequest) -> Result<UserSnapshot, DomainError> {
        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;

        let user = self.directory.create(request.name.trim());
        Ok(user.snapshot())
    }

    /// Record that a user likes a movie. Repeating the call has no effect.
    pub fn like(&self, user_id: &str, movie_id: &str) -> Result<(), DomainError> {
        let user_id = parse_user_id(user_id)?;
        let movie_id = MovieId::new(movie_id)?;

        self.directory.like(&user_id, &movie_id)
    }

    /// Resolve a user's likes against the catalog, in like order
    pub async fn liked_movies(&self, user_id: &str) -> Result<Vec<Movie>, DomainError> {
        let user_id = parse_user_id(user_id)?;

        // Copy out the likes so no lock is held across the catalog calls
        let likes = self.directory.get(&user_id)?.likes();
        debug!(user_id = %user_id, likes = likes.len(), "Resolving liked movies");

        self.catalog.get_many(&likes).await
    }

    /// Search the catalog by term
    pub async fn search_movies(&self, term: &str) -> Result<Vec<Movie>, DomainError> {
        let term = term.trim();

        if term.is_empty() {
            return Err(DomainError::validation("Search term cannot be empty"));
        }

        self.catalog.search(term).await
    }

    /// Get a movie from the catalog, returning an error if not found
    pub async fn get_movie(&self, id: &str) -> Result<Movie, DomainError> {
        let movie_id = MovieId::new(id)?;

        self.catalog
            .get(&movie_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Movie '{}' not found", id)))
    }
}

fn parse_user_id(id: &str) -> Result<UserId, DomainError> {
    UserId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::MockCatalogClient;
    use crate::infrastructure::user::InMemoryUserDirectory;

    fn movie_id(id: &str) -> MovieId {
        MovieId::new(id).unwrap()
    }

    fn movie(id: &str, title: &str, year: &str) -> Movie {
        Movie::new(movie_id(id), title, year)
    }

    fn create_service(catalog: MockCatalogClient) -> UserService {
        UserService::new(
            Arc::new(InMemoryUserDirectory::with_demo_users()),
            Arc::new(catalog),
        )
    }

    #[test]
    fn test_create_and_get_user() {
        let service = create_service(MockCatalogClient::new());

        let created = service
            .create_user(CreateUserRequest {
                name: "  Nova ".to_string(),
            })
            .unwrap();
        assert_eq!(created.id.as_str(), "7");
        assert_eq!(created.name, "Nova");
        assert!(created.likes.is_empty());

        let fetched = service.get_user("7").unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_create_user_rejects_blank_name() {
        let service = create_service(MockCatalogClient::new());

        let err = service
            .create_user(CreateUserRequest {
                name: "   ".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        // No identifier is consumed by a rejected request
        let created = service
            .create_user(CreateUserRequest {
                name: "Nova".to_string(),
            })
            .unwrap();
        assert_eq!(created.id.as_str(), "7");
    }

    #[test]
    fn test_get_user_errors() {
        let service = create_service(MockCatalogClient::new());

        assert!(service.get_user("99").unwrap_err().is_not_found());
        assert!(matches!(
            service.get_user("not an id"),
            Err(DomainError::InvalidId { .. })
        ));
    }

    #[test]
    fn test_like_is_idempotent() {
        let service = create_service(MockCatalogClient::new());

        service.like("1", "tt0111161").unwrap();
        service.like("1", "tt0111161").unwrap();

        assert_eq!(service.get_user("1").unwrap().likes, vec![movie_id("tt0111161")]);
    }

    #[test]
    fn test_like_errors() {
        let service = create_service(MockCatalogClient::new());

        assert!(service.like("99", "tt0111161").unwrap_err().is_not_found());
        assert!(matches!(
            service.like("1", "tt 0111161"),
            Err(DomainError::InvalidId { .. })
        ));
    }

    #[tokio::test]
    async fn test_liked_movies_resolves_in_like_order() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_get_many()
            .withf(|ids: &[MovieId]| ids == [movie_id("tt0068646"), movie_id("tt0111161")])
            .times(1)
            .returning(|_| {
                Ok(vec![
                    movie("tt0068646", "The Godfather", "1972"),
                    movie("tt0111161", "The Shawshank Redemption", "1994"),
                ])
            });
        let service = create_service(catalog);

        service.like("2", "tt0068646").unwrap();
        service.like("2", "tt0111161").unwrap();

        let movies = service.liked_movies("2").await.unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "The Godfather");
    }

    #[tokio::test]
    async fn test_liked_movies_unknown_user_skips_catalog() {
        let mut catalog = MockCatalogClient::new();
        catalog.expect_get_many().times(0);
        let service = create_service(catalog);

        let err = service.liked_movies("99").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_liked_movies_propagates_catalog_error() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_get_many()
            .returning(|_| Err(DomainError::provider("omdb", "timeout")));
        let service = create_service(catalog);

        service.like("3", "tt0111161").unwrap();

        let err = service.liked_movies("3").await.unwrap_err();
        assert!(matches!(err, DomainError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_search_movies() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_search()
            .withf(|term: &str| term == "godfather")
            .returning(|_| Ok(vec![movie("tt0068646", "The Godfather", "1972")]));
        let service = create_service(catalog);

        let movies = service.search_movies(" godfather ").await.unwrap();
        assert_eq!(movies.len(), 1);

        let err = service.search_movies("  ").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_movie() {
        let mut catalog = MockCatalogClient::new();
        catalog.expect_get().returning(|id: &MovieId| {
            if id.as_str() == "tt0111161" {
                Ok(Some(movie("tt0111161", "The Shawshank Redemption", "1994")))
            } else {
                Ok(None)
            }
        });
        let service = create_service(catalog);

        let found = service.get_movie("tt0111161").await.unwrap();
        assert_eq!(found.year, "1994");

        let err = service.get_movie("tt9999999").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
