//! User directory trait

use std::fmt::Debug;
use std::sync::Arc;

use super::entity::{User, UserId};
use crate::domain::catalog::MovieId;
use crate::domain::DomainError;

/// Process-wide store of users keyed by identifier.
///
/// All operations are synchronous and in-memory and may be called
/// concurrently from any number of threads or tasks.
pub trait UserDirectory: Send + Sync + Debug {
    /// Get a user by ID, or `DomainError::NotFound`
    fn get(&self, id: &UserId) -> Result<Arc<User>, DomainError>;

    /// Allocate a fresh identifier and insert a new user with no likes.
    ///
    /// Concurrent calls never produce the same identifier.
    fn create(&self, name: &str) -> Arc<User>;

    /// Add `movie` to the user's likes unless already present.
    ///
    /// Fails with `DomainError::NotFound` for an unknown user. Repeating
    /// the call with the same arguments has no further effect.
    fn like(&self, id: &UserId, movie: &MovieId) -> Result<(), DomainError>;

    /// Check if a user ID exists
    fn exists(&self, id: &UserId) -> bool {
        self.get(id).is_ok()
    }
}
