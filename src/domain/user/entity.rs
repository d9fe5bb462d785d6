//! User entity and related types

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use super::validation::{validate_user_id, UserValidationError};
use crate::domain::catalog::MovieId;

/// User identifier - alphanumeric, hyphens and underscores, max 64 characters.
///
/// Identifiers handed out by the directory are decimal sequence numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Identifier for an allocated sequence number
    pub fn from_sequence(value: u64) -> Self {
        Self(value.to_string())
    }

    /// The sequence number this identifier encodes, if it is numeric
    pub fn sequence(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A person known to the directory.
///
/// `id` and `name` are fixed at construction. The like-list is guarded by
/// the record's own mutex so that likes on one user never contend with
/// likes on another. Mutation goes through the directory.
#[derive(Debug)]
pub struct User {
    id: UserId,
    name: String,
    /// Movies in order of first like, without duplicates
    likes: Mutex<Vec<MovieId>>,
}

impl User {
    /// Create a new user with no likes
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            likes: Mutex::new(Vec::new()),
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy of the current like-list
    pub fn likes(&self) -> Vec<MovieId> {
        self.lock_likes().clone()
    }

    /// Point-in-time copy suitable for serialization
    pub fn snapshot(&self) -> UserSnapshot {
        UserSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            likes: self.likes(),
        }
    }

    // Mutators

    /// Append `movie` unless already liked. Returns whether it was appended.
    ///
    /// The membership check and the push happen under one guard.
    pub(crate) fn like(&self, movie: &MovieId) -> bool {
        let mut likes = self.lock_likes();

        if likes.contains(movie) {
            return false;
        }

        likes.push(movie.clone());
        true
    }

    // The guarded Vec is only ever touched by `contains`, `push` and
    // `clone`, none of which leave it half-written if a holder panics.
    fn lock_likes(&self) -> MutexGuard<'_, Vec<MovieId>> {
        self.likes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Serializable view of a user at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: UserId,
    pub name: String,
    pub likes: Vec<MovieId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn movie(id: &str) -> MovieId {
        MovieId::new(id).unwrap()
    }

    #[test]
    fn test_user_id_validation() {
        assert!(UserId::new("7").is_ok());
        assert!(UserId::new("").is_err());
        assert!(UserId::new("a b").is_err());
    }

    #[test]
    fn test_user_id_sequence() {
        let id = UserId::from_sequence(42);
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.sequence(), Some(42));

        let named = UserId::new("alice").unwrap();
        assert_eq!(named.sequence(), None);
    }

    #[test]
    fn test_new_user_has_no_likes() {
        let user = User::new(UserId::from_sequence(7), "Nova");

        assert_eq!(user.id().as_str(), "7");
        assert_eq!(user.name(), "Nova");
        assert!(user.likes().is_empty());
    }

    #[test]
    fn test_like_is_idempotent() {
        let user = User::new(UserId::from_sequence(1), "Chris");

        assert!(user.like(&movie("tt0111161")));
        assert!(!user.like(&movie("tt0111161")));

        assert_eq!(user.likes(), vec![movie("tt0111161")]);
    }

    #[test]
    fn test_like_preserves_first_insertion_order() {
        let user = User::new(UserId::from_sequence(1), "Chris");

        user.like(&movie("tt0068646"));
        user.like(&movie("tt0111161"));
        user.like(&movie("tt0068646"));
        user.like(&movie("tt0468569"));

        assert_eq!(
            user.likes(),
            vec![movie("tt0068646"), movie("tt0111161"), movie("tt0468569")]
        );
    }

    #[test]
    fn test_concurrent_same_like_inserts_once() {
        const THREADS: usize = 16;

        let user = Arc::new(User::new(UserId::from_sequence(1), "Chris"));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let user = Arc::clone(&user);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    user.like(&movie("tt0111161"))
                })
            })
            .collect();

        let appended = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|appended| *appended)
            .count();

        assert_eq!(appended, 1);
        assert_eq!(user.likes(), vec![movie("tt0111161")]);
    }

    #[test]
    fn test_snapshot_serialization() {
        let user = User::new(UserId::from_sequence(7), "Nova");
        user.like(&movie("tt0111161"));

        let json = serde_json::to_value(user.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "7",
                "name": "Nova",
                "likes": ["tt0111161"]
            })
        );
    }
}
