//! In-memory user directory implementation

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::domain::catalog::MovieId;
use crate::domain::user::{User, UserDirectory, UserId};
use crate::domain::DomainError;

/// Names of the users seeded by [`InMemoryUserDirectory::with_demo_users`],
/// assigned identifiers `"1"` through `"6"` in this order.
pub const DEMO_USER_NAMES: [&str; 6] = ["Chris", "Steph", "Peter", "Tas", "Billy", "Cameron"];

/// In-memory implementation of UserDirectory
///
/// The map lock is held only for a single `get` or `insert`. Likes are
/// applied under each user's own lock after the map lock is released, so
/// no operation holds two locks at once.
#[derive(Debug)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<UserId, Arc<User>>>,
    /// Next sequence number to hand out
    next_id: AtomicU64,
}

impl InMemoryUserDirectory {
    /// Create a new empty directory whose first user gets ID `"1"`
    pub fn new() -> Self {
        Self::with_start(1)
    }

    /// Create a new empty directory whose first user gets ID `start`
    pub fn with_start(start: u64) -> Self {
        Self::from_parts(HashMap::new(), start)
    }

    /// Create a directory with initial users.
    ///
    /// Seed IDs must be numeric. Allocation starts one past the highest.
    pub fn with_users(users: Vec<User>) -> Result<Self, DomainError> {
        let mut users_map = HashMap::with_capacity(users.len());
        let mut highest = 0;

        for user in users {
            let sequence = seed_sequence(user.id())?;

            if users_map.contains_key(user.id()) {
                return Err(DomainError::validation(format!(
                    "Seed user ID '{}' is duplicated",
                    user.id()
                )));
            }

            highest = highest.max(sequence);
            users_map.insert(user.id().clone(), Arc::new(user));
        }

        let start = highest.checked_add(1).ok_or_else(|| {
            DomainError::invalid_id(format!(
                "Seed user ID '{}' leaves no room for new user IDs",
                highest
            ))
        })?;

        Ok(Self::from_parts(users_map, start))
    }

    /// Create a directory seeded with the demo users `"1"`..`"6"`
    pub fn with_demo_users() -> Self {
        let users_map: HashMap<_, _> = (1u64..)
            .zip(DEMO_USER_NAMES)
            .map(|(sequence, name)| {
                let user = User::new(UserId::from_sequence(sequence), name);
                (user.id().clone(), Arc::new(user))
            })
            .collect();

        let start = users_map.len() as u64 + 1;
        Self::from_parts(users_map, start)
    }

    fn from_parts(users: HashMap<UserId, Arc<User>>, start: u64) -> Self {
        Self {
            users: RwLock::new(users),
            next_id: AtomicU64::new(start),
        }
    }

    /// Number of users currently visible
    pub fn len(&self) -> usize {
        self.read_users().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sequence number the next `create` would receive if uncontended
    pub fn peek_next_id(&self) -> u64 {
        self.next_id.load(Ordering::Relaxed)
    }

    // Map writers only call `insert` on a fully built record, so a
    // poisoned lock still guards a consistent map.
    fn read_users(&self) -> RwLockReadGuard<'_, HashMap<UserId, Arc<User>>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_users(&self) -> RwLockWriteGuard<'_, HashMap<UserId, Arc<User>>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn seed_sequence(id: &UserId) -> Result<u64, DomainError> {
    if !id.as_str().bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::invalid_id(format!(
            "Seed user ID '{}' is not numeric",
            id
        )));
    }

    id.sequence().ok_or_else(|| {
        DomainError::invalid_id(format!(
            "Seed user ID '{}' exceeds the largest allocatable ID {}",
            id,
            u64::MAX
        ))
    })
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn get(&self, id: &UserId) -> Result<Arc<User>, DomainError> {
        let user = self.read_users().get(id).cloned();

        user.ok_or_else(|| {
            debug!(user_id = %id, "User not found");
            DomainError::not_found(format!("User '{}' not found", id))
        })
    }

    fn create(&self, name: &str) -> Arc<User> {
        // Relaxed: uniqueness only needs the atomic read-modify-write
        let sequence = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = Arc::new(User::new(UserId::from_sequence(sequence), name));

        self.write_users().insert(user.id().clone(), Arc::clone(&user));

        info!(user_id = %user.id(), name = %user.name(), "Created user");
        user
    }

    fn like(&self, id: &UserId, movie: &MovieId) -> Result<(), DomainError> {
        let user = self.get(id)?;

        if user.like(movie) {
            debug!(user_id = %id, movie_id = %movie, "Added like");
        } else {
            debug!(user_id = %id, movie_id = %movie, "Like already recorded");
        }

        Ok(())
    }
}
