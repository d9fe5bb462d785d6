//! User infrastructure module
//!
//! This module provides the concurrent in-memory user directory.

mod directory;

pub use directory::{InMemoryUserDirectory, DEMO_USER_NAMES};
