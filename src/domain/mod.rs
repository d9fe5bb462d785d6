//! Domain layer - core types and traits

pub mod catalog;
pub mod error;
pub mod user;

pub use catalog::{CatalogClient, Movie, MovieId};
pub use error::DomainError;
pub use user::{User, UserDirectory, UserId, UserSnapshot};
