//! Movie catalog domain
//!
//! Types for movies looked up in the external catalog service and the
//! client trait the rest of the application consumes.

mod client;
mod entity;

pub use client::CatalogClient;
pub use entity::{Movie, MovieId};

#[cfg(test)]
pub use client::MockCatalogClient;
