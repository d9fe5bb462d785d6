//! Movie catalog infrastructure module
//!
//! HTTP access to the OMDb catalog behind the `CatalogClient` trait.

mod http_client;
mod omdb;

pub use http_client::{HttpClient, HttpClientTrait};
pub use omdb::{OmdbCatalogClient, DEFAULT_OMDB_BASE_URL};

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
