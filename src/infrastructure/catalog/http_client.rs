use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::DomainError;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// GET `url` with the given query parameters and decode the body as JSON
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, DomainError> {
        let response = self.client.get(url).query(query).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            DomainError::provider("http", format!("Request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            warn!(url = %url, status = %status, "HTTP request returned an error status");
            return Err(DomainError::provider(
                "http",
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        response.json().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to decode HTTP response");
            DomainError::provider("http", format!("Failed to parse response: {}", e))
        })
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, RwLock};

    /// Canned responses keyed by [`MockHttpClient::key`]
    #[derive(Debug, Default)]
    pub struct MockHttpClient {
        responses: RwLock<HashMap<String, serde_json::Value>>,
        errors: RwLock<HashMap<String, String>>,
        requests: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Lookup key for a request: the URL followed by its query pairs
        pub fn key(url: &str, query: &[(&str, &str)]) -> String {
            let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            format!("{}?{}", url, pairs.join("&"))
        }

        pub fn with_response(self, key: impl Into<String>, response: serde_json::Value) -> Self {
            self.responses.write().unwrap().insert(key.into(), response);
            self
        }

        pub fn with_error(self, key: impl Into<String>, error: impl Into<String>) -> Self {
            self.errors.write().unwrap().insert(key.into(), error.into());
            self
        }

        /// Keys of all requests made so far, in order
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn get_json(
            &self,
            url: &str,
            query: &[(&str, &str)],
        ) -> Result<serde_json::Value, DomainError> {
            let key = Self::key(url, query);
            self.requests.lock().unwrap().push(key.clone());

            if let Some(error) = self.errors.read().unwrap().get(&key) {
                return Err(DomainError::provider("mock", error));
            }

            self.responses
                .read()
                .unwrap()
                .get(&key)
                .cloned()
                .ok_or_else(|| DomainError::provider("mock", format!("No mock response for {}", key)))
        }
    }
}
