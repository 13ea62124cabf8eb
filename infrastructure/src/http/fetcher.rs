//! reqwest-backed catalog fetcher

use async_trait::async_trait;
use catalog_application::ports::catalog_fetcher::{CatalogFetcher, FetchError};
use catalog_domain::Endpoint;
use std::time::Duration;
use tracing::debug;

/// Fetches catalog bodies over HTTP.
///
/// Holds one `reqwest::Client`, so repeated fetches share its connection pool.
pub struct HttpCatalogFetcher {
    client: reqwest::Client,
}

impl HttpCatalogFetcher {
    /// Build a fetcher with the given User-Agent and optional timeout.
    ///
    /// Without a timeout the client's default (none) applies.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent.to_string());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogFetcher {
    async fn fetch_json(&self, endpoint: &Endpoint) -> Result<serde_json::Value, FetchError> {
        let url = endpoint.url();
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(describe_request_error(&url, &e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "HTTP error from {}: {} {}",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            FetchError::Network(format!("Failed to read response body from {}: {}", url, e))
        })?;
        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body)
            .map_err(|e| FetchError::Decode(format!("Response from {} is not valid JSON: {}", url, e)))
    }
}

fn describe_request_error(url: &str, error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("Request to {} timed out", url)
    } else if error.is_connect() {
        format!("Could not connect to {}: {}", url, error)
    } else {
        format!("Failed to fetch {}: {}", url, error)
    }
}
