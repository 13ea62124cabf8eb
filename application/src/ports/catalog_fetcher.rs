//! Catalog fetcher port
//!
//! Defines how the application layer obtains a catalog's raw JSON body.

use async_trait::async_trait;
use catalog_domain::{CatalogError, Endpoint};
use thiserror::Error;

/// Errors that can occur while fetching a catalog body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection failure, timeout, or non-success status
    #[error("{0}")]
    Network(String),

    /// The body could not be parsed as JSON
    #[error("{0}")]
    Decode(String),
}

impl From<FetchError> for CatalogError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Network(message) => CatalogError::Network(message),
            FetchError::Decode(message) => CatalogError::Decode(message),
        }
    }
}

/// Fetches the JSON body of a catalog endpoint
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Issue one GET against `endpoint` and parse the body as JSON.
    async fn fetch_json(&self, endpoint: &Endpoint) -> Result<serde_json::Value, FetchError>;
}
