//! Domain error types

use thiserror::Error;

/// Errors that end a catalog load.
///
/// Every variant is surfaced to the user as a visible failure state; a
/// failed load never leaves the list spinning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Connectivity failure, timeout, or a non-success HTTP status
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not JSON, or the JSON did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// The API answered with zero records and records were required
    #[error("The {catalog} catalog returned no records")]
    EmptyResult { catalog: String },
}

impl CatalogError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn empty(catalog: impl Into<String>) -> Self {
        Self::EmptyResult {
            catalog: catalog.into(),
        }
    }

    /// Short machine-friendly kind name, used in logs and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Network(_) => "network",
            CatalogError::Decode(_) => "decode",
            CatalogError::EmptyResult { .. } => "empty_result",
        }
    }
}
