//! Infrastructure layer for catalog-browser
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cache;
pub mod config;
pub mod http;

// Re-export commonly used types
pub use cache::{FileCacheStore, InMemoryCacheStore};
pub use config::{
    ConfigIssue, ConfigLoader, FileCacheConfig, FileCardsConfig, FileCatalogConfig, FileConfig,
    FileHttpConfig, FileItemsConfig, FileOutputConfig,
};
pub use http::HttpCatalogFetcher;
