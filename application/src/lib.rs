//! Application layer for catalog-browser
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::LoadPolicy;
pub use ports::{
    cache_store::{CacheError, CacheStore, persist, restore},
    catalog_fetcher::{CatalogFetcher, FetchError},
    progress::{LoadProgressNotifier, NoProgress},
};
pub use use_cases::catalog_session::CatalogSession;
pub use use_cases::load_catalog::{LoadCatalogInput, LoadCatalogUseCase};
