//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod cache_store;
pub mod catalog_fetcher;
pub mod progress;
