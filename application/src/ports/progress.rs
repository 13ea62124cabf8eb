//! Progress notification port
//!
//! Defines the interface for reporting a catalog load as it happens.

use catalog_domain::CatalogError;

/// Callback for progress updates during a catalog load
///
/// Implementations live in the presentation layer (spinner, plain text).
/// All methods default to no-ops.
pub trait LoadProgressNotifier: Send + Sync {
    /// Called with the restored record count when a cached list is found
    fn on_cache_restored(&self, _catalog: &str, _count: usize) {}

    /// Called right before the request is sent
    fn on_fetch_start(&self, _catalog: &str, _url: &str) {}

    /// Called when the load succeeded
    fn on_fetch_complete(&self, _catalog: &str, _count: usize) {}

    /// Called when the load failed
    fn on_fetch_failed(&self, _catalog: &str, _error: &CatalogError) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LoadProgressNotifier for NoProgress {}
