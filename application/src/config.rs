//! Application-level configuration.
//!
//! Controls how the load use case treats the data it receives.

/// Catalog load behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadPolicy {
    /// Treat a catalog with zero records as a failure
    /// ([`CatalogError::EmptyResult`](catalog_domain::CatalogError::EmptyResult)).
    ///
    /// Off by default: an empty catalog is a valid, zero-row load.
    pub require_records: bool,
}

impl LoadPolicy {
    pub fn requiring_records() -> Self {
        Self {
            require_records: true,
        }
    }
}
