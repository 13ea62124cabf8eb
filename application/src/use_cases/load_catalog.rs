//! Load catalog use case
//!
//! Fetches one catalog, decodes it into records, and replaces the cached
//! list on success. Generic over the [`Catalog`] so cards and items share
//! the same flow and differ only in how their body decodes.

use crate::config::LoadPolicy;
use crate::ports::cache_store::{CacheStore, persist, restore};
use crate::ports::catalog_fetcher::CatalogFetcher;
use crate::ports::progress::{LoadProgressNotifier, NoProgress};
use catalog_domain::{Catalog, CatalogError, Endpoint};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Input for the load catalog use case
#[derive(Debug, Clone)]
pub struct LoadCatalogInput {
    /// Where to fetch the catalog from
    pub endpoint: Endpoint,
}

impl LoadCatalogInput {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }
}

/// Use case for loading one catalog
pub struct LoadCatalogUseCase<C: Catalog> {
    fetcher: Arc<dyn CatalogFetcher>,
    cache: Arc<dyn CacheStore>,
    policy: LoadPolicy,
    _catalog: PhantomData<fn() -> C>,
}

impl<C: Catalog> LoadCatalogUseCase<C> {
    pub fn new(fetcher: Arc<dyn CatalogFetcher>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            fetcher,
            cache,
            policy: LoadPolicy::default(),
            _catalog: PhantomData,
        }
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The list stored by the last successful load, if any.
    pub fn cached(&self) -> Option<Vec<C::Record>> {
        restore(self.cache.as_ref(), C::CACHE_KEY)
    }

    /// When the cached list was written, if the store records it.
    pub fn cached_at(&self) -> Option<SystemTime> {
        self.cache.stored_at(C::CACHE_KEY)
    }

    /// Execute without progress reporting
    pub async fn execute(&self, input: LoadCatalogInput) -> Result<Vec<C::Record>, CatalogError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute with progress notifications
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Network`] - the request failed or returned an error status
    /// - [`CatalogError::Decode`] - the body was not JSON or had the wrong shape
    /// - [`CatalogError::EmptyResult`] - zero records while [`LoadPolicy::require_records`] is set
    pub async fn execute_with_progress(
        &self,
        input: LoadCatalogInput,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<Vec<C::Record>, CatalogError> {
        let url = input.endpoint.url();
        progress.on_fetch_start(C::NAME, &url);

        let result = self.load(&input.endpoint).await;
        match &result {
            Ok(records) => {
                info!("Loaded {} {} from {}", records.len(), C::NAME, url);
                persist(self.cache.as_ref(), C::CACHE_KEY, records);
                progress.on_fetch_complete(C::NAME, records.len());
            }
            Err(e) => {
                warn!("Loading {} from {} failed: {}", C::NAME, url, e);
                progress.on_fetch_failed(C::NAME, e);
            }
        }
        result
    }

    async fn load(&self, endpoint: &Endpoint) -> Result<Vec<C::Record>, CatalogError> {
        debug!("Fetching {} catalog", C::NAME);
        let body = self.fetcher.fetch_json(endpoint).await?;
        let records = C::decode(body)?;

        if records.is_empty() && self.policy.require_records {
            return Err(CatalogError::empty(C::NAME));
        }
        Ok(records)
    }
}
