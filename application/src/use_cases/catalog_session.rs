//! Catalog session: the state of one command instance.
//!
//! A session starts `NotStarted`, optionally shows the cached list from the
//! previous run, and moves through `Loading` into `Loaded` or `Failed` when
//! activated. The state is a single value, so every exit path of a load
//! leaves the session settled.

use super::load_catalog::{LoadCatalogInput, LoadCatalogUseCase};
use crate::ports::progress::LoadProgressNotifier;
use catalog_domain::{Catalog, CatalogError, LoadState};
use std::time::SystemTime;
use tracing::debug;

pub struct CatalogSession<C: Catalog> {
    use_case: LoadCatalogUseCase<C>,
    state: LoadState<Vec<C::Record>>,
    cached: Option<Vec<C::Record>>,
    cached_at: Option<SystemTime>,
}

impl<C: Catalog> CatalogSession<C> {
    pub fn new(use_case: LoadCatalogUseCase<C>) -> Self {
        Self {
            use_case,
            state: LoadState::NotStarted,
            cached: None,
            cached_at: None,
        }
    }

    /// Pick up the list cached by the previous run. Returns how many
    /// records were restored.
    pub fn restore(&mut self, progress: &dyn LoadProgressNotifier) -> usize {
        self.cached = self.use_case.cached();
        let count = self.cached.as_ref().map_or(0, Vec::len);
        if self.cached.is_some() {
            self.cached_at = self.use_case.cached_at();
            progress.on_cache_restored(C::NAME, count);
        }
        count
    }

    /// Run the fetch for this instance.
    ///
    /// Fetches at most once per session: activating a session that already
    /// loaded returns its state untouched. A failed session may be
    /// activated again.
    pub async fn activate(
        &mut self,
        input: LoadCatalogInput,
        progress: &dyn LoadProgressNotifier,
    ) -> &LoadState<Vec<C::Record>> {
        if matches!(self.state, LoadState::Loaded(_)) {
            debug!("{} session already loaded", C::NAME);
            return &self.state;
        }

        self.state = LoadState::Loading;
        let result = self.use_case.execute_with_progress(input, progress).await;
        if result.is_ok() {
            self.cached = None;
            self.cached_at = None;
        }
        self.state = result.into();
        debug!("{} session {}", C::NAME, self.state.as_str());
        &self.state
    }

    /// Records to display: the fresh list once loaded, otherwise whatever
    /// was restored from the cache.
    pub fn records(&self) -> Option<&[C::Record]> {
        self.state
            .loaded()
            .map(Vec::as_slice)
            .or(self.cached.as_deref())
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.state.error()
    }

    /// Show a loading indicator: a fetch is in flight, or nothing is
    /// displayable yet and no failure has been reported.
    pub fn is_loading(&self) -> bool {
        self.state.is_in_flight() || (self.state.is_pending() && self.records().is_none())
    }

    /// Whether the records shown came from the cache rather than this run.
    pub fn is_stale(&self) -> bool {
        !matches!(self.state, LoadState::Loaded(_)) && self.cached.is_some()
    }

    /// When the stale records were cached, if known.
    pub fn stale_since(&self) -> Option<SystemTime> {
        if self.is_stale() { self.cached_at } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::cache_store::persist;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{FakeFetcher, MemoryCache, RecordingProgress};
    use catalog_domain::{Card, CardCatalog, Endpoint, Item, ItemCatalog};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn input() -> LoadCatalogInput {
        LoadCatalogInput::new(Endpoint::new("http://localhost", "/items"))
    }

    #[tokio::test]
    async fn test_new_session_is_loading_until_activated() {
        let use_case = LoadCatalogUseCase::<ItemCatalog>::new(
            Arc::new(FakeFetcher::ok(json!({"data": []}))),
            Arc::new(MemoryCache::default()),
        );
        let mut session = CatalogSession::new(use_case);

        assert!(session.is_loading());
        assert_eq!(session.records(), None);

        session.activate(input(), &NoProgress).await;

        assert!(!session.is_loading());
        assert_eq!(session.records().map(<[Item]>::len), Some(0));
        assert_eq!(session.error(), None);
    }

    #[tokio::test]
    async fn test_failure_clears_loading_and_surfaces_error() {
        let use_case = LoadCatalogUseCase::<ItemCatalog>::new(
            Arc::new(FakeFetcher::ok(json!("not an envelope"))),
            Arc::new(MemoryCache::default()),
        );
        let mut session = CatalogSession::new(use_case);

        let state = session.activate(input(), &NoProgress).await;

        assert!(matches!(state, LoadState::Failed(CatalogError::Decode(_))));
        assert!(!session.is_loading());
        assert!(session.error().is_some());
    }

    #[tokio::test]
    async fn test_cached_list_is_shown_until_fresh_load() {
        let cache = Arc::new(MemoryCache::default());
        persist(
            cache.as_ref(),
            CardCatalog::CACHE_KEY,
            &vec![Card::new("old").with_name("Cached")],
        );
        let progress = RecordingProgress::default();
        let use_case = LoadCatalogUseCase::<CardCatalog>::new(
            Arc::new(FakeFetcher::ok(json!([{"code": "new", "real_name": "Fresh"}]))),
            cache,
        );
        let mut session = CatalogSession::new(use_case);

        assert_eq!(session.restore(&progress), 1);
        assert!(!session.is_loading());
        assert!(session.is_stale());
        assert_eq!(session.records().unwrap()[0].code, "old");

        session.activate(input(), &progress).await;

        assert!(!session.is_stale());
        assert_eq!(session.records().unwrap()[0].code, "new");
        assert_eq!(progress.events()[0], "restored cards 1");
    }

    #[tokio::test]
    async fn test_stale_since_follows_cached_list() {
        let written = SystemTime::UNIX_EPOCH + Duration::from_secs(1_800_000_000);
        let cache = Arc::new(MemoryCache::written_at(written));
        persist(cache.as_ref(), CardCatalog::CACHE_KEY, &vec![Card::new("old")]);
        let use_case = LoadCatalogUseCase::<CardCatalog>::new(
            Arc::new(FakeFetcher::ok(json!([{"code": "new"}]))),
            cache,
        );
        let mut session = CatalogSession::new(use_case);

        assert_eq!(session.stale_since(), None);
        session.restore(&NoProgress);
        assert_eq!(session.stale_since(), Some(written));

        session.activate(input(), &NoProgress).await;
        assert_eq!(session.stale_since(), None);
    }

    #[tokio::test]
    async fn test_cached_list_survives_failed_load() {
        let cache = Arc::new(MemoryCache::default());
        persist(cache.as_ref(), CardCatalog::CACHE_KEY, &vec![Card::new("old")]);
        let use_case = LoadCatalogUseCase::<CardCatalog>::new(
            Arc::new(FakeFetcher::network_error("offline")),
            cache,
        );
        let mut session = CatalogSession::new(use_case);
        session.restore(&NoProgress);

        session.activate(input(), &NoProgress).await;

        assert_eq!(session.error(), Some(&CatalogError::network("offline")));
        assert_eq!(session.records().map(<[Card]>::len), Some(1));
        assert!(session.is_stale());
    }

    #[tokio::test]
    async fn test_activate_fetches_once() {
        let fetcher = Arc::new(FakeFetcher::ok(json!({"data": [{"id": "a"}]})));
        let use_case = LoadCatalogUseCase::<ItemCatalog>::new(
            fetcher.clone(),
            Arc::new(MemoryCache::default()),
        );
        let mut session = CatalogSession::new(use_case);

        session.activate(input(), &NoProgress).await;
        session.activate(input(), &NoProgress).await;

        assert_eq!(fetcher.requested().len(), 1);
    }
}
