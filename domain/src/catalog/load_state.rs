//! Load state of one catalog command instance

use crate::core::error::CatalogError;

/// Where a catalog load stands.
///
/// Replaces a loose "is loading" flag: a load that errors ends in
/// [`LoadState::Failed`], so there is no path that leaves it `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// The command has not asked for data yet
    NotStarted,
    /// A fetch is in flight
    Loading,
    /// The fetch finished and produced data
    Loaded(T),
    /// The fetch finished with an error
    Failed(CatalogError),
}

impl<T> LoadState<T> {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Nothing has settled yet: not started, or still fetching.
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::NotStarted | LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::NotStarted => "not_started",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::NotStarted
    }
}

impl<T> From<Result<T, CatalogError>> for LoadState<T> {
    fn from(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(error) => LoadState::Failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_started() {
        let state: LoadState<Vec<u8>> = LoadState::default();
        assert_eq!(state, LoadState::NotStarted);
        assert!(state.is_pending());
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_from_result() {
        let ok: LoadState<u8> = Ok(3).into();
        assert_eq!(ok.loaded(), Some(&3));
        assert!(!ok.is_pending());

        let failed: LoadState<u8> = Err(CatalogError::network("down")).into();
        assert_eq!(failed.error(), Some(&CatalogError::network("down")));
        assert!(!failed.is_pending());
        assert_eq!(failed.as_str(), "failed");
    }
}
