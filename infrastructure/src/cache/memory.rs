//! Process-local cache store

use catalog_application::ports::cache_store::{CacheError, CacheStore};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Cache that lives as long as the process. Used with `--no-cache` so the
/// session still has a store to write to.
#[derive(Debug, Default)]
pub struct InMemoryCacheStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for InMemoryCacheStore {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CacheError::Io(std::io::Error::other("cache lock poisoned")))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CacheError::Io(std::io::Error::other("cache lock poisoned")))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
