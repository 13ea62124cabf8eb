//! Hand-rolled port fakes for use case tests

use crate::ports::cache_store::{CacheError, CacheStore};
use crate::ports::catalog_fetcher::{CatalogFetcher, FetchError};
use crate::ports::progress::LoadProgressNotifier;
use async_trait::async_trait;
use catalog_domain::{CatalogError, Endpoint};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::SystemTime;

pub struct FakeFetcher {
    response: Result<Value, FetchError>,
    requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn ok(body: Value) -> Self {
        Self {
            response: Ok(body),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn network_error(message: &str) -> Self {
        Self {
            response: Err(FetchError::Network(message.to_string())),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogFetcher for FakeFetcher {
    async fn fetch_json(&self, endpoint: &Endpoint) -> Result<Value, FetchError> {
        self.requested.lock().unwrap().push(endpoint.url());
        self.response.clone()
    }
}

#[derive(Default)]
pub struct MemoryCache(Mutex<HashMap<String, Value>>, Option<SystemTime>);

impl MemoryCache {
    /// A cache whose entries all report `stored_at` as their write time.
    pub fn written_at(stored_at: SystemTime) -> Self {
        Self(Mutex::default(), Some(stored_at))
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        Ok(self.0.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CacheError> {
        self.0.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn stored_at(&self, key: &str) -> Option<SystemTime> {
        self.1.filter(|_| self.0.lock().unwrap().contains_key(key))
    }
}

#[derive(Default)]
pub struct RecordingProgress(Mutex<Vec<String>>);

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.0.lock().unwrap().push(event);
    }
}

impl LoadProgressNotifier for RecordingProgress {
    fn on_cache_restored(&self, catalog: &str, count: usize) {
        self.push(format!("restored {} {}", catalog, count));
    }

    fn on_fetch_start(&self, catalog: &str, _url: &str) {
        self.push(format!("start {}", catalog));
    }

    fn on_fetch_complete(&self, catalog: &str, count: usize) {
        self.push(format!("complete {} {}", catalog, count));
    }

    fn on_fetch_failed(&self, catalog: &str, error: &CatalogError) {
        self.push(format!("failed {} {}", catalog, error.kind()));
    }
}
