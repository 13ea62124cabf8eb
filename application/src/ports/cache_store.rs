//! Cache store port.
//!
//! The last successfully loaded list of each catalog is kept under a fixed
//! key so the next command activation can show it while it refetches.
//! The store deals in JSON values; [`restore`] and [`persist`] add typing
//! on top and turn store failures into log lines.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::SystemTime;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from a cache store backend.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache entry is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Keyed storage for serializable state across command invocations.
pub trait CacheStore: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CacheError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), CacheError>;

    /// When the value under `key` was written, for stores that record it.
    fn stored_at(&self, _key: &str) -> Option<SystemTime> {
        None
    }
}

/// Read and decode a cached value. Any failure reads as a miss.
pub fn restore<T: DeserializeOwned>(store: &dyn CacheStore, key: &str) -> Option<T> {
    let value = match store.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => {
            debug!("Cache miss for '{}'", key);
            return None;
        }
        Err(e) => {
            warn!("Could not read cache entry '{}': {}", key, e);
            return None;
        }
    };

    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            warn!("Ignoring stale cache entry '{}': {}", key, e);
            None
        }
    }
}

/// Encode and store a value. Failures are logged, never returned.
pub fn persist<T: Serialize>(store: &dyn CacheStore, key: &str, value: &T) {
    let encoded = match serde_json::to_value(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!("Could not encode cache entry '{}': {}", key, e);
            return;
        }
    };

    if let Err(e) = store.set(key, encoded) {
        warn!("Could not write cache entry '{}': {}", key, e);
    }
}
