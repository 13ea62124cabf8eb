//! File-backed cache store.
//!
//! One JSON file per key under the cache directory. Each file holds an
//! envelope with the write time so stale lists can be reported:
//!
//! ```json
//! { "stored_at": "2026-10-18T20:03:00.000Z", "value": [ ... ] }
//! ```
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! crash mid-write never leaves a truncated entry behind.

use catalog_application::ports::cache_store::{CacheError, CacheStore};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    stored_at: String,
    value: Value,
}

/// Cache store persisting entries as JSON files in a directory.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    dir: PathBuf,
}

impl FileCacheStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }

    fn read_entry(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let path = self.entry_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }
}

impl CacheStore for FileCacheStore {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let entry = self.read_entry(key)?;
        if let Some(entry) = &entry {
            debug!("Cache hit for '{}' (stored {})", key, entry.stored_at);
        }
        Ok(entry.map(|e| e.value))
    }

    /// Read from the entry's envelope; unreadable entries have no time.
    fn stored_at(&self, key: &str) -> Option<SystemTime> {
        let entry = self.read_entry(key).ok()??;
        DateTime::parse_from_rfc3339(&entry.stored_at)
            .ok()
            .map(SystemTime::from)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;

        let entry = CacheEntry {
            stored_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            value,
        };
        let path = self.entry_path(key);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, serde_json::to_vec(&entry)?)?;
        fs::rename(&tmp, &path)?;
        debug!("Wrote cache entry '{}' to {}", key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_entry_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCacheStore::new(dir.path());
        assert!(store.get("arkhamdbCardList").unwrap().is_none());
        assert!(store.stored_at("arkhamdbCardList").is_none());
    }

    #[test]
    fn test_round_trip_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCacheStore::new(dir.path().join("nested").join("cache"));

        store.set("howBazaarItemList", json!([{"id": "a"}])).unwrap();

        assert_eq!(
            store.get("howBazaarItemList").unwrap(),
            Some(json!([{"id": "a"}]))
        );
        let stored_at = store.stored_at("howBazaarItemList").unwrap();
        let age = SystemTime::now().duration_since(stored_at).unwrap_or_default();
        assert!(age.as_secs() < 60);
        assert!(store.dir().join("howBazaarItemList.json").exists());
    }

    #[test]
    fn test_set_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCacheStore::new(dir.path());

        store.set("list", json!([1])).unwrap();
        store.set("list", json!([])).unwrap();

        assert_eq!(store.get("list").unwrap(), Some(json!([])));
        assert!(!dir.path().join("list.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_entry_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("list.json"), "{ not json").unwrap();
        let store = FileCacheStore::new(dir.path());

        assert!(matches!(store.get("list"), Err(CacheError::Corrupt(_))));
    }

    #[test]
    fn test_stored_at_reads_envelope() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("list.json"),
            r#"{"stored_at": "2026-10-18T20:03:00.000Z", "value": []}"#,
        )
        .unwrap();
        let store = FileCacheStore::new(dir.path());

        let expected: SystemTime = DateTime::parse_from_rfc3339("2026-10-18T20:03:00Z")
            .unwrap()
            .into();
        assert_eq!(store.stored_at("list"), Some(expected));
    }

    #[test]
    fn test_keys_are_sanitized() {
        let store = FileCacheStore::new("/cache");
        assert_eq!(
            store.entry_path("../etc/passwd"),
            PathBuf::from("/cache/___etc_passwd.json")
        );
    }
}
