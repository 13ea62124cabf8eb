//! Cache configuration from TOML (`[cache]` and `[catalog]` sections)

use catalog_application::LoadPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Keep the last loaded list between runs
    pub enabled: bool,
    /// Cache directory (`None` = platform cache dir)
    pub dir: Option<PathBuf>,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
        }
    }
}

impl FileCacheConfig {
    /// Directory the file cache should use, if one can be determined.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| dirs::cache_dir().map(|d| d.join("catalog-browser")))
    }
}

/// Raw load-behavior configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Treat a zero-record catalog as an error
    pub require_records: bool,
}

impl FileCatalogConfig {
    pub fn to_policy(&self) -> LoadPolicy {
        LoadPolicy {
            require_records: self.require_records,
        }
    }
}
