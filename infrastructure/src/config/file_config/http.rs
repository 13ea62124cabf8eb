//! HTTP client configuration from TOML (`[http]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw HTTP configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Request timeout in seconds (`None` = client default, no timeout)
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for FileHttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: concat!("catalog-browser/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FileHttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
