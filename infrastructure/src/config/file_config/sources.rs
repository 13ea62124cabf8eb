//! Catalog source configuration from TOML (`[cards]` and `[items]` sections)

use catalog_domain::Endpoint;
use serde::{Deserialize, Serialize};

/// Raw card API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCardsConfig {
    pub base_url: String,
    pub path: String,
    /// Include non-player encounter cards (`encounter=1`)
    pub include_encounter: bool,
    /// Prefix of the per-card API link shown as an action
    pub card_link_base: String,
}

impl Default for FileCardsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.arkhamdb.com".to_string(),
            path: "/api/public/cards".to_string(),
            include_encounter: false,
            card_link_base: "https://arkhamdb.com/api/public/card/".to_string(),
        }
    }
}

impl FileCardsConfig {
    /// Card list endpoint. The encounter flag is always sent explicitly.
    pub fn endpoint(&self, include_encounter: bool) -> Endpoint {
        Endpoint::new(&self.base_url, &self.path)
            .with_query("encounter", if include_encounter { "1" } else { "0" })
    }
}

/// Raw item API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileItemsConfig {
    pub base_url: String,
    pub path: String,
}

impl Default for FileItemsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.howbazaar.gg/api".to_string(),
            path: "/items".to_string(),
        }
    }
}

impl FileItemsConfig {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(&self.base_url, &self.path)
    }
}
