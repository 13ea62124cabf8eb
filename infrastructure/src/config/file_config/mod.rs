//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod cache;
mod http;
mod output;
mod sources;

pub use cache::{FileCacheConfig, FileCatalogConfig};
pub use http::FileHttpConfig;
pub use output::FileOutputConfig;
pub use sources::{FileCardsConfig, FileItemsConfig};

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// ArkhamDB card API
    pub cards: FileCardsConfig,
    /// HowBazaar item API
    pub items: FileItemsConfig,
    /// HTTP client settings
    pub http: FileHttpConfig,
    /// Cached-list settings
    pub cache: FileCacheConfig,
    /// Load behavior
    pub catalog: FileCatalogConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// A problem found in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending field, e.g. `cards.base_url`
    pub field: String,
    pub message: String,
}

impl FileConfig {
    /// Validate the configuration, returning every detected issue.
    ///
    /// Issues are warnings: the loader still returns the config and the
    /// request will fail with a network error if a URL is unusable.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, url) in [
            ("cards.base_url", &self.cards.base_url),
            ("cards.card_link_base", &self.cards.card_link_base),
            ("items.base_url", &self.items.base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                issues.push(ConfigIssue {
                    field: field.to_string(),
                    message: format!("{}: '{}' is not an http(s) URL", field, url),
                });
            }
        }

        if self.http.timeout_secs == Some(0) {
            issues.push(ConfigIssue {
                field: "http.timeout_secs".to_string(),
                message: "http.timeout_secs = 0 makes every request time out".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[cards]
include_encounter = true

[items]
base_url = "http://localhost:8080/api"

[http]
timeout_secs = 10

[cache]
enabled = false
dir = "/tmp/catalog-cache"

[catalog]
require_records = true

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.cards.include_encounter);
        assert_eq!(config.cards.base_url, "https://www.arkhamdb.com");
        assert_eq!(config.items.endpoint().url(), "http://localhost:8080/api/items");
        assert_eq!(config.http.timeout_secs, Some(10));
        assert!(!config.cache.enabled);
        assert!(config.catalog.to_policy().require_records);
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[http]
user_agent = "tester"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.http.user_agent, "tester");
        // Defaults should apply
        assert_eq!(config.http.timeout(), None);
        assert!(config.cache.enabled);
        assert!(!config.cards.include_encounter);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_bad_url_and_zero_timeout() {
        let mut config = FileConfig::default();
        config.items.base_url = "ftp://example.com".to_string();
        config.http.timeout_secs = Some(0);

        let fields: Vec<String> = config.validate().into_iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["items.base_url", "http.timeout_secs"]);
    }
}
