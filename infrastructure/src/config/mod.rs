//! Configuration file loading for catalog-browser
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./catalog.toml` or `./.catalog.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/catalog-browser/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileCacheConfig, FileCardsConfig, FileCatalogConfig, FileConfig,
    FileHttpConfig, FileItemsConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
