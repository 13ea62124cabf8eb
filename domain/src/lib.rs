//! Domain layer for catalog-browser
//!
//! This crate contains the catalog entities, the key mapper, and the load
//! state model. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! A catalog is a remote, read-only list of records fetched in one GET:
//!
//! - **Cards**: ArkhamDB cards, renamed through a static key map
//! - **Items**: HowBazaar items, decoded as-is from a `data` envelope
//!
//! ## Load state
//!
//! Each command instance moves through `NotStarted → Loading → Loaded | Failed`.

pub mod card;
pub mod catalog;
pub mod config;
pub mod core;
pub mod item;

// Re-export commonly used types
pub use card::{
    entities::Card,
    faction::Faction,
    key_map::{ARKHAMDB_CARD_KEYS, KeyMap, map_record, map_records},
};
pub use catalog::{
    endpoint::Endpoint,
    kind::{CardCatalog, Catalog, ItemCatalog},
    load_state::LoadState,
};
pub use config::OutputFormat;
pub use core::error::CatalogError;
pub use item::entities::{CombatEncounter, Enchantment, Item, Quest, QuestEntry, Tier};
