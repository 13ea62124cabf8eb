//! ArkhamDB cards.
//!
//! - [`entities::Card`]: a card after key mapping
//! - [`key_map`]: the static API-field → display-field table
//! - [`faction::Faction`]: the closed set of investigator classes

pub mod entities;
pub mod faction;
pub mod key_map;
