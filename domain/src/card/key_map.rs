//! Field renaming for raw catalog records.
//!
//! A [`KeyMap`] is a fixed table from API field names to display field
//! names. Mapping a record keeps only the fields the table knows about,
//! under their new names; everything else is dropped.

use serde_json::{Map, Value};
use tracing::trace;

/// A static source-name → target-name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    entries: &'static [(&'static str, &'static str)],
}

/// ArkhamDB card fields to card display fields.
pub const ARKHAMDB_CARD_KEYS: KeyMap = KeyMap::new(&[
    ("code", "code"),
    ("real_name", "name"),
    ("faction_name", "investigator_class"),
    ("type_name", "type"),
    ("real_traits", "traits"),
    ("url", "url"),
]);

impl KeyMap {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Target name for a source field, if the table maps it.
    pub fn target_for(&self, source: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(from, _)| *from == source)
            .map(|(_, to)| *to)
    }

    /// All target names, in table order.
    pub fn targets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, to)| *to)
    }
}

/// Rename the keys of one record. Unmapped fields are dropped.
pub fn map_record(record: &Map<String, Value>, keys: &KeyMap) -> Map<String, Value> {
    let mut mapped = Map::new();
    for (source, value) in record {
        match keys.target_for(source) {
            Some(target) => {
                mapped.insert(target.to_string(), value.clone());
            }
            None => trace!("Dropping unmapped field '{}'", source),
        }
    }
    mapped
}

/// Rename the keys of every record, preserving record order.
pub fn map_records(records: &[Map<String, Value>], keys: &KeyMap) -> Vec<Map<String, Value>> {
    records.iter().map(|record| map_record(record, keys)).collect()
}
