//! Item entity and its nested records.
//!
//! Every modelled field defaults to empty when the API omits it or sends
//! `null`, so partially populated records still decode. A decoded item also
//! keeps the exact JSON object it came from: serializing it writes that
//! object back unchanged, which is what the raw JSON view and the cache see.

use crate::core::de::null_as_default;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tooltips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enchantment {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tooltips: Vec<String>,
}

impl Enchantment {
    pub fn new(kind: impl Into<String>, tooltips: Vec<String>) -> Self {
        Self {
            kind: kind.into(),
            tooltips,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tooltips: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reward_tooltips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<QuestEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatEncounter {
    #[serde(default, deserialize_with = "null_as_default")]
    pub card_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub card_name: String,
}

/// An item from the HowBazaar catalog.
///
/// The typed fields are read-only views of [`Item::raw`] once decoded;
/// items built in code (no raw object) serialize their typed fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starting_tier: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tiers: Vec<Tier>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hidden_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heroes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enchantments: Vec<Enchantment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quests: Vec<Quest>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unified_tooltips: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub combat_encounters: Vec<CombatEncounter>,
    #[serde(skip)]
    raw: Value,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// The JSON object this item was decoded from, if any.
    pub fn raw(&self) -> Option<&Value> {
        (!self.raw.is_null()).then_some(&self.raw)
    }

    /// Search keywords: size, tags, then hidden tags.
    pub fn keywords(&self) -> Vec<String> {
        std::iter::once(&self.size)
            .chain(&self.tags)
            .chain(&self.hidden_tags)
            .filter(|s| !s.is_empty())
            .cloned()
            .collect()
    }
}

impl Serialize for Item {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.raw() {
            Some(raw) => raw.serialize(serializer),
            None => Item::serialize(self, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let mut item = Item::deserialize(&raw).map_err(D::Error::custom)?;
        item.raw = raw;
        Ok(item)
    }
}
