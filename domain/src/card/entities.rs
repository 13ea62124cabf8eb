//! Card entity

use super::faction::Faction;
use crate::core::de::null_as_default;
use serde::{Deserialize, Serialize};

/// A card from the ArkhamDB catalog, after key mapping.
///
/// Field names are the *display* names produced by
/// [`ARKHAMDB_CARD_KEYS`](super::key_map::ARKHAMDB_CARD_KEYS), not the API's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// ArkhamDB card code, e.g. `01001`
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investigator_class: Option<String>,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Card {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.investigator_class = Some(class.into());
        self
    }

    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    pub fn with_traits(mut self, traits: impl Into<String>) -> Self {
        self.traits = Some(traits.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The card's class, when it is one of the known factions.
    pub fn faction(&self) -> Option<Faction> {
        self.investigator_class
            .as_deref()
            .and_then(Faction::from_class_name)
    }

    /// Search keywords: code, class, type and traits, skipping absent ones.
    pub fn keywords(&self) -> Vec<String> {
        std::iter::once(Some(self.code.as_str()))
            .chain([
                self.investigator_class.as_deref(),
                self.card_type.as_deref(),
                self.traits.as_deref(),
            ])
            .flatten()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
