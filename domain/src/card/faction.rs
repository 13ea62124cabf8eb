//! Investigator classes (ArkhamDB "factions").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The player classes that have a class icon.
///
/// Parsing is case-insensitive. Anything outside this set (`Neutral`,
/// `Mythos`, future classes) is not an error for callers: they receive
/// `None` from [`Faction::from_class_name`] and render without an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Guardian,
    Mystic,
    Rogue,
    Seeker,
    Survivor,
}

impl Faction {
    pub const ALL: [Faction; 5] = [
        Faction::Guardian,
        Faction::Mystic,
        Faction::Rogue,
        Faction::Seeker,
        Faction::Survivor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Guardian => "guardian",
            Faction::Mystic => "mystic",
            Faction::Rogue => "rogue",
            Faction::Seeker => "seeker",
            Faction::Survivor => "survivor",
        }
    }

    /// Look up a class name as sent by the API, ignoring case and
    /// surrounding whitespace.
    pub fn from_class_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Faction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "guardian" => Ok(Faction::Guardian),
            "mystic" => Ok(Faction::Mystic),
            "rogue" => Ok(Faction::Rogue),
            "seeker" => Ok(Faction::Seeker),
            "survivor" => Ok(Faction::Survivor),
            other => Err(format!("Unknown investigator class: {}", other)),
        }
    }
}
