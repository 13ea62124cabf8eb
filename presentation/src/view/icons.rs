//! Class icon table.

use super::model::{Icon, ImageMask};
use catalog_domain::Faction;

/// The icon asset for a faction.
pub fn faction_icon(faction: Faction) -> Icon {
    Icon {
        source: format!("class/{}.png", faction.as_str()),
        mask: ImageMask::Circle,
    }
}

/// Icon for a class name as sent by the API.
///
/// Case-insensitive; unknown or absent classes get no icon rather than an
/// error.
pub fn class_icon(class_name: Option<&str>) -> Option<Icon> {
    class_name
        .and_then(Faction::from_class_name)
        .map(faction_icon)
}

/// Reverse lookup used by hosts that tint glyphs instead of drawing images.
pub fn icon_faction(icon: &Icon) -> Option<Faction> {
    Faction::ALL
        .into_iter()
        .find(|faction| faction_icon(*faction).source == icon.source)
}
