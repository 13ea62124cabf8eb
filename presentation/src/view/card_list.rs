//! Card list rendering

use super::icons::class_icon;
use super::model::{Action, ListRow, ListView};
use super::{NO_NAME, list_view};
use catalog_application::CatalogSession;
use catalog_domain::{Card, CardCatalog};

/// Default prefix of the per-card API link.
pub const DEFAULT_CARD_LINK_BASE: &str = "https://arkhamdb.com/api/public/card/";

/// Render one card as a list row.
///
/// Actions: open the card page (only when the card has a URL), copy the
/// card code, open the per-card API link.
pub fn card_row(card: &Card, card_link_base: &str) -> ListRow {
    let mut actions = Vec::with_capacity(3);
    if let Some(url) = &card.url {
        actions.push(Action::open_url("Open in ArkhamDB", url));
    }
    actions.push(Action::copy("Copy card code to clipboard", &card.code));
    actions.push(Action::open_url(
        "Open ArkhamDB API link",
        format!("{}{}", card_link_base, card.code),
    ));

    ListRow {
        id: card.code.clone(),
        title: card.name.clone().unwrap_or_else(|| NO_NAME.to_string()),
        subtitle: card.card_type.clone(),
        icon: class_icon(card.investigator_class.as_deref()),
        keywords: card.keywords(),
        actions,
        detail: None,
    }
}

pub fn card_rows(cards: &[Card], card_link_base: &str) -> Vec<ListRow> {
    cards.iter().map(|card| card_row(card, card_link_base)).collect()
}

/// Render the whole card list for a session.
pub fn card_list_view(session: &CatalogSession<CardCatalog>, card_link_base: &str) -> ListView {
    list_view(session, "ArkhamDB cards", false, |cards| {
        card_rows(cards, card_link_base)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::model::{ImageMask, Icon};
    use std::collections::HashSet;

    fn roland() -> Card {
        Card::new("01001")
            .with_name("Roland Banks")
            .with_class("Guardian")
            .with_type("Investigator")
            .with_traits("Agency")
            .with_url("https://x")
    }

    #[test]
    fn test_roland_row() {
        let row = card_row(&roland(), DEFAULT_CARD_LINK_BASE);

        assert_eq!(row.id, "01001");
        assert_eq!(row.title, "Roland Banks");
        assert_eq!(row.subtitle.as_deref(), Some("Investigator"));
        assert_eq!(
            row.icon,
            Some(Icon {
                source: "class/guardian.png".to_string(),
                mask: ImageMask::Circle,
            })
        );
        assert_eq!(
            row.actions,
            vec![
                Action::open_url("Open in ArkhamDB", "https://x"),
                Action::copy("Copy card code to clipboard", "01001"),
                Action::open_url(
                    "Open ArkhamDB API link",
                    "https://arkhamdb.com/api/public/card/01001"
                ),
            ]
        );
        assert_eq!(row.keywords, vec!["01001", "Guardian", "Investigator", "Agency"]);
    }

    #[test]
    fn test_missing_name_falls_back() {
        let row = card_row(&Card::new("01002").with_type("Asset"), DEFAULT_CARD_LINK_BASE);
        assert_eq!(row.title, "No name");
    }

    #[test]
    fn test_unknown_class_renders_without_icon() {
        let row = card_row(
            &Card::new("01088").with_name("Emergency Cache").with_class("Neutral"),
            DEFAULT_CARD_LINK_BASE,
        );
        assert_eq!(row.icon, None);
        assert_eq!(row.title, "Emergency Cache");
    }

    #[test]
    fn test_card_without_url_has_no_open_action() {
        let row = card_row(&Card::new("01003"), DEFAULT_CARD_LINK_BASE);
        let titles: Vec<&str> = row.actions.iter().map(Action::title).collect();
        assert_eq!(
            titles,
            vec!["Copy card code to clipboard", "Open ArkhamDB API link"]
        );
    }

    #[test]
    fn test_unique_codes_give_unique_row_keys() {
        let cards: Vec<Card> = (1..=50).map(|n| Card::new(format!("{:05}", n))).collect();
        let rows = card_rows(&cards, DEFAULT_CARD_LINK_BASE);
        let ids: HashSet<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), cards.len());
    }
}
