//! Item list rendering

use super::item_detail::item_pane;
use super::model::{Action, ListRow, ListView, ViewTarget};
use super::{NO_NAME, list_view};
use catalog_application::CatalogSession;
use catalog_domain::{Item, ItemCatalog};

/// Render one item as a list row with its inline detail pane.
pub fn item_row(item: &Item) -> ListRow {
    ListRow {
        id: item.id.clone(),
        title: item.name.clone().unwrap_or_else(|| NO_NAME.to_string()),
        subtitle: None,
        icon: None,
        keywords: item.keywords(),
        actions: vec![
            Action::push(
                "Show Details",
                ViewTarget::ItemDetail {
                    id: item.id.clone(),
                },
            ),
            Action::push(
                "Show JSON",
                ViewTarget::ItemJson {
                    id: item.id.clone(),
                },
            ),
        ],
        detail: Some(item_pane(item)),
    }
}

pub fn item_rows(items: &[Item]) -> Vec<ListRow> {
    items.iter().map(item_row).collect()
}

/// Render the whole item list for a session.
pub fn item_list_view(session: &CatalogSession<ItemCatalog>) -> ListView {
    list_view(session, "HowBazaar items", true, item_rows)
}
