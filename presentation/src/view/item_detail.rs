//! Item detail rendering: inline pane, rich detail, raw JSON.

use super::model::{DetailView, Metadata, ViewTarget};
use catalog_domain::Item;

/// Unified tooltips as one markdown block, paragraphs separated by blank lines.
pub fn tooltip_markdown(item: &Item) -> String {
    item.unified_tooltips.join("\n\n")
}

/// Markdown for the rich detail view: unified tooltips, then one `##`
/// section per enchantment in input order.
pub fn item_markdown(item: &Item) -> String {
    let enchantments = item
        .enchantments
        .iter()
        .map(|e| format!("## {}\n\n{}", e.kind, e.tooltips.join("\n\n")))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n\n{}", tooltip_markdown(item), enchantments)
}

/// Metadata panel. The summary variant (list pane) shows size, starting
/// tier, tags and heroes; the full variant (detail view) adds hidden and
/// custom tags, and combat encounters when there are any.
pub fn item_metadata(item: &Item, full: bool) -> Metadata {
    let mut metadata = Metadata::default()
        .label("Size", &item.size)
        .label("Starting Tier", &item.starting_tier)
        .tags("Tags", &item.tags)
        .tags("Heroes", &item.heroes);

    if full {
        metadata = metadata
            .separator()
            .tags("Hidden Tags", &item.hidden_tags)
            .tags("Custom Tags", &item.custom_tags);

        if !item.combat_encounters.is_empty() {
            let encounters: Vec<String> = item
                .combat_encounters
                .iter()
                .map(|e| e.card_name.clone())
                .collect();
            metadata = metadata.tags("Combat Encounters", &encounters);
        }
    }
    metadata
}

/// Inline pane shown with each row of the item list.
pub fn item_pane(item: &Item) -> DetailView {
    DetailView {
        markdown: tooltip_markdown(item),
        metadata: Some(item_metadata(item, false)),
    }
}

/// The "Show Details" view.
pub fn item_detail_view(item: &Item) -> DetailView {
    DetailView {
        markdown: item_markdown(item),
        metadata: Some(item_metadata(item, true)),
    }
}

/// The "Show JSON" view: the record exactly as the API sent it,
/// pretty-printed in a fence.
pub fn item_json_view(item: &Item) -> DetailView {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
    DetailView {
        markdown: format!("```json\n{}\n```\n", json),
        metadata: None,
    }
}

/// Resolve a pushed view against the loaded items.
pub fn resolve_item_view(target: &ViewTarget, items: &[Item]) -> Option<DetailView> {
    let find = |id: &str| items.iter().find(|item| item.id == id);
    match target {
        ViewTarget::ItemDetail { id } => find(id).map(item_detail_view),
        ViewTarget::ItemJson { id } => find(id).map(item_json_view),
    }
}
