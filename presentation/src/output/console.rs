//! Console host: prints list and detail views to the terminal

use crate::view::icons::icon_faction;
use crate::view::model::{Action, DetailView, ListRow, ListView, Metadata, MetadataEntry};
use catalog_domain::Faction;
use catalog_domain::core::string::{single_line, truncate};
use colored::{ColoredString, Colorize};

/// Width of the tooltip preview under each row when panes are collapsed.
const PREVIEW_CHARS: usize = 72;

/// Formats views for console display
pub struct ConsoleHost {
    /// Print each row's inline pane in full instead of a one-line preview
    pub expand_details: bool,
}

impl ConsoleHost {
    pub fn new() -> Self {
        Self {
            expand_details: false,
        }
    }

    pub fn with_expanded_details(mut self, expand: bool) -> Self {
        self.expand_details = expand;
        self
    }

    /// Format a list view: header, status, rows.
    pub fn format_list(&self, view: &ListView) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("{} ({})", view.title, view.rows.len())));
        output.push('\n');

        if let Some(failure) = &view.failure {
            output.push_str(&format!("{} {}\n", "x".red().bold(), failure.red()));
        }
        if view.is_loading {
            output.push_str(&format!("{}\n", "Loading...".dimmed()));
        }
        if view.is_stale {
            let banner = match &view.stale_since {
                Some(since) => format!("Showing results cached by a previous run ({})", since),
                None => "Showing results cached by a previous run".to_string(),
            };
            output.push_str(&format!("{}\n", banner.yellow()));
        }
        if view.rows.is_empty() && !view.is_loading && view.failure.is_none() {
            output.push_str(&format!("{}\n", "No results".dimmed()));
        }

        for row in &view.rows {
            output.push_str(&self.format_row(row, view.is_showing_detail));
        }

        output
    }

    fn format_row(&self, row: &ListRow, with_detail: bool) -> String {
        let mut line = format!("{} {}", Self::icon_glyph(row), row.title.bold());
        if let Some(subtitle) = &row.subtitle {
            line.push_str(&format!("  {}", subtitle.cyan()));
        }
        line.push_str(&format!("  {}\n", format!("[{}]", row.id).dimmed()));

        if with_detail && let Some(detail) = &row.detail {
            if self.expand_details {
                line.push_str(&Self::indent(&Self::format_detail(detail), "    "));
                line.push('\n');
            } else if !detail.markdown.is_empty() {
                let preview = truncate(&single_line(&detail.markdown), PREVIEW_CHARS);
                line.push_str(&format!("    {}\n", preview.dimmed()));
            }
        }
        line
    }

    /// Numbered action list for one row.
    pub fn format_actions(row: &ListRow) -> String {
        let mut output = format!("{} {}\n", "Actions for".cyan().bold(), row.title.bold());
        for (i, action) in row.actions.iter().enumerate() {
            let hint = match action {
                Action::OpenUrl { url, .. } => url.clone(),
                Action::CopyToClipboard { content, .. } => format!("copy '{}'", content),
                Action::Push { .. } => "open view".to_string(),
            };
            output.push_str(&format!(
                "  {}. {}  {}\n",
                i + 1,
                action.title(),
                hint.dimmed()
            ));
        }
        output
    }

    /// Format a detail view: markdown body, then the metadata panel.
    pub fn format_detail(detail: &DetailView) -> String {
        let mut output = Self::format_markdown(&detail.markdown);
        if let Some(metadata) = &detail.metadata {
            output.push_str(&format!("\n{}\n", "-".repeat(40)));
            output.push_str(&Self::format_metadata(metadata));
        }
        output
    }

    /// Format as JSON
    pub fn format_json<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_markdown(markdown: &str) -> String {
        let mut output = String::new();
        let mut in_fence = false;
        for line in markdown.lines() {
            if line.starts_with("```") {
                in_fence = !in_fence;
                output.push_str(&format!("{}\n", line.dimmed()));
            } else if in_fence {
                output.push_str(line);
                output.push('\n');
            } else if let Some(heading) = line.strip_prefix("## ") {
                output.push_str(&format!("{}\n", heading.yellow().bold()));
            } else {
                output.push_str(line);
                output.push('\n');
            }
        }
        output
    }

    fn format_metadata(metadata: &Metadata) -> String {
        let mut output = String::new();
        for entry in &metadata.entries {
            match entry {
                MetadataEntry::Label { title, text } => {
                    output.push_str(&format!("{} {}\n", format!("{}:", title).cyan(), text));
                }
                MetadataEntry::TagList { title, tags } => {
                    let tags = if tags.is_empty() {
                        "-".dimmed().to_string()
                    } else {
                        tags.iter()
                            .map(|t| format!("[{}]", t))
                            .collect::<Vec<_>>()
                            .join(" ")
                    };
                    output.push_str(&format!("{} {}\n", format!("{}:", title).cyan(), tags));
                }
                MetadataEntry::Separator => {
                    output.push_str(&format!("{}\n", "-".repeat(20).dimmed()));
                }
            }
        }
        output
    }

    fn icon_glyph(row: &ListRow) -> ColoredString {
        match row.icon.as_ref().and_then(icon_faction) {
            Some(Faction::Guardian) => "●".blue(),
            Some(Faction::Seeker) => "●".yellow(),
            Some(Faction::Rogue) => "●".green(),
            Some(Faction::Mystic) => "●".magenta(),
            Some(Faction::Survivor) => "●".red(),
            None => "-".dimmed(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ConsoleHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::card_list::{DEFAULT_CARD_LINK_BASE, card_row};
    use crate::view::item_detail::item_detail_view;
    use crate::view::item_list::item_row;
    use catalog_domain::{Card, Enchantment, Item};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_list_shows_rows_and_count() {
        plain();
        let row = card_row(
            &Card::new("01001")
                .with_name("Roland Banks")
                .with_class("Guardian")
                .with_type("Investigator"),
            DEFAULT_CARD_LINK_BASE,
        );
        let view = ListView::new("ArkhamDB cards", vec![row]);

        let output = ConsoleHost::new().format_list(&view);

        assert!(output.contains("ArkhamDB cards (1)"));
        assert!(output.contains("Roland Banks  Investigator  [01001]"));
        assert!(!output.contains("Loading..."));
    }

    #[test]
    fn test_failure_and_empty_states() {
        plain();
        let mut view = ListView::new("HowBazaar items", Vec::new());
        assert!(ConsoleHost::new().format_list(&view).contains("No results"));

        view.failure = Some("Network error: offline".to_string());
        let output = ConsoleHost::new().format_list(&view);
        assert!(output.contains("x Network error: offline"));
        assert!(!output.contains("No results"));

        view.failure = None;
        view.is_loading = true;
        assert!(ConsoleHost::new().format_list(&view).contains("Loading..."));
    }

    #[test]
    fn test_stale_banner_shows_cache_time() {
        plain();
        let mut view = ListView::new("ArkhamDB cards", Vec::new());
        view.is_stale = true;
        assert!(
            ConsoleHost::new()
                .format_list(&view)
                .contains("Showing results cached by a previous run\n")
        );

        view.stale_since = Some("2026-10-18 20:03 UTC".to_string());
        assert!(
            ConsoleHost::new()
                .format_list(&view)
                .contains("Showing results cached by a previous run (2026-10-18 20:03 UTC)")
        );
    }

    #[test]
    fn test_item_rows_show_preview_or_full_pane() {
        plain();
        let mut item = Item::new("a1", "Pigomorph");
        item.size = "Medium".to_string();
        item.unified_tooltips = vec!["Deal 10 damage".to_string()];
        let mut view = ListView::new("HowBazaar items", vec![item_row(&item)]);
        view.is_showing_detail = true;

        let collapsed = ConsoleHost::new().format_list(&view);
        assert!(collapsed.contains("    Deal 10 damage"));
        assert!(!collapsed.contains("Size:"));

        let expanded = ConsoleHost::new()
            .with_expanded_details(true)
            .format_list(&view);
        assert!(expanded.contains("    Size: Medium"));
    }

    #[test]
    fn test_format_detail() {
        plain();
        let mut item = Item::new("a1", "Pigomorph");
        item.tags = vec!["Weapon".to_string()];
        item.unified_tooltips = vec!["Deal 10 damage".to_string()];
        item.enchantments = vec![Enchantment::new("Fiery", vec!["Burn 5".to_string()])];

        let output = ConsoleHost::format_detail(&item_detail_view(&item));

        assert!(output.contains("Deal 10 damage\n\nFiery\n\nBurn 5\n"));
        assert!(output.contains("Tags: [Weapon]"));
        assert!(output.contains("Hidden Tags: -"));
    }

    #[test]
    fn test_format_actions_numbers_each_action() {
        plain();
        let row = card_row(&Card::new("01001").with_url("https://x"), DEFAULT_CARD_LINK_BASE);
        let output = ConsoleHost::format_actions(&row);

        assert!(output.contains("1. Open in ArkhamDB  https://x"));
        assert!(output.contains("2. Copy card code to clipboard  copy '01001'"));
        assert!(output.contains("3. Open ArkhamDB API link"));
    }
}
