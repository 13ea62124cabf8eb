//! Presentation layer for catalog-browser
//!
//! This crate contains the host-neutral view model and the renderers that
//! fill it, the console host, progress reporters, action runner and CLI
//! definitions.

pub mod actions;
pub mod cli;
pub mod output;
pub mod progress;
pub mod view;

// Re-export commonly used types
pub use actions::{ActionError, ActionOutcome, SystemOpener, UrlOpener, run_action};
pub use cli::commands::{CardsArgs, Cli, Command, ItemsArgs, OutputFormat};
pub use output::console::ConsoleHost;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use view::card_list::{DEFAULT_CARD_LINK_BASE, card_list_view, card_row, card_rows};
pub use view::item_detail::{item_detail_view, item_json_view, resolve_item_view};
pub use view::item_list::{item_list_view, item_row, item_rows};
pub use view::model::{
    Action, DetailView, Icon, ImageMask, ListRow, ListView, Metadata, MetadataEntry, ViewTarget,
};
pub use view::search::filter_rows;
