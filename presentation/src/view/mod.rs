//! Rendering catalog records into the host-neutral view model.
//!
//! - [`card_list`]: ArkhamDB card rows
//! - [`item_list`]: HowBazaar item rows with inline panes
//! - [`item_detail`]: rich and raw item detail views
//! - [`search`]: fuzzy filtering of rows
//! - [`icons`]: the class icon table

pub mod card_list;
pub mod icons;
pub mod item_detail;
pub mod item_list;
pub mod model;
pub mod search;

use catalog_application::CatalogSession;
use catalog_domain::Catalog;
use chrono::{DateTime, Utc};
use model::{ListRow, ListView};
use std::time::SystemTime;

/// Title used for records without a display name.
pub const NO_NAME: &str = "No name";

/// Cache time as shown in the stale banner.
pub(crate) fn format_cached_at(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Build a list view from a session's current state.
pub(crate) fn list_view<C, F>(
    session: &CatalogSession<C>,
    title: &str,
    is_showing_detail: bool,
    render_rows: F,
) -> ListView
where
    C: Catalog,
    F: FnOnce(&[C::Record]) -> Vec<ListRow>,
{
    let rows = session.records().map(render_rows).unwrap_or_default();
    let mut view = ListView::new(title, rows);
    view.is_loading = session.is_loading();
    view.is_stale = session.is_stale();
    view.stale_since = session.stale_since().map(format_cached_at);
    view.is_showing_detail = is_showing_detail;
    view.failure = session.error().map(ToString::to_string);
    view
}
