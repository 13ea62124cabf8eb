//! Host-neutral view model.
//!
//! Renderers turn catalog records into these types; a host (the console
//! host in [`crate::output`]) decides how they look. Everything is
//! `Serialize` so `--format json` can emit the view as-is.

use serde::Serialize;

/// How an icon image is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMask {
    Circle,
}

/// An image asset shown next to a row title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub source: String,
    pub mask: ImageMask,
}

/// A sub-view a row can push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewTarget {
    ItemDetail { id: String },
    ItemJson { id: String },
}

/// Something the user can do with a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    OpenUrl { title: String, url: String },
    CopyToClipboard { title: String, content: String },
    Push { title: String, target: ViewTarget },
}

impl Action {
    pub fn open_url(title: impl Into<String>, url: impl Into<String>) -> Self {
        Action::OpenUrl {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn copy(title: impl Into<String>, content: impl Into<String>) -> Self {
        Action::CopyToClipboard {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn push(title: impl Into<String>, target: ViewTarget) -> Self {
        Action::Push {
            title: title.into(),
            target,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Action::OpenUrl { title, .. }
            | Action::CopyToClipboard { title, .. }
            | Action::Push { title, .. } => title,
        }
    }
}

/// One line of a metadata panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetadataEntry {
    Label { title: String, text: String },
    TagList { title: String, tags: Vec<String> },
    Separator,
}

/// Structured fields shown beside a markdown body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub entries: Vec<MetadataEntry>,
}

impl Metadata {
    pub fn label(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.push(MetadataEntry::Label {
            title: title.into(),
            text: text.into(),
        });
        self
    }

    pub fn tags(mut self, title: impl Into<String>, tags: &[String]) -> Self {
        self.entries.push(MetadataEntry::TagList {
            title: title.into(),
            tags: tags.to_vec(),
        });
        self
    }

    pub fn separator(mut self) -> Self {
        self.entries.push(MetadataEntry::Separator);
        self
    }
}

/// A markdown document with an optional metadata panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// One selectable row of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    /// Unique row key (the record's natural identifier)
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub keywords: Vec<String>,
    pub actions: Vec<Action>,
    /// Inline detail pane, rendered with the list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailView>,
}

/// A searchable list of rows plus its load status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub title: String,
    pub rows: Vec<ListRow>,
    /// Show a loading indicator (alongside any rows)
    pub is_loading: bool,
    /// Rows come from the cache of a previous run
    pub is_stale: bool,
    /// When the stale rows were cached, e.g. `2026-10-18 20:03 UTC`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_since: Option<String>,
    /// Rows carry inline detail panes
    pub is_showing_detail: bool,
    /// Load failure to surface instead of spinning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl ListView {
    pub fn new(title: impl Into<String>, rows: Vec<ListRow>) -> Self {
        Self {
            title: title.into(),
            rows,
            is_loading: false,
            is_stale: false,
            stale_since: None,
            is_showing_detail: false,
            failure: None,
        }
    }

    pub fn row(&self, id: &str) -> Option<&ListRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}
