//! Output format value object

use serde::{Deserialize, Serialize};

/// How a rendered catalog view is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable rows and detail panes (default)
    #[default]
    List,
    /// The view model as JSON, for piping into other tools
    Json,
}
