//! Table options supplied by the embedding application.

use serde::{Deserialize, Serialize};

use crate::types::TableText;

pub const DEFAULT_COOKIE_IDENTIFIER: &str = "vVueTable-cookie-hide";
pub const AUTO_HEIGHT: &str = "auto";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOptions {
    /// Clicking a header sorts by that column
    pub sort: bool,
    /// Show per-column text filter inputs
    pub text_filter: bool,
    /// CSS max-height of the body, `"auto"` for no scrolling
    pub height: String,
    /// Namespace prefix of the persisted keys
    pub cookie_identifier: String,
    /// Render cells as plain text instead of markup
    pub disable_html: bool,
    /// Columns shown when nothing has been persisted yet; empty shows all
    pub init_headers: Vec<String>,
    pub enable_footer: bool,
    pub enable_headers: bool,
    pub text: TableText,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            sort: true,
            text_filter: false,
            height: AUTO_HEIGHT.to_string(),
            cookie_identifier: DEFAULT_COOKIE_IDENTIFIER.to_string(),
            disable_html: false,
            init_headers: Vec::new(),
            enable_footer: false,
            enable_headers: true,
            text: TableText::default(),
        }
    }
}

impl TableOptions {
    /// Parse options from JSON, missing fields take their defaults.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn has_fixed_height(&self) -> bool {
        self.height != AUTO_HEIGHT
    }
}
