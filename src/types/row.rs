use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::{Align, SortValue};

/// A cell after projection: original text, markup-free text and optional sort key.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedCell {
    pub text: String,
    #[serde(rename = "withoutHTML")]
    pub without_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_value: Option<SortValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

/// An item projected onto the visible headers.
///
/// `cells` always has an entry for every visible header. `extra` carries the
/// remaining raw item fields for template consumers.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct ProjectedRow {
    #[serde(flatten)]
    pub cells: BTreeMap<String, ProjectedCell>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectedRow {
    #[must_use]
    pub fn cell(&self, id: &str) -> Option<&ProjectedCell> {
        self.cells.get(id)
    }

    /// Markup-free text of a column, empty when the column is not projected.
    #[must_use]
    pub fn plain_text(&self, id: &str) -> &str {
        self.cells.get(id).map_or("", |c| c.without_html.as_str())
    }
}
