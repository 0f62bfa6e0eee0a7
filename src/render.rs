//! Derived state handed to a renderer.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::{Align, ProjectedRow, SortDirection};

/// Text filter input of a column.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterInput {
    pub placeholder: String,
    pub value: String,
}

/// A visible column as the renderer sees it.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub id: String,
    /// Label, may contain markup
    pub text: String,
    /// Label without markup, for tooltips
    pub title: String,
    pub align: Align,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDirection>,
    /// Present when text filtering is on and the column allows it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterInput>,
}

/// Everything needed to paint the table.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub headers: Vec<HeaderView>,
    pub rows: Vec<ProjectedRow>,
    pub item_count: usize,
    pub filtered_item_count: usize,
    /// Footer line, `None` when the footer is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// All UI strings with counts filled in
    pub text: BTreeMap<String, String>,
    pub enable_headers: bool,
    pub disable_html: bool,
    pub sortable: bool,
    pub scrollable: bool,
    pub max_height: String,
}

impl ViewState {
    /// Tab-separated dump: header titles, then the plain text of each row.
    #[must_use]
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        let titles: Vec<String> = self
            .headers
            .iter()
            .map(|h| escape_cell_value(&h.title))
            .collect();
        out.push_str(&titles.join("\t"));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = self
                .headers
                .iter()
                .map(|h| escape_cell_value(row.plain_text(&h.id)))
                .collect();
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }
        out
    }
}

/// Quote a value for TSV when it contains a tab, newline or quote.
#[must_use]
pub fn escape_cell_value(value: &str) -> String {
    let needs_quoting = value.contains('\t')
        || value.contains('\n')
        || value.contains('\r')
        || value.contains('"');

    if needs_quoting {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

/// Paints a derived view.
pub trait Renderer {
    fn render(&mut self, state: &ViewState);
}

impl<F: FnMut(&ViewState)> Renderer for F {
    fn render(&mut self, state: &ViewState) {
        self(state);
    }
}
