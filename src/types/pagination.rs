use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sort direction shown on a header.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Interactive table state: sort column, direction and per-column text filters.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    /// Header id to sort by, empty for source order
    pub sort_by: String,
    pub descending: bool,
    /// Header id -> raw filter input
    pub text_filters: BTreeMap<String, String>,
}

impl Pagination {
    /// Header click: toggles direction on the current column, otherwise
    /// switches to the column in ascending order.
    pub fn sort_column(&mut self, column_id: &str) {
        if self.sort_by == column_id {
            self.descending = !self.descending;
        } else {
            self.sort_by = column_id.to_string();
            self.descending = false;
        }
    }

    #[must_use]
    pub fn is_sorted(&self) -> bool {
        !self.sort_by.is_empty()
    }

    #[must_use]
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        if !self.is_sorted() || self.sort_by != column_id {
            return None;
        }
        Some(if self.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        })
    }

    pub fn set_text_filter(&mut self, column_id: &str, value: impl Into<String>) {
        self.text_filters.insert(column_id.to_string(), value.into());
    }

    #[must_use]
    pub fn text_filter(&self, column_id: &str) -> Option<&str> {
        self.text_filters.get(column_id).map(String::as_str)
    }
}
