use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FOOTER_COUNT: &str = "footerCount";
pub const FILTERED_FOOTER_COUNT: &str = "filteredFooterCount";
pub const COLUMN_SELECTION_HELP: &str = "columnSelectionHelp";
pub const COLUMN_SELECTION_CANCEL_BUTTON: &str = "columnSelectionCancelButton";
pub const COLUMN_SELECTION_SAVE_BUTTON: &str = "columnSelectionSaveButton";
pub const COLUMN_SELECTION_DISPLAYED_BUTTON: &str = "columnSelectionDisplayedButton";
pub const COLUMN_SELECTION_DISPLAY_BUTTON: &str = "columnSelectionDisplayButton";

/// UI strings keyed by name. Supplied maps are merged over the defaults so a
/// caller can override a single template.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct TableText {
    entries: BTreeMap<String, String>,
}

impl Default for TableText {
    fn default() -> Self {
        let entries = [
            (FOOTER_COUNT, "%itemCount% items"),
            (FILTERED_FOOTER_COUNT, "%filteredItemCount%/%itemCount% items"),
            (
                COLUMN_SELECTION_HELP,
                "Pick the columns you want to be displayed.",
            ),
            (COLUMN_SELECTION_CANCEL_BUTTON, "Cancel"),
            (COLUMN_SELECTION_SAVE_BUTTON, "Save"),
            (COLUMN_SELECTION_DISPLAYED_BUTTON, "Displayed"),
            (COLUMN_SELECTION_DISPLAY_BUTTON, "Display"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { entries }
    }
}

impl From<BTreeMap<String, String>> for TableText {
    fn from(overrides: BTreeMap<String, String>) -> Self {
        let mut text = Self::default();
        text.entries.extend(overrides);
        text
    }
}

impl From<TableText> for BTreeMap<String, String> {
    fn from(text: TableText) -> Self {
        text.entries
    }
}

impl TableText {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
