use serde::{Deserialize, Serialize};

use crate::markup::strip_tags;

/// Horizontal alignment of a header or cell.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Per-column text filter setting.
///
/// In JSON this is either a string (the input placeholder) or a boolean,
/// where `false` removes the filter input for the column.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TextFilterSetting {
    Enabled(bool),
    Placeholder(String),
}

/// Column descriptor
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Unique key, also used as the cell key in items
    pub id: String,
    /// Label, may contain markup
    #[serde(default)]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub align: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text_filter_string: Option<TextFilterSetting>,
}

impl Header {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            align: None,
            text_filter_string: None,
        }
    }

    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn with_filter_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.text_filter_string = Some(TextFilterSetting::Placeholder(placeholder.into()));
        self
    }

    #[must_use]
    pub fn without_text_filter(mut self) -> Self {
        self.text_filter_string = Some(TextFilterSetting::Enabled(false));
        self
    }

    /// Whether this column shows a text filter input.
    #[must_use]
    pub fn text_filter_enabled(&self) -> bool {
        !matches!(self.text_filter_string, Some(TextFilterSetting::Enabled(false)))
    }

    /// Placeholder for the filter input, `"Search <text>"` unless overridden.
    #[must_use]
    pub fn filter_placeholder(&self) -> String {
        match &self.text_filter_string {
            Some(TextFilterSetting::Placeholder(p)) if !p.is_empty() => p.clone(),
            _ => format!("Search {}", self.text),
        }
    }

    /// Header label with markup removed, used as the tooltip.
    #[must_use]
    pub fn title(&self) -> String {
        strip_tags(&self.text).into_owned()
    }

    #[must_use]
    pub fn effective_align(&self) -> Align {
        self.align.unwrap_or_default()
    }
}
