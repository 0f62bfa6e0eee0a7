use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Align;

/// Explicit sort key for a cell. Numbers and strings are accepted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    /// `0`, `NaN` and `""` count as "no sort value".
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => n.abs() > 0.0,
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl From<f64> for SortValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for SortValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for SortValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A single cell of an item, keyed by header id
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Display text, may contain markup
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sort_value: Option<SortValue>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub align: Option<Align>,
}

impl Cell {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sort_value: None,
            align: None,
        }
    }

    #[must_use]
    pub fn with_sort_value(mut self, value: impl Into<SortValue>) -> Self {
        self.sort_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Read a cell from raw item data.
    ///
    /// Requires an object with a string `text`. A `sortValue` that is neither
    /// a number nor a string, or an unknown `align`, is dropped rather than
    /// rejecting the cell.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let text = value.get("text")?.as_str()?;
        let sort_value = match value.get("sortValue") {
            Some(Value::Number(n)) => n.as_f64().map(SortValue::Number),
            Some(Value::String(s)) => Some(SortValue::Text(s.clone())),
            _ => None,
        };
        let align = value
            .get("align")
            .and_then(|a| Align::deserialize(a).ok());
        Some(Self {
            text: text.to_string(),
            sort_value,
            align,
        })
    }
}

/// One data row as supplied by the embedding application.
///
/// The raw fields are kept verbatim. Cells are read from them on demand, so
/// fields that are not visible columns reach the projected row unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Item {
    pub fields: Map<String, Value>,
}

impl Item {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cell(self, id: impl Into<String>, cell: Cell) -> Self {
        match serde_json::to_value(cell) {
            Ok(value) => self.with_field(id, value),
            Err(_) => self,
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Raw value of a field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The field under `id` read as a cell, `None` when it is absent or has
    /// no string `text`.
    #[must_use]
    pub fn cell(&self, id: &str) -> Option<Cell> {
        self.fields.get(id).and_then(Cell::from_value)
    }
}
