//! Structured error types for tableview.
//!
//! The derivation pipeline itself never fails; errors only come from
//! malformed caller input and the persistence store.

/// All errors surfaced by tableview.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two headers share an id.
    #[error("Duplicate header id: {0}")]
    DuplicateHeader(String),

    /// An operation referenced a header id that does not exist.
    #[error("Unknown header id: {0}")]
    UnknownHeader(String),

    /// The key/value store could not be read or written.
    #[error("Store error: {0}")]
    Store(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;

impl From<String> for TableError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for TableError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<TableError> for wasm_bindgen::JsValue {
    fn from(e: TableError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
