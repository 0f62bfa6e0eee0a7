//! tableview - sortable, filterable, column-configurable table core
//!
//! Derives what a table widget shows from caller-supplied headers and items:
//! - Column visibility and user ordering, persisted through a key/value store
//! - Projection of items onto visible columns with markup-free text
//! - Case- and accent-insensitive per-column text filters (`_prefix`, `a,b`, `a/b`)
//! - Column sorting with numeric/text key coercion
//! - Footer counts from templates
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TableView } from 'tableview';
//! await init();
//! const table = new TableView({ textFilter: true, enableFooter: true });
//! table.setRenderCallback((state) => paint(state));
//! table.setHeaders(headers);
//! table.setItems(items);
//! ```

pub mod config;
pub mod error;
pub mod footer;
pub mod headers;
pub mod markup;
pub mod projection;
pub mod render;
pub mod sort;
pub mod store;
pub mod text_filter;
pub mod types;
pub mod view_model;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use config::TableOptions;
pub use error::{Result, TableError};
pub use render::{Renderer, ViewState};
pub use store::{KeyValueStore, MemoryStore};
pub use types::*;
pub use view_model::{ReorderHandler, TableViewModel};
pub use viewer::TableView;

/// Remove markup tags from a string
#[must_use]
#[wasm_bindgen(js_name = stripTags)]
pub fn strip_tags(content: &str) -> String {
    markup::strip_tags(content).into_owned()
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
