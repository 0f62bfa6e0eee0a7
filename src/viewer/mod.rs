//! `TableView` - the wasm-exported table component.
//!
//! Wraps a [`TableViewModel`] for JavaScript: options, headers and items come
//! in as plain JS objects, the derived view goes out as a plain JS object
//! either on request or through a registered render callback after every
//! change. Column preferences are kept in `document.cookie` in the browser
//! and in memory elsewhere. In the browser, `tracing` events at info level
//! and above go to the console.

#[cfg(target_arch = "wasm32")]
mod console;

use js_sys::{Array, Function};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::TableOptions;
use crate::store::{KeyValueStore, MemoryStore};
use crate::types::{Header, Item};
use crate::view_model::TableViewModel;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[cfg(target_arch = "wasm32")]
fn default_store() -> Box<dyn KeyValueStore> {
    match crate::store::CookieStore::new() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "cookies unavailable, column preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_store() -> Box<dyn KeyValueStore> {
    Box::new(MemoryStore::new())
}

/// The table component exported to JavaScript
#[wasm_bindgen]
pub struct TableView {
    model: TableViewModel<Box<dyn KeyValueStore>>,
    render_callback: Option<Function>,
}

impl TableView {
    /// Native constructor with an explicit store.
    #[must_use]
    pub fn with_store(options: TableOptions, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            model: TableViewModel::new(options, store),
            render_callback: None,
        }
    }

    #[must_use]
    pub fn model(&self) -> &TableViewModel<Box<dyn KeyValueStore>> {
        &self.model
    }

    fn state_value(&self) -> Result<JsValue, JsValue> {
        // Plain objects instead of ES Maps for the text and row maps.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        self.model
            .view_state()
            .serialize(&serializer)
            .map_err(to_js_error)
    }

    fn notify(&self) -> Result<(), JsValue> {
        let Some(callback) = &self.render_callback else {
            return Ok(());
        };
        let state = self.state_value()?;
        callback.call1(&JsValue::NULL, &state).map(|_| ())
    }
}

#[wasm_bindgen]
impl TableView {
    /// Create a table. `options` may be `undefined` for all defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<TableView, JsValue> {
        #[cfg(target_arch = "wasm32")]
        {
            console_error_panic_hook::set_once();
            console::init();
        }

        let options: TableOptions = if options.is_undefined() || options.is_null() {
            TableOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(to_js_error)?
        };
        Ok(Self::with_store(options, default_store()))
    }

    #[wasm_bindgen(js_name = setHeaders)]
    pub fn set_headers(&mut self, headers: JsValue) -> Result<(), JsValue> {
        let headers: Vec<Header> = serde_wasm_bindgen::from_value(headers).map_err(to_js_error)?;
        self.model.set_headers(headers).map_err(to_js_error)?;
        self.notify()
    }

    #[wasm_bindgen(js_name = setItems)]
    pub fn set_items(&mut self, items: JsValue) -> Result<(), JsValue> {
        let items: Vec<Item> = serde_wasm_bindgen::from_value(items).map_err(to_js_error)?;
        self.model.set_items(items);
        self.notify()
    }

    /// Header click handler.
    #[wasm_bindgen(js_name = sortColumn)]
    pub fn sort_column(&mut self, column_id: &str) -> Result<bool, JsValue> {
        let changed = self.model.sort_column(column_id);
        if changed {
            self.notify()?;
        }
        Ok(changed)
    }

    /// Filter input handler.
    #[wasm_bindgen(js_name = setTextFilter)]
    pub fn set_text_filter(&mut self, column_id: &str, value: &str) -> Result<bool, JsValue> {
        let changed = self.model.set_text_filter(column_id, value);
        if changed {
            self.notify()?;
        }
        Ok(changed)
    }

    /// Column picker save handler; `ids` is an array of selected header ids.
    #[wasm_bindgen(js_name = selectColumns)]
    pub fn select_columns(&mut self, ids: JsValue) -> Result<(), JsValue> {
        let ids: Vec<String> = serde_wasm_bindgen::from_value(ids).map_err(to_js_error)?;
        self.model.select_columns(&ids);
        self.notify()
    }

    /// Drag completion handler; `ids` is the new visible column order.
    #[wasm_bindgen(js_name = reorderHeaders)]
    pub fn reorder_headers(&mut self, ids: JsValue) -> Result<(), JsValue> {
        let ids: Vec<String> = serde_wasm_bindgen::from_value(ids).map_err(to_js_error)?;
        self.model.reorder_headers(&ids);
        self.notify()
    }

    #[wasm_bindgen(js_name = moveHeader)]
    pub fn move_header(&mut self, from: usize, to: usize) -> Result<bool, JsValue> {
        let moved = self.model.move_header(from, to);
        if moved {
            self.notify()?;
        }
        Ok(moved)
    }

    #[wasm_bindgen(js_name = visibleHeaderIds)]
    pub fn visible_header_ids(&self) -> Array {
        self.model
            .filtered_headers()
            .iter()
            .map(|h| JsValue::from_str(&h.id))
            .collect()
    }

    /// The derived view as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        self.state_value()
    }

    /// The derived view as a JSON string.
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.model.view_state()).map_err(to_js_error)
    }

    /// Called with the view state after every change.
    #[wasm_bindgen(js_name = setRenderCallback)]
    pub fn set_render_callback(&mut self, callback: Function) {
        self.render_callback = Some(callback);
    }

    /// Invoke the render callback now.
    pub fn render(&self) -> Result<(), JsValue> {
        self.notify()
    }
}
