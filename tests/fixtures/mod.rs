//! Builders for table test data.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]

use serde_json::{json, Value};
use tableview::{Cell, Header, Item, MemoryStore, TableOptions, TableViewModel};

/// Builds a [`TableViewModel`] over a [`MemoryStore`].
#[derive(Default)]
pub struct TableBuilder {
    headers: Vec<Header>,
    items: Vec<Item>,
    options: TableOptions,
    store: MemoryStore,
}

impl TableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add headers with upper-cased ids as labels.
    #[must_use]
    pub fn headers(mut self, ids: &[&str]) -> Self {
        self.headers
            .extend(ids.iter().map(|id| Header::new(*id, id.to_uppercase())));
        self
    }

    #[must_use]
    pub fn header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }

    /// Add one item from `(header id, cell text)` pairs.
    #[must_use]
    pub fn row(mut self, cells: &[(&str, &str)]) -> Self {
        let item = cells
            .iter()
            .fold(Item::new(), |item, (id, text)| item.with_cell(*id, Cell::new(*text)));
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn stored(mut self, key: &str, value: &str) -> Self {
        self.store = self.store.with_value(key, value);
        self
    }

    #[must_use]
    pub fn build(self) -> TableViewModel<MemoryStore> {
        TableViewModel::new(self.options, self.store)
            .with_data(self.headers, self.items)
            .expect("valid headers")
    }
}

/// Options with text filtering and the footer turned on.
#[must_use]
pub fn interactive_options() -> TableOptions {
    TableOptions {
        text_filter: true,
        enable_footer: true,
        cookie_identifier: "test".to_string(),
        ..Default::default()
    }
}

/// Product catalogue used across the integration tests.
#[must_use]
pub fn catalogue_json() -> Value {
    json!({
        "headers": [
            {"id": "name", "text": "<b>Name</b>"},
            {"id": "price", "text": "Price", "align": "right"},
            {"id": "origin", "text": "Origin", "textFilterString": "Country..."},
            {"id": "sku", "text": "SKU", "textFilterString": false}
        ],
        "items": [
            {"name": {"text": "Crème fraîche"}, "price": {"text": "3,50 €", "sortValue": 3.5}, "origin": {"text": "France"}, "sku": {"text": "CF-1"}, "id": 1},
            {"name": {"text": "<i>Apple</i> juice"}, "price": {"text": "2 €", "sortValue": 2}, "origin": {"text": "Spain"}, "id": 2},
            {"name": {"text": "Butter"}, "price": {"text": "4,10 €", "sortValue": 4.1}, "origin": {"text": "France"}, "sku": {"text": "BT-7"}, "id": 3},
            {"name": {"text": "apricot jam"}, "price": {"text": "free"}, "origin": {"text": "Österreich"}, "id": 4}
        ]
    })
}

/// Parsed headers and items of [`catalogue_json`].
#[must_use]
pub fn catalogue() -> (Vec<Header>, Vec<Item>) {
    let data = catalogue_json();
    let headers = serde_json::from_value(data["headers"].clone()).unwrap();
    let items = serde_json::from_value(data["items"].clone()).unwrap();
    (headers, items)
}

#[must_use]
pub fn ids(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| (*s).to_string()).collect()
}
