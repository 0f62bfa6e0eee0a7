//! Browser tests for the cookie store and the exported `TableView`.
//!
//! Run with: wasm-pack test --headless --chrome
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use tableview::store::{read_id_list, write_id_list, CookieStore};
use tableview::TableView;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn cookie_store_round_trips_id_lists() {
    let mut store = CookieStore::new().unwrap();
    let ids = vec!["b".to_string(), "a c".to_string()];
    write_id_list(&mut store, "web-test-order", &ids).unwrap();
    assert_eq!(read_id_list(&store, "web-test-order"), Some(ids));
}

#[wasm_bindgen_test]
fn table_view_derives_state() {
    let options = serde_wasm_bindgen::to_value(&json!({
        "cookieIdentifier": "web-test",
        "textFilter": true,
        "enableFooter": true
    }))
    .unwrap();
    let mut table = TableView::new(options).unwrap();

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let headers = serde::Serialize::serialize(
        &json!([{"id": "name", "text": "Name"}, {"id": "qty", "text": "Qty"}]),
        &serializer,
    )
    .unwrap();
    let items = serde::Serialize::serialize(
        &json!([
            {"name": {"text": "pear"}, "qty": {"text": "3", "sortValue": 3}},
            {"name": {"text": "plum"}, "qty": {"text": "1", "sortValue": 1}}
        ]),
        &serializer,
    )
    .unwrap();
    table.set_headers(headers).unwrap();
    table.set_items(items).unwrap();

    assert!(table.set_text_filter("name", "_pl").unwrap());
    let state: serde_json::Value = serde_json::from_str(&table.state_json().unwrap()).unwrap();
    assert_eq!(state["footer"], json!("1/2 items"));
    assert_eq!(table.visible_header_ids().length(), 2);
    assert!(table.state().unwrap().is_object());
    assert!(!JsValue::from(table.visible_header_ids()).is_undefined());
}

#[wasm_bindgen_test]
fn table_view_installs_console_logging_once() {
    TableView::new(JsValue::UNDEFINED).unwrap();
    assert!(tracing::dispatcher::has_been_set());
    // A second table reuses the installed subscriber.
    TableView::new(JsValue::NULL).unwrap();
    tracing::warn!("console logging reachable");
}
