//! Tests for persisted column visibility and order
//!
//! Column state lives in a key/value store under `<cookieIdentifier>-hidden`
//! and `<cookieIdentifier>-order`, both JSON arrays of header ids.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod fixtures;

use fixtures::{ids, interactive_options, TableBuilder};
use tableview::headers::header_ids;
use tableview::store::{lookup_cookie, read_id_list};
use tableview::{KeyValueStore, MemoryStore, ReorderHandler, TableOptions, TableViewModel};
use test_case::test_case;

fn abc() -> TableBuilder {
    TableBuilder::new()
        .headers(&["a", "b", "c"])
        .options(interactive_options())
}

fn visible<S: KeyValueStore>(table: &TableViewModel<S>) -> Vec<String> {
    header_ids(&table.filtered_headers())
}

#[test]
fn test_init_headers_apply_without_persisted_state() {
    let table = abc()
        .options(TableOptions {
            init_headers: ids(&["c", "a"]),
            cookie_identifier: "test".into(),
            ..Default::default()
        })
        .build();
    assert_eq!(visible(&table), ids(&["a", "c"]));
    assert_eq!(table.hidden_headers(), ids(&["b"]));
}

#[test]
fn test_persisted_hidden_wins_over_init_headers() {
    let table = abc()
        .options(TableOptions {
            init_headers: ids(&["a"]),
            cookie_identifier: "test".into(),
            ..Default::default()
        })
        .stored("test-hidden", r#"["c"]"#)
        .build();
    assert_eq!(visible(&table), ids(&["a", "b"]));
}

#[test]
fn test_persisted_empty_hidden_list_is_respected() {
    let table = abc()
        .options(TableOptions {
            init_headers: ids(&["a"]),
            cookie_identifier: "test".into(),
            ..Default::default()
        })
        .stored("test-hidden", "[]")
        .build();
    assert_eq!(visible(&table), ids(&["a", "b", "c"]));
}

#[test_case("not json" ; "garbage")]
#[test_case("null" ; "json null")]
#[test_case(r#"{"a":true}"# ; "object")]
#[test_case(r#"[1,2]"# ; "numbers")]
fn test_unreadable_persisted_state_falls_back(raw: &str) {
    let table = abc()
        .stored("test-hidden", raw)
        .stored("test-order", raw)
        .build();
    assert_eq!(visible(&table), ids(&["a", "b", "c"]));
    assert!(table.header_order().is_empty());
}

#[test]
fn test_select_columns_persists_complement() {
    let mut table = abc().build();
    table.select_columns(&ids(&["b"]));
    assert_eq!(visible(&table), ids(&["b"]));
    assert_eq!(
        read_id_list(table.store(), "test-hidden"),
        Some(ids(&["a", "c"]))
    );
}

#[test]
fn test_reorder_replaces_persisted_order() {
    let mut table = abc().stored("test-order", r#"["c"]"#).build();
    assert_eq!(visible(&table), ids(&["c", "a", "b"]));

    table.on_reorder_complete(&ids(&["b", "c"]));
    assert_eq!(visible(&table), ids(&["b", "c", "a"]));
    assert_eq!(table.store().get("test-order").as_deref(), Some(r#"["b","c"]"#));
}

#[test]
fn test_order_survives_hiding_and_showing_columns() {
    let mut table = abc().build();
    table.reorder_headers(&ids(&["c", "b", "a"]));
    table.select_columns(&ids(&["c", "a"]));
    assert_eq!(visible(&table), ids(&["c", "a"]));

    table.select_columns(&ids(&["a", "b", "c"]));
    assert_eq!(visible(&table), ids(&["c", "b", "a"]));
}

#[test]
fn test_state_is_restored_by_a_new_table_over_the_same_store() {
    let mut table = abc().build();
    table.select_columns(&ids(&["a", "c"]));
    table.move_header(1, 0);
    let store: MemoryStore = table.store().clone();

    let restored = TableViewModel::new(interactive_options(), store)
        .with_data(abc().build().headers().to_vec(), Vec::new())
        .unwrap();
    assert_eq!(visible(&restored), ids(&["c", "a"]));
}

#[test]
fn test_tables_with_different_identifiers_do_not_share_state() {
    let mut first = abc().build();
    first.select_columns(&ids(&["a"]));
    let store = first.store().clone();

    let other = TableViewModel::new(
        TableOptions {
            cookie_identifier: "other".into(),
            ..Default::default()
        },
        store,
    )
    .with_data(abc().build().headers().to_vec(), Vec::new())
    .unwrap();
    assert_eq!(visible(&other), ids(&["a", "b", "c"]));
}

#[test]
fn test_duplicate_header_ids_are_rejected() {
    let mut table = abc().build();
    let mut headers = table.headers().to_vec();
    headers.push(headers[0].clone());
    assert!(table.set_headers(headers).is_err());
    assert_eq!(table.headers().len(), 3);
}

#[test]
fn test_cookie_lookup_reads_encoded_json() {
    let jar = "other=1; test-hidden=%5B%22b%22%5D";
    let value = lookup_cookie(jar, "test-hidden").unwrap();
    let store = MemoryStore::new().with_value("test-hidden", value);
    assert_eq!(read_id_list(&store, "test-hidden"), Some(ids(&["b"])));
}
