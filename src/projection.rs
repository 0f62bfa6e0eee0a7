//! Projection of raw items onto the visible headers.

use crate::markup::strip_tags;
use crate::types::{Header, Item, ProjectedCell, ProjectedRow, SortValue};

/// Project one item.
///
/// Every visible header gets a cell; missing or unreadable cells become empty
/// text. Fields whose key is not a visible header id are copied through
/// unchanged, including cells of hidden columns.
#[must_use]
pub fn project_item(item: &Item, visible: &[&Header]) -> ProjectedRow {
    let mut row = ProjectedRow::default();

    for header in visible {
        let cell = match item.cell(&header.id) {
            Some(cell) => ProjectedCell {
                without_html: strip_tags(&cell.text).into_owned(),
                text: cell.text,
                sort_value: cell.sort_value.filter(SortValue::is_truthy),
                align: cell.align,
            },
            None => ProjectedCell::default(),
        };
        row.cells.insert(header.id.clone(), cell);
    }

    for (key, value) in &item.fields {
        if !row.cells.contains_key(key) {
            row.extra.insert(key.clone(), value.clone());
        }
    }

    row
}

/// Project all items, preserving their order.
#[must_use]
pub fn project_items(items: &[Item], visible: &[&Header]) -> Vec<ProjectedRow> {
    items.iter().map(|item| project_item(item, visible)).collect()
}
