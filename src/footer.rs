//! Footer counts and other templated UI strings.

use std::collections::BTreeMap;

use crate::types::text::{FILTERED_FOOTER_COUNT, FOOTER_COUNT};
use crate::types::TableText;

pub const ITEM_COUNT_PLACEHOLDER: &str = "%itemCount%";
pub const FILTERED_ITEM_COUNT_PLACEHOLDER: &str = "%filteredItemCount%";

/// Substitute the first occurrence of each count placeholder.
#[must_use]
pub fn fill_template(template: &str, item_count: usize, filtered_count: usize) -> String {
    template
        .replacen(
            FILTERED_ITEM_COUNT_PLACEHOLDER,
            &filtered_count.to_string(),
            1,
        )
        .replacen(ITEM_COUNT_PLACEHOLDER, &item_count.to_string(), 1)
}

/// Every configured string with counts filled in.
#[must_use]
pub fn compute_text(
    text: &TableText,
    item_count: usize,
    filtered_count: usize,
) -> BTreeMap<String, String> {
    text.iter()
        .map(|(key, template)| {
            (
                key.to_string(),
                fill_template(template, item_count, filtered_count),
            )
        })
        .collect()
}

/// Footer line: the "all shown" template when nothing is filtered out.
#[must_use]
pub fn footer_text(text: &TableText, item_count: usize, filtered_count: usize) -> String {
    let key = if filtered_count == item_count {
        FOOTER_COUNT
    } else {
        FILTERED_FOOTER_COUNT
    };
    text.get(key)
        .map(|template| fill_template(template, item_count, filtered_count))
        .unwrap_or_default()
}
