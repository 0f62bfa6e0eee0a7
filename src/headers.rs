//! Column visibility and ordering.
//!
//! Visible headers are the source headers minus the hidden set, with the ids
//! from the persisted order placed first and the rest following in source
//! order.

use std::collections::HashSet;

use crate::error::{Result, TableError};
use crate::types::Header;

/// Resolve the visible header list.
///
/// Unknown, hidden and repeated ids in `order` are skipped; the first
/// occurrence of an id wins.
#[must_use]
pub fn resolve_headers<'a>(
    headers: &'a [Header],
    hidden: &[String],
    order: &[String],
) -> Vec<&'a Header> {
    let hidden: HashSet<&str> = hidden.iter().map(String::as_str).collect();
    let displayed: Vec<&Header> = headers
        .iter()
        .filter(|h| !hidden.contains(h.id.as_str()))
        .collect();

    let mut added: HashSet<&str> = HashSet::with_capacity(displayed.len());
    let mut resolved = Vec::with_capacity(displayed.len());

    for id in order {
        if added.contains(id.as_str()) {
            continue;
        }
        if let Some(&header) = displayed.iter().find(|h| h.id == *id) {
            added.insert(header.id.as_str());
            resolved.push(header);
        }
    }

    for header in displayed {
        if added.insert(header.id.as_str()) {
            resolved.push(header);
        }
    }

    resolved
}

/// Hidden set for a column-picker selection: every header not selected.
#[must_use]
pub fn hidden_from_selection(headers: &[Header], selected: &[String]) -> Vec<String> {
    headers
        .iter()
        .filter(|h| !selected.contains(&h.id))
        .map(|h| h.id.clone())
        .collect()
}

/// Default hidden set when nothing is persisted: everything outside
/// `init_headers`, or nothing when `init_headers` is empty.
#[must_use]
pub fn initial_hidden(headers: &[Header], init_headers: &[String]) -> Vec<String> {
    if init_headers.is_empty() {
        return Vec::new();
    }
    hidden_from_selection(headers, init_headers)
}

/// Id sequence of a header list, as persisted after a reorder.
#[must_use]
pub fn header_ids(headers: &[&Header]) -> Vec<String> {
    headers.iter().map(|h| h.id.clone()).collect()
}

/// Reject header lists with repeated ids.
pub fn ensure_unique_ids(headers: &[Header]) -> Result<()> {
    let mut seen = HashSet::with_capacity(headers.len());
    for header in headers {
        if !seen.insert(header.id.as_str()) {
            return Err(TableError::DuplicateHeader(header.id.clone()));
        }
    }
    Ok(())
}
