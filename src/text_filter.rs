//! Per-column text filters.
//!
//! Filter input syntax:
//! - `_term`: cell text must start with `term`
//! - `a,b`: cell text must contain every term
//! - `a/b`: cell text must contain at least one term
//! - anything else: plain substring
//!
//! Matching ignores case and accents. Filters on different columns combine
//! with AND.

use std::collections::BTreeMap;

use crate::markup::normalize_for_search;
use crate::types::ProjectedRow;

const ANCHOR_MARKER: char = '_';
const AND_SEPARATOR: char = ',';
const OR_SEPARATOR: char = '/';

/// A parsed, normalized filter input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextQuery {
    AllOf(Vec<String>),
    AnyOf(Vec<String>),
    Contains(String),
    StartsWith(String),
}

fn split_terms(term: &str, separator: char) -> Vec<String> {
    term.split(separator)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

impl TextQuery {
    /// Parse raw filter input. `None` when the input imposes no constraint.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_for_search(raw);
        let (anchored, term) = match normalized.strip_prefix(ANCHOR_MARKER) {
            Some(rest) => (true, rest),
            None => (false, normalized.as_str()),
        };
        if term.is_empty() {
            return None;
        }

        let and_terms = split_terms(term, AND_SEPARATOR);
        let or_terms = split_terms(term, OR_SEPARATOR);

        let query = if and_terms.len() > 1 && or_terms.len() <= 1 {
            Self::AllOf(and_terms)
        } else if or_terms.len() > 1 && and_terms.len() <= 1 {
            Self::AnyOf(or_terms)
        } else if anchored {
            Self::StartsWith(term.to_string())
        } else {
            Self::Contains(term.to_string())
        };
        Some(query)
    }

    /// Match against already-normalized cell text.
    #[must_use]
    pub fn matches_normalized(&self, text: &str) -> bool {
        match self {
            Self::AllOf(terms) => terms.iter().all(|t| text.contains(t.as_str())),
            Self::AnyOf(terms) => terms.iter().any(|t| text.contains(t.as_str())),
            Self::Contains(term) => text.contains(term.as_str()),
            Self::StartsWith(term) => text.starts_with(term.as_str()),
        }
    }

    /// Match against raw markup-free cell text.
    #[must_use]
    pub fn matches(&self, plain_text: &str) -> bool {
        self.matches_normalized(&normalize_for_search(plain_text))
    }
}

/// Keep the rows passing every active column filter, in their original order.
///
/// A filter on a column that is not projected (hidden) is ignored.
#[must_use]
pub fn apply_text_filters(
    rows: Vec<ProjectedRow>,
    filters: &BTreeMap<String, String>,
) -> Vec<ProjectedRow> {
    let queries: Vec<(&str, TextQuery)> = filters
        .iter()
        .filter_map(|(id, raw)| TextQuery::parse(raw).map(|q| (id.as_str(), q)))
        .collect();
    if queries.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| {
            queries.iter().all(|(id, query)| {
                row.cell(id)
                    .is_none_or(|cell| query.matches(&cell.without_html))
            })
        })
        .collect()
}
