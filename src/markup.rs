//! Markup and accent helpers shared by projection, filtering and sorting.
//!
//! These are cosmetic: `strip_tags` is not a sanitizer and does not decode
//! entities.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

#[allow(clippy::expect_used)]
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"));

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Remove everything that looks like a tag (`<` + one or more non-`>` + `>`).
#[must_use]
pub fn strip_tags(content: &str) -> Cow<'_, str> {
    TAG_PATTERN.replace_all(content, "")
}

/// Decompose to NFD and drop combining diacritical marks.
#[must_use]
pub fn remove_accents(s: &str) -> String {
    s.nfd().filter(|c| !COMBINING_MARKS.contains(c)).collect()
}

/// Lowercase then strip accents; both filter terms and cell text go through this.
#[must_use]
pub fn normalize_for_search(s: &str) -> String {
    remove_accents(&s.to_lowercase())
}
