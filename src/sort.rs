//! Column sorting.
//!
//! Keys compare numerically when both coerce to numbers the way JavaScript's
//! `Number()` does, otherwise as strings. A descending sort calls the same
//! comparator with the operands swapped.

use std::cmp::Ordering;

use crate::types::{Pagination, ProjectedRow, SortValue};

/// Comparison key of a row for the sort column.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Explicit sort value if set, otherwise the lowercased plain text.
    #[must_use]
    pub fn for_row(row: &ProjectedRow, column_id: &str) -> Self {
        match row.cell(column_id) {
            Some(cell) => match &cell.sort_value {
                Some(SortValue::Number(n)) => Self::Number(*n),
                Some(SortValue::Text(s)) => Self::Text(s.clone()),
                None => Self::Text(cell.without_html.to_lowercase()),
            },
            None => Self::Text(String::new()),
        }
    }

    /// Numeric value, `None` where JavaScript would produce `NaN`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_nan() => None,
            Self::Number(n) => Some(*n),
            Self::Text(s) => coerce_number(s),
        }
    }
}

/// String to number following `Number(string)`: surrounding whitespace is
/// ignored, the empty string is zero.
#[must_use]
pub fn coerce_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix_digits = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| s.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix_digits {
        return u64::from_str_radix(digits, radix).ok().map(u64_to_f64);
    }

    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

#[allow(clippy::cast_precision_loss)]
fn u64_to_f64(n: u64) -> f64 {
    n as f64
}

/// Compare two keys.
///
/// Numbers compare by the sign of `a - b` (`Infinity - Infinity` is equal).
/// Otherwise two strings compare by UTF-16 code units; a number against a
/// non-numeric string is equal.
#[must_use]
pub fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        let diff = x - y;
        return if diff > 0.0 {
            Ordering::Greater
        } else if diff < 0.0 {
            Ordering::Less
        } else {
            Ordering::Equal
        };
    }
    match (a, b) {
        (SortKey::Text(x), SortKey::Text(y)) => x.encode_utf16().cmp(y.encode_utf16()),
        _ => Ordering::Equal,
    }
}

/// Sort rows by `pagination.sort_by`; source order when it is empty.
#[must_use]
pub fn sort_rows(rows: Vec<ProjectedRow>, pagination: &Pagination) -> Vec<ProjectedRow> {
    if !pagination.is_sorted() {
        return rows;
    }
    let column = pagination.sort_by.as_str();
    let descending = pagination.descending;

    let keyed: Vec<(SortKey, ProjectedRow)> = rows
        .into_iter()
        .map(|row| (SortKey::for_row(&row, column), row))
        .collect();

    let mut compare = |a: &(SortKey, ProjectedRow), b: &(SortKey, ProjectedRow)| {
        if descending {
            compare_keys(&b.0, &a.0)
        } else {
            compare_keys(&a.0, &b.0)
        }
    };

    merge_sort_by(keyed, &mut compare)
        .into_iter()
        .map(|(_, row)| row)
        .collect()
}

/// Stable merge sort.
///
/// Mixed numeric and text keys do not form a total order, and `slice::sort_by`
/// may panic on such comparators.
fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::ProjectedCell;
    use test_case::test_case;

    fn row(text: &str, sort_value: Option<SortValue>) -> ProjectedRow {
        let mut row = ProjectedRow::default();
        row.cells.insert(
            "c".to_string(),
            ProjectedCell {
                text: text.to_string(),
                without_html: text.to_string(),
                sort_value,
                align: None,
            },
        );
        row
    }

    fn sorted_texts(rows: Vec<ProjectedRow>, descending: bool) -> Vec<String> {
        let pagination = Pagination {
            sort_by: "c".into(),
            descending,
            ..Default::default()
        };
        sort_rows(rows, &pagination)
            .iter()
            .map(|r| r.plain_text("c").to_string())
            .collect()
    }

    #[test_case("" => Some(0.0) ; "empty is zero")]
    #[test_case("  42 " => Some(42.0) ; "trimmed")]
    #[test_case("-1.5e2" => Some(-150.0) ; "exponent")]
    #[test_case(".5" => Some(0.5) ; "leading dot")]
    #[test_case("0x1F" => Some(31.0) ; "hex")]
    #[test_case("Infinity" => Some(f64::INFINITY) ; "infinity")]
    #[test_case("inf" => None ; "rust only infinity spelling")]
    #[test_case("NaN" => None ; "nan")]
    #[test_case("12px" => None ; "trailing garbage")]
    #[test_case("1,000" => None ; "thousands separator")]
    fn test_coerce_number(s: &str) -> Option<f64> {
        coerce_number(s)
    }

    #[test]
    fn test_numeric_sort_value_ascending() {
        let rows = vec![
            row("three", Some(SortValue::Number(3.0))),
            row("one", Some(SortValue::Number(1.0))),
            row("two", Some(SortValue::Number(2.0))),
        ];
        assert_eq!(sorted_texts(rows, false), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_numeric_sort_value_descending() {
        let rows = vec![
            row("three", Some(SortValue::Number(3.0))),
            row("one", Some(SortValue::Number(1.0))),
            row("two", Some(SortValue::Number(2.0))),
        ];
        assert_eq!(sorted_texts(rows, true), vec!["three", "two", "one"]);
    }

    #[test]
    fn test_descending_swaps_operands_and_keeps_ties_in_place() {
        // Equal keys keep their incoming order in both directions; reversing
        // an ascending result would flip them.
        let rows = vec![
            row("b-first", Some(SortValue::Number(2.0))),
            row("a", Some(SortValue::Number(1.0))),
            row("b-second", Some(SortValue::Number(2.0))),
        ];
        assert_eq!(
            sorted_texts(rows.clone(), false),
            vec!["a", "b-first", "b-second"]
        );
        assert_eq!(sorted_texts(rows, true), vec!["b-first", "b-second", "a"]);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let rows = vec![row("banana", None), row("Apple", None), row("cherry", None)];
        assert_eq!(sorted_texts(rows, false), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_numeric_text_sorts_numerically() {
        let rows = vec![row("10", None), row("9", None), row("100", None)];
        assert_eq!(sorted_texts(rows, false), vec!["9", "10", "100"]);
    }

    #[test]
    fn test_no_sort_column_keeps_order() {
        let rows = vec![row("b", None), row("a", None)];
        let out = sort_rows(rows, &Pagination::default());
        assert_eq!(out[0].plain_text("c"), "b");
    }

    #[test]
    fn test_mixed_keys_do_not_panic() {
        let rows = vec![
            row("x", Some(SortValue::Number(5.0))),
            row("abc", None),
            row("10", None),
            row("zz", Some(SortValue::Text("Q".into()))),
            row("", None),
        ];
        assert_eq!(sorted_texts(rows.clone(), false).len(), 5);
        assert_eq!(sorted_texts(rows, true).len(), 5);
    }

    #[test]
    fn test_compare_keys_rules() {
        let n = |v: f64| SortKey::Number(v);
        let t = |s: &str| SortKey::Text(s.to_string());
        assert_eq!(compare_keys(&n(1.0), &n(2.0)), Ordering::Less);
        assert_eq!(compare_keys(&t("2"), &n(10.0)), Ordering::Less);
        assert_eq!(compare_keys(&t("b"), &t("a")), Ordering::Greater);
        assert_eq!(compare_keys(&n(3.0), &t("abc")), Ordering::Equal);
        assert_eq!(
            compare_keys(&n(f64::INFINITY), &n(f64::INFINITY)),
            Ordering::Equal
        );
    }
}
