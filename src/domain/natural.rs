//! Natural (numeric-aware) ordering for tag names
//!
//! Digit runs compare by numeric value and everything else compares
//! byte-wise, so `9.5.0` sorts before `10.1.0`. Version-only sorting filters
//! out strings that are not valid versions before ordering them.

use crate::domain::version::Version;
use std::cmp::Ordering;

/// Direction for sorted output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Split a string into alternating digit / non-digit runs
fn chunks(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits: Option<bool> = None;

    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != is_digit => {
                out.push(&s[start..i]);
                start = i;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }
    if start < s.len() {
        out.push(&s[start..]);
    }
    out
}

fn is_digits(chunk: &str) -> bool {
    chunk.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two digit runs by value, whatever their length
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Natural comparison of two strings
///
/// Falls back to plain byte order when the chunks tie (e.g. `01` vs `1`),
/// so the ordering is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (x, y) in left.iter().zip(right.iter()) {
        let ord = if is_digits(x) && is_digits(y) {
            cmp_digits(x, y)
        } else {
            x.cmp(y)
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.len().cmp(&right.len()).then_with(|| a.cmp(b))
}

/// Sort raw strings in natural order, dropping exact duplicates
///
/// Strings are kept whether or not they are valid versions.
pub fn sort_natural<S: AsRef<str>>(values: &[S], order: SortOrder) -> Vec<String> {
    let mut sorted: Vec<String> = values.iter().map(|v| v.as_ref().to_string()).collect();
    sorted.sort_by(|a, b| natural_cmp(a, b));
    sorted.dedup();

    if order == SortOrder::Descending {
        sorted.reverse();
    }
    log::debug!("natural sort returned {} of {} values", sorted.len(), values.len());
    sorted
}

/// Sort only the strings that parse as versions, in natural order
pub fn sort_versions<S: AsRef<str>>(values: &[S], order: SortOrder) -> Vec<Version> {
    let valid: Vec<&str> = values
        .iter()
        .map(AsRef::as_ref)
        .filter(|v| Version::parse(v).is_ok())
        .collect();

    sort_natural(&valid, order)
        .iter()
        .filter_map(|v| Version::parse(v).ok())
        .collect()
}
