// src/core/query/sort.rs

use super::{field_contains, SortMode};
use crate::core::types::Record;
use std::cmp::Ordering;

/// Orders two records under `mode`. `query` must already be normalized.
///
/// Every branch falls through to ascending identifier, so two records only
/// compare equal when their identifiers do.
#[must_use]
pub fn compare(a: &Record, b: &Record, mode: SortMode, query: &str) -> Ordering {
    let primary = match mode {
        SortMode::Name => collate(a.name_or_empty(), b.name_or_empty()),
        SortMode::Id => Ordering::Equal,
        SortMode::Relevance if query.is_empty() => Ordering::Equal,
        SortMode::Relevance => relevance_rank(a, query).cmp(&relevance_rank(b, query)),
    };
    primary.then_with(|| a.id_or_zero().cmp(&b.id_or_zero()))
}

/// Lower sorts first: a name hit beats a definition hit beats neither.
/// Goal, features and aliases do not take part.
fn relevance_rank(record: &Record, query: &str) -> (bool, bool) {
    (
        !field_contains(record.name.as_deref(), query),
        !field_contains(record.definition.as_deref(), query),
    )
}

/// Locale-style string comparison.
///
/// Strings are first compared case-insensitively (Unicode lower-case, code
/// point order, so Latin sorts before Cyrillic). Strings that differ only by
/// case put the lower-case form first.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| case_order(a, b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.len().cmp(&b.len())
}
