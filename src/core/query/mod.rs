// src/core/query/mod.rs

//! Text + facet filtering and ordering over the full record set.
//!
//! Every call re-scans all records; nothing is cached between calls. That is
//! fine for catalogs of a few thousand entries, which is what this engine
//! targets.

pub mod sort;

use crate::core::filter::FilterSelection;
use crate::core::types::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub use sort::{collate, compare};

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Name matches first, then definition matches, then identifier. With an
    /// empty query this is the same as [`SortMode::Id`].
    #[default]
    Relevance,
    /// Case-insensitive name order.
    Name,
    /// Ascending identifier.
    Id,
}

impl SortMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Name => "name",
            Self::Id => "id",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "name" => Ok(Self::Name),
            "id" => Ok(Self::Id),
            other => Err(format!("unknown sort mode '{other}'")),
        }
    }
}

/// Trims and lower-cases raw search input.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive substring test; an absent or empty field never matches.
pub(crate) fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|text| !text.is_empty() && text.to_lowercase().contains(needle))
}

/// Text predicate. `query` must already be normalized.
#[must_use]
pub fn matches_text(record: &Record, query: &str) -> bool {
    query.is_empty()
        || field_contains(record.name.as_deref(), query)
        || field_contains(record.definition.as_deref(), query)
        || field_contains(record.goal.as_deref(), query)
        || record.aliases().iter().any(|alias| field_contains(Some(alias.as_str()), query))
        || field_contains(record.features.as_deref(), query)
}

/// Facet predicate: every constrained facet (AND) must share at least one
/// option with the record (OR). A record without an entry for a constrained
/// facet fails.
#[must_use]
pub fn matches_facets(record: &Record, selection: &FilterSelection) -> bool {
    selection.iter().all(|(facet, chosen)| {
        record
            .facet_values(facet)
            .is_some_and(|values| values.iter().any(|value| chosen.contains(value)))
    })
}

/// Positions in `records` of the matching records, in result order.
#[must_use]
pub fn search_indices(
    records: &[Record],
    raw_query: &str,
    selection: &FilterSelection,
    mode: SortMode,
) -> Vec<usize> {
    let query = normalize_query(raw_query);

    let mut hits: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_text(record, &query) && matches_facets(record, selection))
        .map(|(index, _)| index)
        .collect();

    // `sort_by` is stable; every comparator also ends on the identifier.
    hits.sort_by(|&a, &b| compare(&records[a], &records[b], mode, &query));

    debug!(
        query = %query,
        active_filters = selection.count(),
        sort = %mode,
        results = hits.len(),
        "search recomputed"
    );
    hits
}

/// Filters and orders `records`, returning references in result order.
#[must_use]
pub fn search<'a>(
    records: &'a [Record],
    raw_query: &str,
    selection: &FilterSelection,
    mode: SortMode,
) -> Vec<&'a Record> {
    search_indices(records, raw_query, selection, mode)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

#[cfg(test)]
mod tests;
