// src/api/types.rs
//! View models handed to the presentation layer.
//!
//! Everything here is plain data with placeholders already applied, so a
//! renderer never has to deal with absent fields.

use crate::api::labels::Labels;
use crate::core::config::ViewMode;
use crate::core::query::SortMode;
use crate::core::types::{FacetCatalog, Record, RecordId, NOT_SPECIFIED};
use serde::Serialize;

/// Facet groups shown on a card.
const CARD_FACET_GROUPS: usize = 3;
/// Badges shown per facet group on a card.
const CARD_BADGES_PER_GROUP: usize = 3;
/// Aliases shown on a card.
const CARD_ALIASES: usize = 2;

const ELLIPSIS: &str = "...";

/// A resolved facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetBadge {
    pub option_id: String,
    /// Option display name, or the raw identifier when the catalog does not
    /// know the option.
    pub label: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetGroup {
    pub facet: String,
    pub title: String,
    pub badges: Vec<FacetBadge>,
}

/// Summary of a record as shown in the result grid or list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordCard {
    pub id: Option<RecordId>,
    /// `#<id>`, or `#?` for a record without one.
    pub id_label: String,
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub facets: Vec<FacetGroup>,
    /// The record has more facet groups than the card shows.
    pub more_facets: bool,
    pub aliases: Vec<String>,
    pub aliases_truncated: bool,
}

impl RecordCard {
    pub fn build(record: &Record, catalog: &FacetCatalog, labels: &Labels, excerpt_chars: usize) -> Self {
        let mut non_empty = record.facets().iter().filter(|(_, values)| !values.is_empty());
        let facets = non_empty
            .by_ref()
            .take(CARD_FACET_GROUPS)
            .map(|(facet, values)| FacetGroup {
                facet: facet.clone(),
                title: labels.facet_title(facet),
                badges: values
                    .iter()
                    .take(CARD_BADGES_PER_GROUP)
                    .map(|value| resolve_badge(catalog, facet, value))
                    .collect(),
            })
            .collect();

        Self {
            id: record.id,
            id_label: id_label(record.id),
            title: record.display_name().to_string(),
            category: labels.category_label(record.category.as_deref()),
            excerpt: truncate_text(record.display_definition(), excerpt_chars),
            facets,
            more_facets: non_empty.next().is_some(),
            aliases: record.aliases().iter().take(CARD_ALIASES).cloned().collect(),
            aliases_truncated: record.aliases().len() > CARD_ALIASES,
        }
    }
}

/// Everything known about a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDetail {
    pub id: Option<RecordId>,
    pub id_label: String,
    pub title: String,
    pub definition: String,
    pub goal: String,
    pub features: String,
    pub category: String,
    /// Groups without any values are left out.
    pub facets: Vec<FacetGroup>,
    pub aliases: Vec<String>,
    pub slug: Option<String>,
    pub related: Vec<RecordId>,
}

impl RecordDetail {
    pub fn build(record: &Record, catalog: &FacetCatalog, labels: &Labels) -> Self {
        let facets = record
            .facets()
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(facet, values)| FacetGroup {
                facet: facet.clone(),
                title: labels.facet_title(facet),
                badges: values.iter().map(|value| resolve_badge(catalog, facet, value)).collect(),
            })
            .collect();

        Self {
            id: record.id,
            id_label: id_label(record.id),
            title: record.display_name().to_string(),
            definition: record.display_definition().to_string(),
            goal: or_not_specified(record.goal.as_deref()),
            features: or_not_specified(record.features.as_deref()),
            category: labels.category_label(record.category.as_deref()),
            facets,
            aliases: record.aliases().to_vec(),
            slug: record.slug.clone().filter(|s| !s.is_empty()),
            related: record.related_events().to_vec(),
        }
    }
}

/// A removable chip for one selected facet option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilterChip {
    pub facet: String,
    pub option_id: String,
    pub label: String,
    pub icon: Option<String>,
}

/// Serializable summary of a browser session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserSnapshot {
    pub catalog_size: usize,
    pub last_updated: String,
    pub query: String,
    pub sort: SortMode,
    pub view: ViewMode,
    pub active_filter_count: usize,
    pub result_count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub no_results: bool,
}

/// One page of results resolved to records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage<'a> {
    pub records: Vec<&'a Record>,
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl ResultPage<'_> {
    #[must_use]
    pub const fn no_results(&self) -> bool {
        self.total_items == 0
    }
}

fn resolve_badge(catalog: &FacetCatalog, facet: &str, value: &str) -> FacetBadge {
    match catalog.option(facet, value) {
        Some(option) => FacetBadge {
            option_id: option.id.clone(),
            label: option.display_name().to_string(),
            icon: option.icon.clone(),
        },
        None => FacetBadge { option_id: value.to_string(), label: value.to_string(), icon: None },
    }
}

fn id_label(id: Option<RecordId>) -> String {
    id.map_or_else(|| "#?".to_string(), |id| format!("#{id}"))
}

fn or_not_specified(value: Option<&str>) -> String {
    value.filter(|s| !s.is_empty()).unwrap_or(NOT_SPECIFIED).to_string()
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with `...`.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}
