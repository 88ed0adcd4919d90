// src/core/types/mod.rs

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, Map, PickFirst, VecSkipError};

/// Numeric record identifier. Unique within a catalog.
pub type RecordId = u64;

/// Placeholder shown for a record without a name.
pub const UNTITLED: &str = "untitled";
/// Placeholder shown for a record without a definition.
pub const NO_DESCRIPTION: &str = "no description";
/// Placeholder for absent goal, features and category.
pub const NOT_SPECIFIED: &str = "not specified";
/// Placeholder for an absent last-updated marker.
pub const UNKNOWN: &str = "unknown";

/// One catalog entry.
///
/// Every field is optional on the wire; absent or `null` fields decode to
/// `None` and are treated as non-matching by the query engine. Identifiers
/// are accepted either as JSON numbers or as numeric strings. Unusable list
/// elements (a `null` alias, a non-numeric related id) are dropped, and a
/// `null` facet value list decodes as an empty one.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Record {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub definition: Option<String>,
    pub goal: Option<String>,
    pub features: Option<String>,
    #[serde_as(deserialize_as = "Option<VecSkipError<_>>")]
    pub aliases: Option<Vec<String>>,
    pub category: Option<String>,
    #[serde_as(
        serialize_as = "Option<Vec<PickFirst<(_, DisplayFromStr)>>>",
        deserialize_as = "Option<VecSkipError<PickFirst<(_, DisplayFromStr)>>>"
    )]
    pub related_events: Option<Vec<RecordId>>,
    /// Facet name -> option identifiers, in document order.
    #[serde_as(
        serialize_as = "Option<Map<_, _>>",
        deserialize_as = "Option<Map<_, DefaultOnNull<VecSkipError<_>>>>"
    )]
    pub filters: Option<Vec<(String, Vec<String>)>>,
    pub slug: Option<String>,
}

impl Record {
    /// Identifier used for ordering; a missing identifier orders as 0.
    #[must_use]
    pub fn id_or_zero(&self) -> RecordId {
        self.id.unwrap_or(0)
    }

    /// Name used for ordering; a missing name orders as the empty string.
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Name for display, falling back to [`UNTITLED`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(UNTITLED)
    }

    /// Definition for display, falling back to [`NO_DESCRIPTION`].
    #[must_use]
    pub fn display_definition(&self) -> &str {
        non_empty(self.definition.as_deref()).unwrap_or(NO_DESCRIPTION)
    }

    #[must_use]
    pub fn aliases(&self) -> &[String] {
        self.aliases.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn related_events(&self) -> &[RecordId] {
        self.related_events.as_deref().unwrap_or_default()
    }

    /// All facet entries of this record, in document order.
    #[must_use]
    pub fn facets(&self) -> &[(String, Vec<String>)] {
        self.filters.as_deref().unwrap_or_default()
    }

    /// Option identifiers this record carries for `facet`, if any.
    #[must_use]
    pub fn facet_values(&self, facet: &str) -> Option<&[String]> {
        self.facets()
            .iter()
            .find(|(name, _)| name == facet)
            .map(|(_, values)| values.as_slice())
    }
}

/// One selectable value within a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl FacetOption {
    /// Display name, falling back to the raw identifier.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(&self.id)
    }
}

/// Facet name -> ordered options. Group order follows the source document.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetCatalog {
    #[serde_as(as = "Map<_, _>")]
    groups: Vec<(String, Vec<FacetOption>)>,
}

impl FacetCatalog {
    #[must_use]
    pub const fn new(groups: Vec<(String, Vec<FacetOption>)>) -> Self {
        Self { groups }
    }

    /// Number of facets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FacetOption])> {
        self.groups.iter().map(|(name, options)| (name.as_str(), options.as_slice()))
    }

    pub fn facet_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn options(&self, facet: &str) -> Option<&[FacetOption]> {
        self.groups.iter().find(|(name, _)| name == facet).map(|(_, options)| options.as_slice())
    }

    /// Looks up a single option by facet name and option identifier.
    #[must_use]
    pub fn option(&self, facet: &str, option_id: &str) -> Option<&FacetOption> {
        self.options(facet)?.iter().find(|option| option.id == option_id)
    }
}

/// The metadata section as it appears on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawMeta {
    pub(crate) total_concepts: Option<usize>,
    pub(crate) last_updated: Option<String>,
}

/// Resolved catalog metadata with placeholders applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogMeta {
    pub total_records: usize,
    pub last_updated: String,
}

impl CatalogMeta {
    /// Applies defaults: a missing or zero count becomes `record_count`, a
    /// missing or blank marker becomes [`UNKNOWN`].
    pub(crate) fn resolve(raw: RawMeta, record_count: usize) -> Self {
        Self {
            total_records: raw.total_concepts.filter(|n| *n > 0).unwrap_or(record_count),
            last_updated: raw
                .last_updated
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// A fully decoded catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDocument {
    pub meta: CatalogMeta,
    pub records: Vec<Record>,
    pub facets: FacetCatalog,
}

/// Largest integer a JavaScript number holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Converts a JavaScript number into a [`RecordId`]. Negative, fractional,
/// non-finite and imprecise values have no identifier.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn record_id_from_f64(value: f64) -> Option<RecordId> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_SAFE_INTEGER)
        .then(|| value as RecordId)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
