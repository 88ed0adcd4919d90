// src/core/catalog/mod.rs

pub mod loader;

pub use loader::{load, parse_document, CatalogSource, Fetch, HttpSource, InlineSource};
#[cfg(not(target_arch = "wasm32"))]
pub use loader::FileSource;

use crate::core::types::{CatalogDocument, CatalogMeta, FacetCatalog, FacetOption, Record, RecordId};
use std::collections::HashMap;

/// The loaded catalog. Built once per successful load and read-only after.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    meta: CatalogMeta,
    records: Vec<Record>,
    facets: FacetCatalog,
    /// Identifier -> position in `records`. The first record wins on a
    /// duplicate identifier; records without one are not indexed.
    by_id: HashMap<RecordId, usize>,
}

impl CatalogStore {
    pub fn from_document(document: CatalogDocument) -> Self {
        let CatalogDocument { meta, records, facets } = document;
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if let Some(id) = record.id {
                by_id.entry(id).or_insert(index);
            }
        }
        Self { meta, records, facets, by_id }
    }

    #[must_use]
    pub const fn meta(&self) -> &CatalogMeta {
        &self.meta
    }

    /// All records, in document order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn facets(&self) -> &FacetCatalog {
        &self.facets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a record up by identifier across the whole catalog.
    #[must_use]
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.by_id.get(&id).map(|&index| &self.records[index])
    }

    #[must_use]
    pub fn facet_option(&self, facet: &str, option_id: &str) -> Option<&FacetOption> {
        self.facets.option(facet, option_id)
    }
}
