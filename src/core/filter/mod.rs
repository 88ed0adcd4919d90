// src/core/filter/mod.rs

//! The user's active facet selection.
//!
//! A facet name is present only while at least one of its options is
//! selected, so `is_empty` on the selection is the same as "no facet
//! constraints". Mutations never trigger a search; the caller re-runs the
//! query engine afterwards.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterSelection {
    selected: BTreeMap<String, BTreeSet<String>>,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `option_id` under `facet` if it is not selected, otherwise
    /// deselects it. Returns `true` if the option is selected afterwards.
    pub fn toggle(&mut self, facet: &str, option_id: &str) -> bool {
        if self.remove(facet, option_id) {
            false
        } else {
            self.selected
                .entry(facet.to_string())
                .or_default()
                .insert(option_id.to_string());
            true
        }
    }

    /// Deselects `option_id` under `facet`. Returns `false` if it was not
    /// selected. Drops the facet entry once its last option is removed.
    pub fn remove(&mut self, facet: &str, option_id: &str) -> bool {
        let Some(options) = self.selected.get_mut(facet) else {
            return false;
        };
        let removed = options.remove(option_id);
        if options.is_empty() {
            self.selected.remove(facet);
        }
        removed
    }

    pub fn reset(&mut self) {
        self.selected.clear();
    }

    /// Total number of selected (facet, option) pairs.
    #[must_use]
    pub fn count(&self) -> usize {
        self.selected.values().map(BTreeSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn contains(&self, facet: &str, option_id: &str) -> bool {
        self.selected.get(facet).is_some_and(|options| options.contains(option_id))
    }

    /// Selected options for `facet`, or `None` when the facet is unconstrained.
    #[must_use]
    pub fn options(&self, facet: &str) -> Option<&BTreeSet<String>> {
        self.selected.get(facet)
    }

    /// Constrained facets with their selected options.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.selected.iter().map(|(facet, options)| (facet.as_str(), options))
    }
}
