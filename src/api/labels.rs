// src/api/labels.rs
//! Display labels for facet names and category tags.

use crate::core::config::BrowserConfig;
use crate::core::types::NOT_SPECIFIED;
use std::collections::BTreeMap;

const FACET_TITLES: &[(&str, &str)] = &[
    ("goal", "GOAL"),
    ("scale", "SCALE"),
    ("budget", "BUDGET"),
    ("location", "VENUE"),
    ("energy", "ENERGY"),
    ("formality", "FORMALITY"),
    ("preparation_time", "PREPARATION TIME"),
    ("audience_age", "AUDIENCE AGE"),
    ("duration", "DURATION"),
    ("frequency", "FREQUENCY"),
    ("equipment", "EQUIPMENT"),
];

const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("promo", "Promo"),
    ("social", "Social"),
    ("business", "Business"),
    ("educational", "Educational"),
    ("cultural", "Cultural"),
    ("sports", "Sports"),
    ("ceremonial", "Ceremonial"),
    ("online", "Online"),
    ("specialized", "Specialized"),
];

/// Built-in labels merged with the overrides from [`BrowserConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    facet_titles: BTreeMap<String, String>,
    category_labels: BTreeMap<String, String>,
}

impl Labels {
    pub fn from_config(config: &BrowserConfig) -> Self {
        Self {
            facet_titles: merged(FACET_TITLES, &config.facet_titles),
            category_labels: merged(CATEGORY_LABELS, &config.category_labels),
        }
    }

    /// Title for a facet; unknown facets show their upper-cased name.
    #[must_use]
    pub fn facet_title(&self, facet: &str) -> String {
        self.facet_titles.get(facet).cloned().unwrap_or_else(|| facet.to_uppercase())
    }

    /// Label for a category tag; unknown tags show as-is, a missing tag shows
    /// [`NOT_SPECIFIED`].
    #[must_use]
    pub fn category_label(&self, category: Option<&str>) -> String {
        match category.filter(|c| !c.is_empty()) {
            Some(tag) => self.category_labels.get(tag).cloned().unwrap_or_else(|| tag.to_string()),
            None => NOT_SPECIFIED.to_string(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::from_config(&BrowserConfig::default())
    }
}

fn merged(builtin: &[(&str, &str)], overrides: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    builtin
        .iter()
        .map(|(key, label)| ((*key).to_string(), (*label).to_string()))
        .chain(overrides.iter().map(|(key, label)| (key.clone(), label.clone())))
        .collect()
}
