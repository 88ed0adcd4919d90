// src/core/config.rs

use crate::core::common::ConfigError;
use crate::core::query::SortMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Layout used to render result cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Configuration for a catalog browser session.
///
/// Every field has a default, so a TOML file only needs to name the settings
/// it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrowserConfig {
    /// Where the catalog document lives: an `http(s)://` URL or a file path.
    pub source: String,
    pub page_size: usize,
    /// Quiet period before a burst of text input triggers a search.
    pub debounce_ms: u64,
    pub default_sort: SortMode,
    pub default_view: ViewMode,
    /// Width of the page-number window in the pager.
    pub max_visible_pages: usize,
    pub grid_excerpt_chars: usize,
    pub list_excerpt_chars: usize,
    /// Overrides for facet titles, keyed by facet name.
    pub facet_titles: BTreeMap<String, String>,
    /// Overrides for category labels, keyed by category tag.
    pub category_labels: BTreeMap<String, String>,
}

/// Builder for [`BrowserConfig`].
#[derive(Debug, Clone, Default)]
pub struct BrowserConfigBuilder {
    source: Option<String>,
    page_size: Option<usize>,
    debounce_ms: Option<u64>,
    default_sort: Option<SortMode>,
    default_view: Option<ViewMode>,
    max_visible_pages: Option<usize>,
    grid_excerpt_chars: Option<usize>,
    list_excerpt_chars: Option<usize>,
    facet_titles: BTreeMap<String, String>,
    category_labels: BTreeMap<String, String>,
}

impl BrowserConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn debounce_ms(mut self, millis: u64) -> Self {
        self.debounce_ms = Some(millis);
        self
    }

    pub fn default_sort(mut self, mode: SortMode) -> Self {
        self.default_sort = Some(mode);
        self
    }

    pub fn default_view(mut self, view: ViewMode) -> Self {
        self.default_view = Some(view);
        self
    }

    pub fn max_visible_pages(mut self, pages: usize) -> Self {
        self.max_visible_pages = Some(pages);
        self
    }

    pub fn grid_excerpt_chars(mut self, chars: usize) -> Self {
        self.grid_excerpt_chars = Some(chars);
        self
    }

    pub fn list_excerpt_chars(mut self, chars: usize) -> Self {
        self.list_excerpt_chars = Some(chars);
        self
    }

    pub fn facet_title(mut self, facet: impl Into<String>, title: impl Into<String>) -> Self {
        self.facet_titles.insert(facet.into(), title.into());
        self
    }

    pub fn category_label(mut self, category: impl Into<String>, label: impl Into<String>) -> Self {
        self.category_labels.insert(category.into(), label.into());
        self
    }

    /// Builds the configuration and validates it.
    pub fn build(self) -> Result<BrowserConfig, ConfigError> {
        let defaults = BrowserConfig::default();
        let config = BrowserConfig {
            source: self.source.unwrap_or(defaults.source),
            page_size: self.page_size.unwrap_or(defaults.page_size),
            debounce_ms: self.debounce_ms.unwrap_or(defaults.debounce_ms),
            default_sort: self.default_sort.unwrap_or(defaults.default_sort),
            default_view: self.default_view.unwrap_or(defaults.default_view),
            max_visible_pages: self.max_visible_pages.unwrap_or(defaults.max_visible_pages),
            grid_excerpt_chars: self.grid_excerpt_chars.unwrap_or(defaults.grid_excerpt_chars),
            list_excerpt_chars: self.list_excerpt_chars.unwrap_or(defaults.list_excerpt_chars),
            facet_titles: self.facet_titles,
            category_labels: self.category_labels,
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            source: "events_glossary.json".to_string(),
            page_size: 12,
            debounce_ms: 300,
            default_sort: SortMode::Relevance,
            default_view: ViewMode::Grid,
            max_visible_pages: 5,
            grid_excerpt_chars: 120,
            list_excerpt_chars: 150,
            facet_titles: BTreeMap::new(),
            category_labels: BTreeMap::new(),
        }
    }
}

impl BrowserConfig {
    pub fn builder() -> BrowserConfigBuilder {
        BrowserConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.trim().is_empty() {
            return Err(ConfigError::Invalid("source must not be empty".to_string()));
        }

        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be greater than 0".to_string()));
        }

        if self.max_visible_pages == 0 {
            return Err(ConfigError::Invalid(
                "max_visible_pages must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Excerpt length for cards rendered in `view`.
    #[must_use]
    pub const fn excerpt_chars(&self, view: ViewMode) -> usize {
        match view {
            ViewMode::Grid => self.grid_excerpt_chars,
            ViewMode::List => self.list_excerpt_chars,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the file is not valid TOML for this
    /// struct, `ConfigError::Invalid` if it fails validation, and
    /// `ConfigError::Io` for any other read failure.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;

                config.validate()?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    /// Loads from `optional_path` when given, otherwise returns the defaults.
    pub fn load_or_default(optional_path: Option<&Path>) -> Result<Self, ConfigError> {
        match optional_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Small pages and no debounce, for exercising paging and input handling.
    pub fn for_testing() -> Result<Self, ConfigError> {
        Self::builder().page_size(4).debounce_ms(0).max_visible_pages(3).build()
    }
}
