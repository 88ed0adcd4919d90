// src/api/browser.rs
//! A catalog browsing session.
//!
//! `Browser` owns the loaded catalog and the user's state. Every intent that
//! changes what matches re-runs the query engine over the full catalog and
//! returns to page 1; paging and view changes never re-run it.

use crate::api::debounce::Debouncer;
use crate::api::labels::Labels;
use crate::api::types::{ActiveFilterChip, BrowserSnapshot, RecordCard, RecordDetail, ResultPage};
use crate::core::catalog::{self, CatalogSource, CatalogStore, Fetch};
use crate::core::common::LoadError;
use crate::core::config::{BrowserConfig, ViewMode};
use crate::core::filter::FilterSelection;
use crate::core::pager::{self, PageWindow};
use crate::core::query::{search_indices, SortMode};
use crate::core::types::{Record, RecordId};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// User-controlled state of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserState {
    /// Raw search text as typed.
    pub query: String,
    pub selection: FilterSelection,
    pub sort: SortMode,
    /// 1-based current page.
    pub page: usize,
    pub view: ViewMode,
}

impl BrowserState {
    fn from_config(config: &BrowserConfig) -> Self {
        Self {
            query: String::new(),
            selection: FilterSelection::new(),
            sort: config.default_sort,
            page: 1,
            view: config.default_view,
        }
    }
}

#[derive(Debug)]
pub struct Browser {
    store: CatalogStore,
    config: BrowserConfig,
    labels: Labels,
    state: BrowserState,
    /// Positions in `store.records()` of the current results, in order.
    results: Vec<usize>,
    input: Debouncer<String>,
}

impl Browser {
    /// Starts a session over an already loaded catalog, showing every record.
    pub fn new(store: CatalogStore, config: BrowserConfig) -> Self {
        let mut browser = Self {
            labels: Labels::from_config(&config),
            state: BrowserState::from_config(&config),
            input: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            results: Vec::new(),
            store,
            config,
        };
        browser.recompute();
        browser
    }

    /// Loads the catalog named by `config.source` and starts a session.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`] from fetching or decoding the document. Calling this
    /// again is the retry.
    pub async fn load(config: BrowserConfig) -> Result<Self, LoadError> {
        let source = CatalogSource::from_location(&config.source);
        Self::load_from(&source, config).await
    }

    /// Loads the catalog from an explicit source and starts a session.
    pub async fn load_from<F: Fetch + ?Sized>(source: &F, config: BrowserConfig) -> Result<Self, LoadError> {
        let store = catalog::load(source).await?;
        Ok(Self::new(store, config))
    }

    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &BrowserConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &BrowserState {
        &self.state
    }

    fn recompute(&mut self) {
        self.results = search_indices(
            self.store.records(),
            &self.state.query,
            &self.state.selection,
            self.state.sort,
        );
        self.state.page = 1;
    }

    // --- intents ---

    pub fn set_query(&mut self, text: &str) {
        self.input.cancel();
        self.state.query = text.to_string();
        self.recompute();
    }

    pub fn clear_search(&mut self) {
        self.set_query("");
    }

    /// Records a keystroke-level change of the search text. The search runs
    /// once input has been quiet for the configured debounce period.
    pub fn input_query(&mut self, text: &str, now: Duration) {
        self.input.push(text.to_string(), now);
    }

    /// Applies debounced input that has become ready. Returns `true` if a
    /// search ran.
    pub fn poll_input(&mut self, now: Duration) -> bool {
        self.input.poll(now).is_some_and(|text| self.apply_input(text))
    }

    /// Applies pending input immediately, e.g. when the user presses enter.
    pub fn flush_input(&mut self) -> bool {
        self.input.flush().is_some_and(|text| self.apply_input(text))
    }

    /// When pending input becomes ready, for hosts that schedule a timer.
    #[must_use]
    pub fn input_deadline(&self) -> Option<Duration> {
        self.input.deadline()
    }

    fn apply_input(&mut self, text: String) -> bool {
        self.state.query = text;
        self.recompute();
        true
    }

    /// Toggles one facet option. Options the catalog does not list are
    /// ignored. Returns `true` if the option is selected afterwards.
    pub fn toggle_facet(&mut self, facet: &str, option_id: &str) -> bool {
        if self.store.facet_option(facet, option_id).is_none() {
            warn!(facet, option = option_id, "ignoring toggle of unknown facet option");
            return false;
        }
        let selected = self.state.selection.toggle(facet, option_id);
        self.recompute();
        selected
    }

    /// Deselects one facet option. Returns `false` if it was not selected.
    pub fn remove_facet(&mut self, facet: &str, option_id: &str) -> bool {
        let removed = self.state.selection.remove(facet, option_id);
        if removed {
            self.recompute();
        }
        removed
    }

    /// Clears every facet selection and the search text.
    pub fn reset_filters(&mut self) {
        self.input.cancel();
        self.state.selection.reset();
        self.state.query.clear();
        self.recompute();
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        self.state.sort = mode;
        self.recompute();
    }

    /// Moves to page `number`, clamped to the available pages. Returns `true`
    /// if the current page changed.
    pub fn set_page(&mut self, number: usize) -> bool {
        let clamped = number.clamp(1, self.total_pages());
        let changed = clamped != self.state.page;
        self.state.page = clamped;
        changed
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.state.page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> bool {
        self.set_page(self.state.page.saturating_sub(1))
    }

    /// Switches between grid and list rendering. Results and page are kept.
    pub fn set_view(&mut self, view: ViewMode) {
        self.state.view = view;
    }

    /// Full details of a record anywhere in the catalog, regardless of the
    /// current filters.
    #[must_use]
    pub fn select_record(&self, id: RecordId) -> Option<RecordDetail> {
        let Some(record) = self.store.find(id) else {
            warn!(id, "selected record is not in the catalog");
            return None;
        };
        debug!(id, "record selected");
        Some(RecordDetail::build(record, self.store.facets(), &self.labels))
    }

    // --- outputs ---

    /// Every matching record, in result order.
    pub fn results(&self) -> impl Iterator<Item = &Record> + '_ {
        let records = self.store.records();
        self.results.iter().map(move |&index| &records[index])
    }

    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.results.len(), self.config.page_size)
    }

    #[must_use]
    pub fn current_page(&self) -> ResultPage<'_> {
        let page = pager::page(&self.results, self.config.page_size, self.state.page);
        let records = self.store.records();
        ResultPage {
            records: page.items.iter().map(|&index| &records[index]).collect(),
            number: page.number,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }

    #[must_use]
    pub fn page_window(&self) -> PageWindow {
        pager::page_window(self.state.page, self.total_pages(), self.config.max_visible_pages)
    }

    /// Cards for the current page, sized for the current view.
    #[must_use]
    pub fn cards(&self) -> Vec<RecordCard> {
        let excerpt_chars = self.config.excerpt_chars(self.state.view);
        self.current_page()
            .records
            .into_iter()
            .map(|record| RecordCard::build(record, self.store.facets(), &self.labels, excerpt_chars))
            .collect()
    }

    /// One chip per selected option. Options missing from the catalog get no
    /// chip.
    #[must_use]
    pub fn active_filters(&self) -> Vec<ActiveFilterChip> {
        self.state
            .selection
            .iter()
            .flat_map(|(facet, options)| options.iter().map(move |option_id| (facet, option_id)))
            .filter_map(|(facet, option_id)| {
                let Some(option) = self.store.facet_option(facet, option_id) else {
                    warn!(facet, option = %option_id, "active filter has no catalog option");
                    return None;
                };
                Some(ActiveFilterChip {
                    facet: facet.to_string(),
                    option_id: option.id.clone(),
                    label: option.display_name().to_string(),
                    icon: option.icon.clone(),
                })
            })
            .collect()
    }

    /// Facet title for display, honoring configured overrides.
    #[must_use]
    pub fn facet_title(&self, facet: &str) -> String {
        self.labels.facet_title(facet)
    }

    #[must_use]
    pub fn snapshot(&self) -> BrowserSnapshot {
        let meta = self.store.meta();
        BrowserSnapshot {
            catalog_size: meta.total_records,
            last_updated: meta.last_updated.clone(),
            query: self.state.query.clone(),
            sort: self.state.sort,
            view: self.state.view,
            active_filter_count: self.state.selection.count(),
            result_count: self.results.len(),
            page: self.state.page,
            total_pages: self.total_pages(),
            no_results: self.results.is_empty(),
        }
    }
}
