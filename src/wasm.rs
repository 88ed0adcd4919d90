//! `wasm-bindgen` facade over [`Browser`].
//!
//! Structured outputs cross the boundary as JSON strings.

use crate::api::Browser;
use crate::core::catalog::{CatalogStore, parse_document};
use crate::core::config::{BrowserConfig, ViewMode};
use crate::core::query::SortMode;
use crate::core::types::record_id_from_f64;
use serde::Serialize;
use std::time::Duration;
use wasm_bindgen::prelude::*;

fn to_js<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(to_js)
}

/// Host clock in milliseconds, e.g. `performance.now()`.
fn millis(now_ms: f64) -> Duration {
    Duration::try_from_secs_f64(now_ms.max(0.0) / 1000.0).unwrap_or_default()
}

/// Parses an optional JSON config; unset fields take their defaults.
fn config_from_json(config_json: Option<String>) -> Result<BrowserConfig, JsValue> {
    let config: BrowserConfig = match config_json.as_deref() {
        Some(json) if !json.trim().is_empty() => serde_json::from_str(json).map_err(to_js)?,
        _ => BrowserConfig::default(),
    };
    config.validate().map_err(to_js)?;
    Ok(config)
}

#[wasm_bindgen]
pub struct WasmBrowser {
    inner: Browser,
}

#[wasm_bindgen]
impl WasmBrowser {
    /// Fetches the catalog at `url` and starts a session.
    pub async fn load(url: String, config_json: Option<String>) -> Result<WasmBrowser, JsValue> {
        let mut config = config_from_json(config_json)?;
        config.source = url;
        let inner = Browser::load(config).await.map_err(to_js)?;
        Ok(WasmBrowser { inner })
    }

    /// Starts a session over a catalog document the page already holds.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(text: &str, config_json: Option<String>) -> Result<WasmBrowser, JsValue> {
        let config = config_from_json(config_json)?;
        let store = CatalogStore::from_document(parse_document(text).map_err(to_js)?);
        Ok(WasmBrowser { inner: Browser::new(store, config) })
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, text: &str) {
        self.inner.set_query(text);
    }

    #[wasm_bindgen(js_name = clearSearch)]
    pub fn clear_search(&mut self) {
        self.inner.clear_search();
    }

    #[wasm_bindgen(js_name = inputQuery)]
    pub fn input_query(&mut self, text: &str, now_ms: f64) {
        self.inner.input_query(text, millis(now_ms));
    }

    #[wasm_bindgen(js_name = pollInput)]
    pub fn poll_input(&mut self, now_ms: f64) -> bool {
        self.inner.poll_input(millis(now_ms))
    }

    #[wasm_bindgen(js_name = flushInput)]
    pub fn flush_input(&mut self) -> bool {
        self.inner.flush_input()
    }

    #[wasm_bindgen(js_name = toggleFacet)]
    pub fn toggle_facet(&mut self, facet: &str, option_id: &str) -> bool {
        self.inner.toggle_facet(facet, option_id)
    }

    #[wasm_bindgen(js_name = removeFacet)]
    pub fn remove_facet(&mut self, facet: &str, option_id: &str) -> bool {
        self.inner.remove_facet(facet, option_id)
    }

    #[wasm_bindgen(js_name = resetFilters)]
    pub fn reset_filters(&mut self) {
        self.inner.reset_filters();
    }

    #[wasm_bindgen(js_name = setSort)]
    pub fn set_sort(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: SortMode = mode.parse().map_err(to_js)?;
        self.inner.set_sort(mode);
        Ok(())
    }

    #[wasm_bindgen(js_name = setPage)]
    pub fn set_page(&mut self, number: usize) -> bool {
        self.inner.set_page(number)
    }

    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) -> bool {
        self.inner.next_page()
    }

    #[wasm_bindgen(js_name = previousPage)]
    pub fn previous_page(&mut self) -> bool {
        self.inner.previous_page()
    }

    #[wasm_bindgen(js_name = setView)]
    pub fn set_view(&mut self, view: &str) -> Result<(), JsValue> {
        let view = match view {
            "grid" => ViewMode::Grid,
            "list" => ViewMode::List,
            other => return Err(JsValue::from_str(&format!("unknown view mode '{other}'"))),
        };
        self.inner.set_view(view);
        Ok(())
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        to_json(&self.inner.snapshot())
    }

    pub fn cards(&self) -> Result<String, JsValue> {
        to_json(&self.inner.cards())
    }

    #[wasm_bindgen(js_name = pageWindow)]
    pub fn page_window(&self) -> Result<String, JsValue> {
        to_json(&self.inner.page_window())
    }

    #[wasm_bindgen(js_name = activeFilters)]
    pub fn active_filters(&self) -> Result<String, JsValue> {
        to_json(&self.inner.active_filters())
    }

    /// The facet catalog, for building the filter panel.
    pub fn facets(&self) -> Result<String, JsValue> {
        to_json(self.inner.store().facets())
    }

    /// Selected options as `{ facet: [option, ...] }`.
    pub fn selection(&self) -> Result<String, JsValue> {
        to_json(&self.inner.state().selection)
    }

    /// JSON for the record's details, or `null` when the id is unknown or
    /// not a non-negative safe integer.
    #[wasm_bindgen(js_name = recordDetail)]
    pub fn record_detail(&self, id: f64) -> Result<String, JsValue> {
        let detail = record_id_from_f64(id).and_then(|id| self.inner.select_record(id));
        to_json(&detail)
    }
}
