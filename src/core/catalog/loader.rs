// src/core/catalog/loader.rs

//! Fetching and decoding the catalog document.
//!
//! The document has three top-level sections: `meta` (optional),
//! `events` and `filterOptions` (both required). Section contents are
//! decoded straight from the text so that JSON object order survives.

use super::CatalogStore;
use crate::core::common::LoadError;
use crate::core::types::{CatalogDocument, CatalogMeta, FacetCatalog, RawMeta, Record};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

/// Something that can produce the raw catalog document.
///
/// Futures are not required to be `Send`: loading happens once, on the UI
/// thread, and browser fetch futures are `!Send`.
#[async_trait(?Send)]
pub trait Fetch {
    /// Human-readable location, used in error messages.
    fn location(&self) -> &str;

    async fn fetch(&self) -> Result<String, LoadError>;
}

/// A document served over HTTP(S).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl Fetch for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        let to_unreachable = |e: reqwest::Error| LoadError::Unreachable {
            location: self.url.clone(),
            reason: e.to_string(),
        };

        let response = reqwest::get(&self.url).await.map_err(to_unreachable)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { location: self.url.clone(), status: status.as_u16() });
        }
        response.text().await.map_err(to_unreachable)
    }
}

/// A document on the local filesystem.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: std::path::PathBuf,
    display: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Fetch for FileSource {
    fn location(&self) -> &str {
        &self.display
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| LoadError::Unreachable {
            location: self.display.clone(),
            reason: e.to_string(),
        })
    }
}

/// A document the host already holds in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSource {
    label: String,
    text: String,
}

impl InlineSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self { label: label.into(), text: text.into() }
    }
}

#[async_trait(?Send)]
impl Fetch for InlineSource {
    fn location(&self) -> &str {
        &self.label
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.text.clone())
    }
}

/// Where a catalog comes from, resolved from a configured location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Http(HttpSource),
    #[cfg(not(target_arch = "wasm32"))]
    File(FileSource),
    Inline(InlineSource),
}

impl CatalogSource {
    /// `http://` and `https://` locations are fetched over HTTP; anything else
    /// is a file path. In the browser every location is treated as a URL.
    pub fn from_location(location: &str) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if !(location.starts_with("http://") || location.starts_with("https://")) {
            return Self::File(FileSource::new(location));
        }
        Self::Http(HttpSource::new(location))
    }
}

#[async_trait(?Send)]
impl Fetch for CatalogSource {
    fn location(&self) -> &str {
        match self {
            Self::Http(source) => source.location(),
            #[cfg(not(target_arch = "wasm32"))]
            Self::File(source) => source.location(),
            Self::Inline(source) => source.location(),
        }
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        match self {
            Self::Http(source) => source.fetch().await,
            #[cfg(not(target_arch = "wasm32"))]
            Self::File(source) => source.fetch().await,
            Self::Inline(source) => source.fetch().await,
        }
    }
}

#[derive(Deserialize)]
struct WireDocument {
    #[serde(default)]
    meta: Option<RawMeta>,
    events: Option<Vec<Record>>,
    #[serde(rename = "filterOptions")]
    filter_options: Option<FacetCatalog>,
}

/// Decodes a catalog document.
///
/// # Errors
///
/// `LoadError::MissingSection` when `events` or `filterOptions` is absent or
/// `null`; `LoadError::Json` when the text is not JSON or a section has the
/// wrong shape.
pub fn parse_document(text: &str) -> Result<CatalogDocument, LoadError> {
    let wire: WireDocument = serde_json::from_str(text)?;
    let records = wire.events.ok_or(LoadError::MissingSection("events"))?;
    let facets = wire.filter_options.ok_or(LoadError::MissingSection("filterOptions"))?;
    let meta = CatalogMeta::resolve(wire.meta.unwrap_or_default(), records.len());

    debug!(records = records.len(), facets = facets.len(), "catalog document decoded");
    Ok(CatalogDocument { meta, records, facets })
}

/// Fetches, decodes and indexes a catalog.
///
/// Retrying after a failure means calling this again; nothing is cached.
pub async fn load<F: Fetch + ?Sized>(source: &F) -> Result<CatalogStore, LoadError> {
    let text = source.fetch().await?;
    let document = parse_document(&text)?;
    info!(
        source = source.location(),
        records = document.records.len(),
        facets = document.facets.len(),
        last_updated = %document.meta.last_updated,
        "catalog loaded"
    );
    Ok(CatalogStore::from_document(document))
}
