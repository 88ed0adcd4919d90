#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::cast_sign_loss)]
#![forbid(unsafe_code)]
#![warn(clippy::module_inception, clippy::wildcard_imports, clippy::correctness, clippy::perf, clippy::style, clippy::complexity)]
#![warn(clippy::missing_const_for_fn, clippy::all)]

//! # eventmatrix: a client-side catalog browser
//!
//! `eventmatrix` loads a catalog of event-format records from a JSON document
//! and lets a user narrow it down interactively. It features:
//! - Case-insensitive text search over names, definitions, goals, aliases
//!   and feature text
//! - Facet filters, ANDed across facets and ORed within a facet
//! - Relevance, name and identifier ordering
//! - Fixed-size paging with a page-number strip
//! - Presentation-ready view models and a `wasm-bindgen` facade for the
//!   browser
//!
//! Loading happens once per session; everything after that is a synchronous
//! recomputation over the in-memory catalog.

pub mod api;
pub mod core;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export key types for easier use by library consumers
pub use crate::api::{Browser, BrowserSnapshot, RecordCard, RecordDetail};
pub use crate::core::catalog::{CatalogSource, CatalogStore};
pub use crate::core::common::{ConfigError, EventMatrixError, LoadError};
pub use crate::core::config::{BrowserConfig, ViewMode};
pub use crate::core::filter::FilterSelection;
pub use crate::core::query::{search, SortMode};

/// Core result type for the library
pub type Result<T> = std::result::Result<T, EventMatrixError>;
