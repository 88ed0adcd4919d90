//! Public API for browsing a loaded catalog.
//!
//! The main entry point is [`Browser`], which owns a catalog and the user's
//! search state and exposes presentation-ready view models.

pub mod browser;
pub mod debounce;
pub mod labels;
pub mod types;

pub use browser::{Browser, BrowserState};
pub use debounce::Debouncer;
pub use labels::Labels;
pub use types::{
    ActiveFilterChip, BrowserSnapshot, FacetBadge, FacetGroup, RecordCard, RecordDetail, ResultPage,
};
