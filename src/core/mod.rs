pub mod catalog;
pub mod common;
pub mod config;
pub mod filter;
pub mod pager;
pub mod query;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::config::{BrowserConfig, ViewMode};
