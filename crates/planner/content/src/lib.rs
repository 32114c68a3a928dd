//! Data-driven content and loaders.
//!
//! This crate reads the externally generated planner data and provides
//! loaders for:
//! - Reference tables (careers, talent trees, talents, items) from `data.json`
//! - Localization dictionaries from `locales/<lang>.json`
//! - Planner configuration from `planner.toml`
//!
//! Content is consumed read-only by sessions and never appears in a build.
//!
//! All loaders produce planner-core types directly.

pub mod loaders;

pub use loaders::{
    ConfigLoader, Content, ContentFactory, DataLoader, GeneratedData, LoadResult, LocaleLoader,
};

use std::path::PathBuf;

/// Directory of the sample data shipped with this crate.
pub fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
