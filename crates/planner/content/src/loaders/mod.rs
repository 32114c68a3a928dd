//! Content loaders for reading planner data from files.
//!
//! This module provides loaders that convert JSON/TOML files into the
//! planner-core catalog, locale, and config types.

pub mod config;
pub mod data;
pub mod factory;
pub mod locale;

pub use config::ConfigLoader;
pub use data::{DataLoader, GeneratedData};
pub use factory::{Content, ContentFactory};
pub use locale::LocaleLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
