//! Localization dictionary loader.

use std::path::Path;

use planner_core::LocaleTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for flat `key → text` JSON dictionaries.
pub struct LocaleLoader;

impl LocaleLoader {
    /// Load a dictionary from a JSON file.
    ///
    /// File format:
    /// ```json
    /// { "es_mercenary": "Mercenary", "es_merc_a1_desc": "Reduces damage by %.1f%%." }
    /// ```
    pub fn load(path: &Path) -> LoadResult<LocaleTable> {
        let content = read_file(path)?;
        serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse locale JSON at {}: {}", path.display(), e)
        })
    }
}
