//! Content factory for loading everything a session needs from one directory.

use std::path::{Path, PathBuf};

use planner_core::{Catalog, LocaleTable, PlannerConfig};

use crate::loaders::{ConfigLoader, DataLoader, LoadResult, LocaleLoader};

/// Everything loaded from a data directory.
#[derive(Clone, Debug)]
pub struct Content {
    pub catalog: Catalog,
    pub locale: LocaleTable,
    pub config: PlannerConfig,
}

/// Content factory that loads planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── planner.toml   (optional)
/// ├── data.json
/// └── locales/
///     ├── en.json
///     └── de.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load planner configuration from `planner.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<PlannerConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("planner.toml"))
    }

    /// Load reference tables from `data.json`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        DataLoader::load(&self.data_dir.join("data.json"))
    }

    /// Load the dictionary for `locale` from `locales/{locale}.json`.
    pub fn load_locale(&self, locale: &str) -> LoadResult<LocaleTable> {
        let path = self.data_dir.join("locales").join(format!("{}.json", locale));
        LocaleLoader::load(&path)
    }

    /// Load config, catalog, and the configured locale.
    ///
    /// `locale_override` wins over the locale named in the config.
    pub fn load_all(&self, locale_override: Option<&str>) -> LoadResult<Content> {
        let mut config = self.load_config()?;
        if let Some(locale) = locale_override {
            config.locale = locale.to_owned();
        }
        let catalog = self.load_catalog()?;
        let locale = self.load_locale(&config.locale)?;

        Ok(Content {
            catalog,
            locale,
            config,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
