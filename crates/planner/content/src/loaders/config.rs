//! Planner configuration loader.

use std::path::Path;

use planner_core::PlannerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for planner configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing PlannerConfig
    pub fn load(path: &Path) -> LoadResult<PlannerConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Load config data, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> LoadResult<PlannerConfig> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(PlannerConfig::default())
        }
    }

    pub fn parse(content: &str) -> LoadResult<PlannerConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
