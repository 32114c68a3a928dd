//! Binary configuration read from the process environment.
use std::env;
use std::path::{Path, PathBuf};

/// Where the planner reads content and actions from.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub locale: Option<String>,
    /// JSON-lines action file; stdin when unset.
    pub actions: Option<PathBuf>,
    /// Directory for a log file in addition to stderr.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PLANNER_DATA_DIR` - Content directory (default: first of `./data`,
    ///   the user data directory, the bundled sample data)
    /// - `PLANNER_LOCALE` - Overrides the locale in `planner.toml`
    /// - `PLANNER_ACTIONS` - Action file (default: stdin)
    /// - `PLANNER_LOG_DIR` - Also write `planner.log` there
    pub fn from_env() -> Self {
        let data_dir = read_env::<PathBuf>("PLANNER_DATA_DIR")
            .unwrap_or_else(|| resolve_data_dir(&default_data_dirs()));

        Self {
            data_dir,
            locale: read_env("PLANNER_LOCALE"),
            actions: read_env("PLANNER_ACTIONS"),
            log_dir: read_env("PLANNER_LOG_DIR"),
        }
    }
}

/// Candidate content directories in lookup order.
fn default_data_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("./data")];
    if let Some(project) = directories::ProjectDirs::from("", "", "planner") {
        dirs.push(project.data_dir().to_path_buf());
    }
    dirs
}

/// First candidate holding a `data.json`, else the bundled sample data.
fn resolve_data_dir(candidates: &[PathBuf]) -> PathBuf {
    candidates
        .iter()
        .find(|dir| has_data(dir))
        .cloned()
        .unwrap_or_else(planner_content::bundled_data_dir)
}

fn has_data(dir: &Path) -> bool {
    dir.join("data.json").is_file()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|value| !value.is_empty())?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_directory_with_data_wins() {
        let empty = tempfile::tempdir().unwrap();
        let filled = tempfile::tempdir().unwrap();
        std::fs::write(filled.path().join("data.json"), "{}").unwrap();

        let candidates = [empty.path().to_path_buf(), filled.path().to_path_buf()];
        assert_eq!(resolve_data_dir(&candidates), filled.path());
    }

    #[test]
    fn falls_back_to_bundled_data() {
        let empty = tempfile::tempdir().unwrap();
        let resolved = resolve_data_dir(&[empty.path().to_path_buf()]);
        assert_eq!(resolved, planner_content::bundled_data_dir());
        assert!(has_data(&resolved));
    }
}
