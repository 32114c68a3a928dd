use crate::catalog::CharacterId;
use crate::describe::CorrectionRule;

/// Planner configuration and tunable defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Localization dictionary to load (`locales/<locale>.json`).
    pub locale: String,

    /// Character selected in a fresh build. `None` picks the first listed
    /// character.
    pub default_character: Option<CharacterId>,

    /// Game version stamped into new builds.
    pub game_version: Option<String>,

    /// Extra key-specific template fixes, applied after the built-in ones.
    pub template_corrections: Vec<CorrectionRule>,
}

impl PlannerConfig {
    pub const DEFAULT_LOCALE: &'static str = "en";

    pub fn new() -> Self {
        Self {
            locale: Self::DEFAULT_LOCALE.to_owned(),
            default_character: None,
            game_version: None,
            template_corrections: Vec::new(),
        }
    }

    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::new()
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
