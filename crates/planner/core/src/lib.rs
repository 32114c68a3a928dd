//! Deterministic build-planning logic and reference-data types.
//!
//! `planner-core` defines the canonical rules (actions, reducer, derivations,
//! description formatting) and exposes pure APIs that can be reused by the
//! session layer and offline tools. All build mutation flows through
//! [`engine::BuildEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod catalog;
pub mod config;
pub mod describe;
pub mod engine;
pub mod error;
pub mod state;

#[cfg(test)]
pub(crate) mod fixtures;

pub use action::{ActionKind, BuildAction};
#[cfg(feature = "serde")]
pub use action::ActionEnvelope;
pub use catalog::{
    Ability, Career, CareerId, Catalog, CatalogError, CatalogOracle, Character, CharacterId,
    DescriptionValue, DescriptionValueType, Item, ItemType, Perk, TUTORIAL_CAREER, Talent,
    TalentTree,
};
pub use config::PlannerConfig;
pub use describe::{
    CorrectionRule, DescriptionFormatter, LocaleTable, Localizer, TemplateCorrections, sprintf,
};
pub use engine::{BuildEngine, ReduceError};
pub use error::{ErrorSeverity, PlannerError};
pub use state::{Build, BuildMetadata};
