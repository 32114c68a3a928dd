//! Reference-data integrity errors.

use crate::catalog::{CareerId, CharacterId};
use crate::error::{ErrorSeverity, PlannerError};

/// Errors raised when the reference tables do not agree with each other.
///
/// These indicate that the generated data document is internally
/// inconsistent. They are never the user's fault and are not retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    #[error("catalog lists no characters")]
    NoCharacters,

    #[error("character '{0}' not found")]
    CharacterNotFound(CharacterId),

    #[error("career '{0}' not found")]
    CareerNotFound(CareerId),

    #[error("character '{0}' has no selectable careers")]
    NoCareers(CharacterId),

    #[error("character '{character}' has no talent tree #{index}")]
    TalentTreeNotFound { character: CharacterId, index: usize },

    #[error("character '{character}' has no talent named '{name}'")]
    TalentNotFound { character: CharacterId, name: String },

    #[error("no item for slot '{slot}' can be wielded by career '{career}'")]
    NoDefaultItem { career: CareerId, slot: String },
}

impl PlannerError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            NoCharacters => "CATALOG_NO_CHARACTERS",
            CharacterNotFound(_) => "CATALOG_CHARACTER_NOT_FOUND",
            CareerNotFound(_) => "CATALOG_CAREER_NOT_FOUND",
            NoCareers(_) => "CATALOG_NO_CAREERS",
            TalentTreeNotFound { .. } => "CATALOG_TALENT_TREE_NOT_FOUND",
            TalentNotFound { .. } => "CATALOG_TALENT_NOT_FOUND",
            NoDefaultItem { .. } => "CATALOG_NO_DEFAULT_ITEM",
        }
    }
}
