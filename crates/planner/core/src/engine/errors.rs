//! Error types for the build reducer.

use crate::action::ActionKind;
use crate::catalog::{CareerId, CatalogError, CharacterId, ItemType};
use crate::error::{ErrorSeverity, PlannerError};

/// Errors surfaced while reducing an action into the next build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReduceError {
    #[error("action \"{kind}\" not matched")]
    UnhandledAction { kind: String },

    #[error("malformed {kind} payload: {message}")]
    MalformedPayload { kind: ActionKind, message: String },

    #[error("unknown character '{0}'")]
    UnknownCharacter(CharacterId),

    #[error("career '{career}' is not available to character '{character}'")]
    CareerNotAvailable {
        career: CareerId,
        character: CharacterId,
    },

    #[error("talent row {row_index} is outside the {rows}-row tree")]
    TalentRowOutOfRange { row_index: usize, rows: usize },

    #[error("talent {talent_index} is outside row {row_index} of width {width}")]
    TalentIndexOutOfRange {
        row_index: usize,
        talent_index: usize,
        width: usize,
    },

    #[error("equipment slot {slot_index} is outside the {slots}-slot loadout")]
    SlotOutOfRange { slot_index: usize, slots: usize },

    #[error("item '{item}' cannot be wielded by '{career}' in slot '{slot}'")]
    ItemNotWieldable {
        item: ItemType,
        career: CareerId,
        slot: String,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl PlannerError for ReduceError {
    fn severity(&self) -> ErrorSeverity {
        use ReduceError::*;
        match self {
            // Caller bugs must never be swallowed
            UnhandledAction { .. } | MalformedPayload { .. } => ErrorSeverity::Fatal,

            UnknownCharacter(_)
            | CareerNotAvailable { .. }
            | TalentRowOutOfRange { .. }
            | TalentIndexOutOfRange { .. }
            | SlotOutOfRange { .. }
            | ItemNotWieldable { .. } => ErrorSeverity::Validation,

            Catalog(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use ReduceError::*;
        match self {
            UnhandledAction { .. } => "REDUCE_UNHANDLED_ACTION",
            MalformedPayload { .. } => "REDUCE_MALFORMED_PAYLOAD",
            UnknownCharacter(_) => "REDUCE_UNKNOWN_CHARACTER",
            CareerNotAvailable { .. } => "REDUCE_CAREER_NOT_AVAILABLE",
            TalentRowOutOfRange { .. } => "REDUCE_TALENT_ROW_OUT_OF_RANGE",
            TalentIndexOutOfRange { .. } => "REDUCE_TALENT_INDEX_OUT_OF_RANGE",
            SlotOutOfRange { .. } => "REDUCE_SLOT_OUT_OF_RANGE",
            ItemNotWieldable { .. } => "REDUCE_ITEM_NOT_WIELDABLE",
            Catalog(err) => err.error_code(),
        }
    }
}
