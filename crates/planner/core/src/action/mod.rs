//! Actions accepted by the build reducer.
//!
//! [`BuildAction`] is the typed form the engine matches on. The wire form,
//! `{"type": ..., "payload": ...}`, is decoded through [`ActionEnvelope`]
//! (requires the `serde` feature) so an unknown `type` surfaces as an error
//! instead of being dropped.
#[cfg(feature = "serde")]
mod wire;

#[cfg(feature = "serde")]
pub use wire::ActionEnvelope;

use crate::catalog::{CareerId, CharacterId, ItemType};

/// Kinds of actions the reducer handles.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum ActionKind {
    /// Select a character; resets career and equipment.
    Character,
    /// Select a career of the current character; resets equipment.
    Career,
    /// Select one talent in a row.
    Talent,
    /// Put an item into a loadout slot.
    Equip,
}

/// Single user edit of the build.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "payload", rename_all = "lowercase")
)]
pub enum BuildAction {
    Character(CharacterId),
    Career(CareerId),
    Talent { row_index: usize, talent_index: usize },
    Equip { slot_index: usize, item: ItemType },
}

impl BuildAction {
    pub fn character(id: impl Into<CharacterId>) -> Self {
        Self::Character(id.into())
    }

    pub fn career(id: impl Into<CareerId>) -> Self {
        Self::Career(id.into())
    }

    pub fn talent(row_index: usize, talent_index: usize) -> Self {
        Self::Talent {
            row_index,
            talent_index,
        }
    }

    pub fn equip(slot_index: usize, item: impl Into<ItemType>) -> Self {
        Self::Equip {
            slot_index,
            item: item.into(),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Character(_) => ActionKind::Character,
            Self::Career(_) => ActionKind::Career,
            Self::Talent { .. } => ActionKind::Talent,
            Self::Equip { .. } => ActionKind::Equip,
        }
    }
}
