//! The build being edited.
//!
//! A [`Build`] is a plain value. The engine never mutates a build in place:
//! every transition clones the previous snapshot and returns the new one.
use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{CareerId, CharacterId, ItemType};

/// Complete user-chosen configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Build {
    pub character: CharacterId,

    /// Always one of the careers listed for `character`.
    pub career: CareerId,

    /// Talent row index → selected talent index within the row.
    ///
    /// Sparse: rows without an entry are unselected. Switching career keeps
    /// these entries even though the new tree may differ.
    pub talents: BTreeMap<usize, usize>,

    /// Loadout slot index → item type.
    pub equipment: BTreeMap<usize, ItemType>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: BuildMetadata,
}

impl Build {
    pub fn new(
        character: CharacterId,
        career: CareerId,
        equipment: BTreeMap<usize, ItemType>,
    ) -> Self {
        Self {
            character,
            career,
            talents: BTreeMap::new(),
            equipment,
            metadata: BuildMetadata::default(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: BuildMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Selected talent index for `row_index`, if any.
    pub fn talent(&self, row_index: usize) -> Option<usize> {
        self.talents.get(&row_index).copied()
    }

    /// Item equipped in `slot_index`, if any.
    pub fn equipped(&self, slot_index: usize) -> Option<&ItemType> {
        self.equipment.get(&slot_index)
    }
}

/// Descriptive fields carried with a build.
///
/// No action writes these; they exist so a serialized build is complete.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildMetadata {
    pub name: String,
    pub description: String,
    pub tags: BTreeSet<String>,
    pub id: Option<String>,
    pub owner_id: Option<String>,
    pub game_version: Option<String>,
    pub tool_version: Option<String>,
}

impl BuildMetadata {
    /// Version of this crate, stamped as `tool_version`.
    pub const TOOL_VERSION: &'static str = env!("CARGO_PKG_VERSION");

    pub fn new(game_version: Option<String>) -> Self {
        Self {
            game_version,
            tool_version: Some(Self::TOOL_VERSION.to_owned()),
            ..Self::default()
        }
    }
}
