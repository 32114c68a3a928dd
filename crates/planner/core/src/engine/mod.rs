//! Build reducer.
//!
//! The [`BuildEngine`] is the authoritative reducer for [`Build`]. It reads
//! reference data through a [`CatalogOracle`] and maps `(build, action)` to the
//! next build without touching the input. Invalid requests are rejected with a
//! [`ReduceError`] and the caller keeps its previous snapshot.

mod errors;

pub use errors::ReduceError;

use crate::action::BuildAction;
use crate::catalog::{Career, CareerId, CatalogError, CatalogOracle, CharacterId, ItemType};
use crate::state::{Build, BuildMetadata};

#[cfg(feature = "serde")]
use crate::action::ActionEnvelope;

/// Pure reducer over a read-only catalog.
#[derive(Clone, Copy)]
pub struct BuildEngine<'a> {
    catalog: &'a dyn CatalogOracle,
}

impl<'a> BuildEngine<'a> {
    pub fn new(catalog: &'a dyn CatalogOracle) -> Self {
        Self { catalog }
    }

    /// Creates the starting build.
    ///
    /// Uses `character` when given, otherwise the first listed character,
    /// with its default career and that career's default loadout.
    pub fn initial_build(
        &self,
        character: Option<&CharacterId>,
        metadata: BuildMetadata,
    ) -> Result<Build, ReduceError> {
        let character = match character {
            Some(id) => self.require_character(id)?,
            None => self
                .catalog
                .characters()
                .first()
                .map(|character| character.id.clone())
                .ok_or(CatalogError::NoCharacters)?,
        };
        let career = self.catalog.default_career(&character)?;
        let equipment = self.catalog.default_equipment(career)?;

        Ok(Build::new(character, career.id.clone(), equipment).with_metadata(metadata))
    }

    /// Applies `action` to `state` and returns the next build.
    pub fn reduce(&self, state: &Build, action: &BuildAction) -> Result<Build, ReduceError> {
        match action {
            BuildAction::Character(character) => self.select_character(state, character),
            BuildAction::Career(career) => self.select_career(state, career),
            BuildAction::Talent {
                row_index,
                talent_index,
            } => self.select_talent(state, *row_index, *talent_index),
            BuildAction::Equip { slot_index, item } => self.equip(state, *slot_index, item),
        }
    }

    /// Decodes a wire action and applies it.
    #[cfg(feature = "serde")]
    pub fn reduce_envelope(
        &self,
        state: &Build,
        envelope: ActionEnvelope,
    ) -> Result<Build, ReduceError> {
        let action = envelope.decode()?;
        self.reduce(state, &action)
    }

    fn select_character(&self, state: &Build, character: &CharacterId) -> Result<Build, ReduceError> {
        let character = self.require_character(character)?;
        let career = self.catalog.default_career(&character)?;
        let equipment = self.catalog.default_equipment(career)?;

        Ok(Build {
            character,
            career: career.id.clone(),
            equipment,
            ..state.clone()
        })
    }

    /// Talents are kept on purpose: only the loadout follows the career.
    fn select_career(&self, state: &Build, career: &CareerId) -> Result<Build, ReduceError> {
        let career = self
            .catalog
            .careers_for_character(&state.character)
            .into_iter()
            .find(|candidate| &candidate.id == career)
            .ok_or_else(|| ReduceError::CareerNotAvailable {
                career: career.clone(),
                character: state.character.clone(),
            })?;
        let equipment = self.catalog.default_equipment(career)?;

        Ok(Build {
            career: career.id.clone(),
            equipment,
            ..state.clone()
        })
    }

    fn select_talent(
        &self,
        state: &Build,
        row_index: usize,
        talent_index: usize,
    ) -> Result<Build, ReduceError> {
        let career = self.current_career(state)?;
        let tree = self.catalog.talent_tree_for_career(&state.character, career)?;
        let row = tree.row(row_index).ok_or(ReduceError::TalentRowOutOfRange {
            row_index,
            rows: tree.len(),
        })?;
        if talent_index >= row.len() {
            return Err(ReduceError::TalentIndexOutOfRange {
                row_index,
                talent_index,
                width: row.len(),
            });
        }

        let mut next = state.clone();
        next.talents.insert(row_index, talent_index);
        Ok(next)
    }

    fn equip(&self, state: &Build, slot_index: usize, item: &ItemType) -> Result<Build, ReduceError> {
        let career = self.current_career(state)?;
        let slots = &career.loadout_equipment_slots;
        let slot = slots.get(slot_index).ok_or(ReduceError::SlotOutOfRange {
            slot_index,
            slots: slots.len(),
        })?;
        let wieldable = self
            .catalog
            .items_for_career_and_slot(&career.id, slot)
            .iter()
            .any(|candidate| &candidate.item_type == item);
        if !wieldable {
            return Err(ReduceError::ItemNotWieldable {
                item: item.clone(),
                career: career.id.clone(),
                slot: slot.clone(),
            });
        }

        let mut next = state.clone();
        next.equipment.insert(slot_index, item.clone());
        Ok(next)
    }

    fn current_career(&self, state: &Build) -> Result<&'a Career, CatalogError> {
        self.catalog
            .career(&state.career)
            .ok_or_else(|| CatalogError::CareerNotFound(state.career.clone()))
    }

    fn require_character(&self, id: &CharacterId) -> Result<CharacterId, ReduceError> {
        self.catalog
            .character(id)
            .map(|character| character.id.clone())
            .ok_or_else(|| ReduceError::UnknownCharacter(id.clone()))
    }
}
