//! Traits describing read-only reference data.
//!
//! The [`CatalogOracle`] exposes the career, talent and item tables and the
//! derivations every caller needs (careers of a character, default loadout,
//! talent lookup). The reducer and the formatter only talk to the trait, so
//! tests and tools can supply their own tables.
mod error;
mod snapshot;
mod types;

pub use error::CatalogError;
pub use snapshot::Catalog;
pub use types::{
    Ability, Career, CareerId, Character, CharacterId, DescriptionValue, DescriptionValueType,
    Item, ItemType, Perk, Talent, TalentTree,
};

use std::collections::BTreeMap;

/// Career id that is never selectable and hidden from every listing.
pub const TUTORIAL_CAREER: &str = "empire_soldier_tutorial";

/// Read-only access to the reference tables.
///
/// Required methods return tables in their stable table order. Provided
/// methods implement the derivations on top of them.
pub trait CatalogOracle {
    /// Characters in display order.
    fn characters(&self) -> &[Character];

    fn careers(&self) -> &[Career];

    fn talent_trees(&self, character: &CharacterId) -> Option<&[TalentTree]>;

    fn talents(&self, character: &CharacterId) -> Option<&[Talent]>;

    fn items(&self) -> &[Item];

    fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.characters().iter().find(|character| &character.id == id)
    }

    fn career(&self, id: &CareerId) -> Option<&Career> {
        self.careers().iter().find(|career| &career.id == id)
    }

    /// Selectable careers of `character`, ascending by `sort_order`.
    ///
    /// The tutorial career is always excluded. Equal sort orders keep table
    /// order.
    fn careers_for_character(&self, character: &CharacterId) -> Vec<&Career> {
        let mut careers: Vec<&Career> = self
            .careers()
            .iter()
            .filter(|career| career.id != TUTORIAL_CAREER)
            .filter(|career| &career.profile_name == character)
            .collect();
        careers.sort_by_key(|career| career.sort_order);
        careers
    }

    /// Career with the lowest sort order for `character`.
    fn default_career(&self, character: &CharacterId) -> Result<&Career, CatalogError> {
        self.careers_for_character(character)
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::NoCareers(character.clone()))
    }

    /// Talent tree selected by the career's 1-based `talent_tree_index`.
    fn talent_tree_for_career(
        &self,
        character: &CharacterId,
        career: &Career,
    ) -> Result<&TalentTree, CatalogError> {
        let missing = || CatalogError::TalentTreeNotFound {
            character: character.clone(),
            index: career.talent_tree_index,
        };
        let index = career.talent_tree_index.checked_sub(1).ok_or_else(missing)?;
        self.talent_trees(character)
            .and_then(|trees| trees.get(index))
            .ok_or_else(missing)
    }

    /// First talent of `character` named `name`.
    fn talent_by_name(&self, character: &CharacterId, name: &str) -> Result<&Talent, CatalogError> {
        self.talents(character)
            .and_then(|talents| talents.iter().find(|talent| talent.name == name))
            .ok_or_else(|| CatalogError::TalentNotFound {
                character: character.clone(),
                name: name.to_owned(),
            })
    }

    /// Items of `slot` type that `career` can wield, in table order.
    fn items_for_career_and_slot(&self, career: &CareerId, slot: &str) -> Vec<&Item> {
        self.items()
            .iter()
            .filter(|item| item.slot_type == slot && item.is_wieldable_by(career))
            .collect()
    }

    /// Default loadout: the first eligible item for every loadout slot.
    ///
    /// Keys are slot indices into `career.loadout_equipment_slots`.
    fn default_equipment(&self, career: &Career) -> Result<BTreeMap<usize, ItemType>, CatalogError> {
        career
            .loadout_equipment_slots
            .iter()
            .enumerate()
            .map(|(slot_index, slot)| {
                self.items_for_career_and_slot(&career.id, slot)
                    .first()
                    .map(|item| (slot_index, item.item_type.clone()))
                    .ok_or_else(|| CatalogError::NoDefaultItem {
                        career: career.id.clone(),
                        slot: slot.clone(),
                    })
            })
            .collect()
    }
}
