//! In-memory catalog backed by ordered tables.

use std::collections::HashMap;

use super::{Career, CatalogOracle, Character, CharacterId, Item, Talent, TalentTree};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete set of reference tables, loaded once and shared read-only.
///
/// Every table that is iterated is a `Vec`, so table order is explicit and
/// never depends on hash iteration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog {
    pub characters: Vec<Character>,
    pub careers: Vec<Career>,
    pub talent_trees: HashMap<CharacterId, Vec<TalentTree>>,
    pub talents: HashMap<CharacterId, Vec<Talent>>,
    pub items: Vec<Item>,
}

impl Catalog {
    pub fn new(
        characters: Vec<Character>,
        careers: Vec<Career>,
        talent_trees: HashMap<CharacterId, Vec<TalentTree>>,
        talents: HashMap<CharacterId, Vec<Talent>>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            characters,
            careers,
            talent_trees,
            talents,
            items,
        }
    }
}

impl CatalogOracle for Catalog {
    fn characters(&self) -> &[Character] {
        &self.characters
    }

    fn careers(&self) -> &[Career] {
        &self.careers
    }

    fn talent_trees(&self, character: &CharacterId) -> Option<&[TalentTree]> {
        self.talent_trees.get(character).map(Vec::as_slice)
    }

    fn talents(&self, character: &CharacterId) -> Option<&[Talent]> {
        self.talents.get(character).map(Vec::as_slice)
    }

    fn items(&self) -> &[Item] {
        &self.items
    }
}
