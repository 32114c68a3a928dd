//! Generated reference-data loader.

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use planner_core::{
    Ability, Career, CareerId, Catalog, Character, CharacterId, Item, ItemType, Talent,
    TalentTree,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Character order used when the document carries no `profiles` list.
pub const DEFAULT_CHARACTER_ORDER: [&str; 5] = [
    "empire_soldier",
    "dwarf_ranger",
    "wood_elf",
    "witch_hunter",
    "bright_wizard",
];

/// Generated data document as written by the extraction pipeline.
///
/// Map-shaped tables are read into [`IndexMap`]s so document order becomes
/// the stable table order of the resulting [`Catalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedData {
    /// Careers keyed by career id. The generator still names this table
    /// `characters`.
    #[serde(rename = "characters", alias = "careers")]
    pub careers: IndexMap<CareerId, CareerRecord>,

    /// Talent trees per character, in `talent_tree_index` order.
    #[serde(default)]
    pub trees: HashMap<CharacterId, Vec<TalentTree>>,

    #[serde(default)]
    pub talents: HashMap<CharacterId, Vec<Talent>>,

    #[serde(default)]
    pub items: IndexMap<ItemType, ItemRecord>,

    /// Explicit character order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<Character>>,
}

/// Career entry without its id (the id is the map key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecord {
    pub profile_name: CharacterId,
    pub sort_order: i32,
    pub display_name: String,
    pub talent_tree_index: usize,
    #[serde(default)]
    pub passive_ability: Ability,
    #[serde(default)]
    pub activated_ability: Ability,
    #[serde(default)]
    pub loadout_equipment_slots: Vec<String>,
}

/// Item entry without its type (the type is the map key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub slot_type: String,
    #[serde(default)]
    pub can_wield: Vec<CareerId>,
}

impl GeneratedData {
    /// Flattens the document into ordered catalog tables.
    pub fn into_catalog(self) -> Catalog {
        let characters = self.profiles.unwrap_or_else(|| {
            DEFAULT_CHARACTER_ORDER
                .iter()
                .map(|&id| Character::new(id, id))
                .collect()
        });

        let careers = self
            .careers
            .into_iter()
            .map(|(id, record)| Career {
                id,
                profile_name: record.profile_name,
                sort_order: record.sort_order,
                display_name: record.display_name,
                talent_tree_index: record.talent_tree_index,
                passive_ability: record.passive_ability,
                activated_ability: record.activated_ability,
                loadout_equipment_slots: record.loadout_equipment_slots,
            })
            .collect();

        let items = self
            .items
            .into_iter()
            .map(|(item_type, record)| Item {
                item_type,
                slot_type: record.slot_type,
                can_wield: record.can_wield,
            })
            .collect();

        Catalog::new(characters, careers, self.trees, self.talents, items)
    }
}

/// Loader for the generated `data.json` document.
pub struct DataLoader;

impl DataLoader {
    /// Load the reference catalog from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing GeneratedData
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let data: GeneratedData = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse generated data JSON: {}", e))?;
        Ok(data.into_catalog())
    }
}
