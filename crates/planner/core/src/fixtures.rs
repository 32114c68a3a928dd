//! Small hand-built catalog shared by unit tests.

use std::collections::HashMap;

use crate::catalog::{
    Ability, Career, Catalog, Character, CharacterId, DescriptionValue, DescriptionValueType,
    Item, Talent, TalentTree,
};
use crate::describe::LocaleTable;

fn career(id: &str, character: &str, sort_order: i32, tree: usize) -> Career {
    Career {
        id: id.into(),
        profile_name: character.into(),
        sort_order,
        display_name: format!("{id}_name"),
        talent_tree_index: tree,
        passive_ability: Ability {
            display_name: format!("{id}_passive"),
            description: format!("{id}_passive_desc"),
            perks: Vec::new(),
        },
        activated_ability: Ability {
            display_name: format!("{id}_active"),
            description: format!("{id}_active_desc"),
            perks: Vec::new(),
        },
        loadout_equipment_slots: vec!["melee".to_owned(), "ranged".to_owned()],
    }
}

fn tree(prefix: &str, rows: usize) -> TalentTree {
    TalentTree::new(
        (0..rows)
            .map(|row| {
                let letter = char::from(b'a' + row as u8);
                (1..=3).map(|col| format!("{prefix}_{letter}{col}")).collect()
            })
            .collect(),
    )
}

fn talents(tree: &TalentTree) -> Vec<Talent> {
    tree.rows()
        .iter()
        .flatten()
        .map(|name| Talent {
            name: name.clone(),
            description: format!("{name}_desc"),
            description_values: Vec::new(),
        })
        .collect()
}

fn item(item_type: &str, slot: &str, careers: &[&str]) -> Item {
    Item {
        item_type: item_type.into(),
        slot_type: slot.to_owned(),
        can_wield: careers.iter().map(|&career| career.into()).collect(),
    }
}

/// Two characters; career table order deliberately differs from sort order.
pub(crate) fn catalog() -> Catalog {
    let empire: CharacterId = "empire_soldier".into();
    let dwarf: CharacterId = "dwarf_ranger".into();

    let characters = vec![
        Character::new("empire_soldier", "inventory_name_empire_soldier"),
        Character::new("dwarf_ranger", "inventory_name_dwarf_ranger"),
    ];

    let careers = vec![
        career("es_huntsman", "empire_soldier", 2, 2),
        career("empire_soldier_tutorial", "empire_soldier", 0, 1),
        career("es_mercenary", "empire_soldier", 1, 1),
        career("dr_ranger", "dwarf_ranger", 2, 1),
        career("es_knight", "empire_soldier", 3, 3),
        career("dr_ironbreaker", "dwarf_ranger", 1, 2),
    ];

    // Huntsman's tree is one row taller than the others.
    let empire_trees = vec![tree("es_merc", 2), tree("es_hunt", 3), tree("es_knight", 2)];
    let dwarf_trees = vec![tree("dr_ranger", 2), tree("dr_iron", 2)];

    let mut empire_talents: Vec<Talent> = empire_trees.iter().flat_map(talents).collect();
    for talent in &mut empire_talents {
        match talent.name.as_str() {
            "es_merc_a1" => {
                talent.description_values = vec![DescriptionValue::new(
                    -0.25,
                    Some(DescriptionValueType::Percent),
                )];
            }
            "es_merc_a2" => {
                talent.description_values = vec![DescriptionValue::new(
                    1.1,
                    Some(DescriptionValueType::BakedPercent),
                )];
            }
            "es_merc_a3" => {
                talent.description_values = vec![
                    DescriptionValue::new(0.15, Some(DescriptionValueType::Percent)),
                    DescriptionValue::new(5.0, None),
                ];
            }
            _ => {}
        }
    }
    let dwarf_talents: Vec<Talent> = dwarf_trees.iter().flat_map(talents).collect();

    let items = vec![
        item("es_1h_sword", "melee", &["es_mercenary", "es_knight"]),
        item("es_2h_hammer", "melee", &["es_mercenary", "es_huntsman", "es_knight"]),
        item("es_blunderbuss", "ranged", &["es_mercenary", "es_huntsman"]),
        item("es_longbow", "ranged", &["es_huntsman"]),
        item("es_handgun", "ranged", &["es_knight", "es_mercenary"]),
        item("dr_1h_axe", "melee", &["dr_ironbreaker", "dr_ranger"]),
        item("dr_crossbow", "ranged", &["dr_ranger", "dr_ironbreaker"]),
        item("dr_drake_pistol", "ranged", &["dr_ironbreaker"]),
    ];

    Catalog::new(
        characters,
        careers,
        HashMap::from([(empire.clone(), empire_trees), (dwarf.clone(), dwarf_trees)]),
        HashMap::from([(empire, empire_talents), (dwarf, dwarf_talents)]),
        items,
    )
}

pub(crate) fn locale() -> LocaleTable {
    LocaleTable::from_iter([
        ("es_merc_a1_desc", "Reduces damage taken by %.1f%%."),
        ("es_merc_a2_desc", "Increases attack speed by %.1f%%."),
        ("es_merc_a3_desc", "Heals %d%% health over %d seconds."),
        ("es_mercenary_name", "Mercenary"),
    ])
}
