//! Reference-data records: characters, careers, talents, items.
//!
//! These are read-only tables supplied by the generated data document. Keys
//! that the document uses as map keys (career id, item type) are lifted into
//! the records by the loader so every table can be carried as an ordered list.

use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Playable hero archetype id (the generator calls it `profile_name`).
    CharacterId
);
string_id!(
    /// Career (class specialization) id.
    CareerId
);
string_id!(
    /// Item type id, the value stored in a build's equipment slot.
    ItemType
);

/// Playable hero archetype.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    /// Localization key.
    pub display_name: String,
}

impl Character {
    pub fn new(id: impl Into<CharacterId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Career belonging to exactly one character.
///
/// The career determines the talent tree (via `talent_tree_index`) and which
/// equipment slots the loadout has.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Career {
    pub id: CareerId,
    /// Owning character.
    pub profile_name: CharacterId,
    pub sort_order: i32,
    /// Localization key.
    pub display_name: String,
    /// 1-based index into the owning character's talent trees.
    pub talent_tree_index: usize,
    pub passive_ability: Ability,
    pub activated_ability: Ability,
    /// Slot types in loadout order; slot index `i` of a build maps to entry `i`.
    pub loadout_equipment_slots: Vec<String>,
}

/// Passive or activated career ability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub display_name: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub perks: Vec<Perk>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Perk {
    pub display_name: String,
    pub description: String,
}

/// Grid of talent names: rows of talent references, one selection per row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TalentTree(pub Vec<Vec<String>>);

impl TalentTree {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.0
    }

    pub fn row(&self, row_index: usize) -> Option<&[String]> {
        self.0.get(row_index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Talent record: a description key plus the numbers interpolated into it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Talent {
    pub name: String,
    /// Localization key of the description template.
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description_values: Vec<DescriptionValue>,
}

/// One positional parameter of a talent description.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescriptionValue {
    pub value: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value_type: Option<DescriptionValueType>,
}

impl DescriptionValue {
    pub fn new(value: f64, value_type: Option<DescriptionValueType>) -> Self {
        Self { value, value_type }
    }

    /// Number substituted into the description template.
    ///
    /// - `percent`: `|value * -100|`
    /// - `baked_percent`: `value * 100 - 100` (a multiplier shown as a bonus)
    /// - anything else: the raw value
    pub fn substitution(&self) -> f64 {
        match self.value_type {
            Some(DescriptionValueType::Percent) => (self.value * -100.0).abs(),
            Some(DescriptionValueType::BakedPercent) => self.value * 100.0 - 100.0,
            Some(DescriptionValueType::Other) | None => self.value,
        }
    }
}

/// How a description value is presented.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum DescriptionValueType {
    Percent,
    BakedPercent,
    /// Any tag the formatter does not transform.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// Wieldable item and the slot type it occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub item_type: ItemType,
    pub slot_type: String,
    /// Careers allowed to wield the item.
    pub can_wield: Vec<CareerId>,
}

impl Item {
    pub fn is_wieldable_by(&self, career: &CareerId) -> bool {
        self.can_wield.contains(career)
    }
}
