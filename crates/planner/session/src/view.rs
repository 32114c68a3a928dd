//! Localized view model derived from a build.

use planner_core::{
    Ability, Build, CatalogError, CatalogOracle, DescriptionFormatter, Localizer,
    TemplateCorrections,
};
use serde::Serialize;
use tracing::debug;

use crate::error::SessionError;

/// [`Localizer`] adapter that reports keys falling back to themselves.
pub struct TracingLocalizer<'a> {
    inner: &'a dyn Localizer,
}

impl<'a> TracingLocalizer<'a> {
    pub fn new(inner: &'a dyn Localizer) -> Self {
        Self { inner }
    }
}

impl Localizer for TracingLocalizer<'_> {
    fn lookup(&self, key: &str) -> Option<&str> {
        let text = self.inner.lookup(key);
        if text.is_none() {
            debug!(key, "missing localization");
        }
        text
    }
}

/// One selectable option.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Choice {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

impl Choice {
    fn new(id: impl Into<String>, name: impl Into<String>, selected: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerkView {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AbilityView {
    pub name: String,
    pub description: String,
    pub perks: Vec<PerkView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TalentView {
    /// Talent id as referenced by the tree.
    pub name: String,
    pub title: String,
    /// Localized description with values substituted.
    pub description: String,
    pub selected: bool,
}

/// Loadout slot with the items the current career may put in it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlotView {
    pub slot_type: String,
    pub options: Vec<Choice>,
}

impl SlotView {
    pub fn selected(&self) -> Option<&Choice> {
        self.options.iter().find(|option| option.selected)
    }
}

/// Everything a frontend needs to render the current build.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuildView {
    pub characters: Vec<Choice>,
    pub careers: Vec<Choice>,
    pub passive: AbilityView,
    pub activated: AbilityView,
    pub talent_rows: Vec<Vec<TalentView>>,
    pub equipment: Vec<SlotView>,
}

impl BuildView {
    pub fn derive(
        build: &Build,
        catalog: &dyn CatalogOracle,
        localizer: &dyn Localizer,
        corrections: &TemplateCorrections,
    ) -> Result<Self, SessionError> {
        let localizer = TracingLocalizer::new(localizer);
        let formatter = DescriptionFormatter::new(&localizer, corrections);

        let career = catalog
            .career(&build.career)
            .ok_or_else(|| CatalogError::CareerNotFound(build.career.clone()))?;

        let characters = catalog
            .characters()
            .iter()
            .map(|character| {
                Choice::new(
                    character.id.as_str(),
                    localizer.translate(&character.display_name),
                    character.id == build.character,
                )
            })
            .collect();

        let careers = catalog
            .careers_for_character(&build.character)
            .into_iter()
            .map(|candidate| {
                Choice::new(
                    candidate.id.as_str(),
                    localizer.translate(&candidate.display_name),
                    candidate.id == build.career,
                )
            })
            .collect();

        let tree = catalog.talent_tree_for_career(&build.character, career)?;
        let talent_rows = tree
            .rows()
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                row.iter()
                    .enumerate()
                    .map(|(talent_index, name)| -> Result<TalentView, CatalogError> {
                        let talent = catalog.talent_by_name(&build.character, name)?;
                        Ok(TalentView {
                            name: talent.name.clone(),
                            title: localizer.translate(&talent.name).to_owned(),
                            description: formatter.talent_description(talent),
                            selected: build.talent(row_index) == Some(talent_index),
                        })
                    })
                    .collect::<Result<Vec<_>, CatalogError>>()
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let equipment = career
            .loadout_equipment_slots
            .iter()
            .enumerate()
            .map(|(slot_index, slot)| SlotView {
                slot_type: slot.clone(),
                options: catalog
                    .items_for_career_and_slot(&career.id, slot)
                    .into_iter()
                    .map(|item| {
                        Choice::new(
                            item.item_type.as_str(),
                            localizer.translate(item.item_type.as_str()),
                            build.equipped(slot_index) == Some(&item.item_type),
                        )
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            characters,
            careers,
            passive: ability_view(&career.passive_ability, &formatter),
            activated: ability_view(&career.activated_ability, &formatter),
            talent_rows,
            equipment,
        })
    }

    pub fn selected_character(&self) -> Option<&Choice> {
        self.characters.iter().find(|choice| choice.selected)
    }

    pub fn selected_career(&self) -> Option<&Choice> {
        self.careers.iter().find(|choice| choice.selected)
    }
}

fn ability_view(ability: &Ability, formatter: &DescriptionFormatter<'_>) -> AbilityView {
    let mut descriptions = formatter.ability_description(ability).into_iter();
    let description = descriptions.next().unwrap_or_default();
    let perks = ability
        .perks
        .iter()
        .zip(descriptions)
        .map(|(perk, description)| PerkView {
            name: formatter.localizer().translate(&perk.display_name).to_owned(),
            description,
        })
        .collect();

    AbilityView {
        name: formatter.localizer().translate(&ability.display_name).to_owned(),
        description,
        perks,
    }
}
