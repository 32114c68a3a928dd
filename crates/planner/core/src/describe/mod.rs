//! Localized, formatted talent and ability descriptions.
//!
//! Rendering a talent description takes four steps:
//! 1. map the talent's description values to substitution numbers
//! 2. look up the localized template for the talent's description key
//! 3. run the [`TemplateCorrections`] for that key
//! 4. substitute the numbers positionally with [`sprintf`]
mod corrections;
mod locale;
mod printf;

pub use corrections::{CorrectionRule, TemplateCorrections};
pub use locale::{LocaleTable, Localizer};
pub use printf::sprintf;

use crate::catalog::{Ability, Talent};

/// Renders descriptions against one localization table.
#[derive(Clone, Copy)]
pub struct DescriptionFormatter<'a> {
    localizer: &'a dyn Localizer,
    corrections: &'a TemplateCorrections,
}

impl<'a> DescriptionFormatter<'a> {
    pub fn new(localizer: &'a dyn Localizer, corrections: &'a TemplateCorrections) -> Self {
        Self {
            localizer,
            corrections,
        }
    }

    pub fn localizer(&self) -> &'a dyn Localizer {
        self.localizer
    }

    /// Numbers substituted into `talent`'s description, in order.
    pub fn substitution_values(talent: &Talent) -> Vec<f64> {
        talent
            .description_values
            .iter()
            .map(|value| value.substitution())
            .collect()
    }

    /// Localized description of `talent` with its values filled in.
    pub fn talent_description(&self, talent: &Talent) -> String {
        let values = Self::substitution_values(talent);
        self.format_key(&talent.description, &values)
    }

    /// Localizes `key`, corrects the template, and substitutes `values`.
    pub fn format_key(&self, key: &str, values: &[f64]) -> String {
        let template = self.localizer.translate(key);
        let template = self.corrections.apply(key, template);
        sprintf(&template, values)
    }

    /// Localized ability description followed by its perk descriptions.
    pub fn ability_description(&self, ability: &Ability) -> Vec<String> {
        std::iter::once(&ability.description)
            .chain(ability.perks.iter().map(|perk| &perk.description))
            .map(|key| self.localizer.translate(key).to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogOracle, CharacterId, DescriptionValue, DescriptionValueType, Perk};
    use crate::fixtures;

    fn talent(description: &str, values: Vec<DescriptionValue>) -> Talent {
        Talent {
            name: "test_talent".to_owned(),
            description: description.to_owned(),
            description_values: values,
        }
    }

    #[test]
    fn percent_value_renders_as_whole_number() {
        let locale = LocaleTable::from_iter([("dmg_desc", "Reduces damage by %.1f")]);
        let corrections = TemplateCorrections::builtin();
        let formatter = DescriptionFormatter::new(&locale, &corrections);
        let talent = talent(
            "dmg_desc",
            vec![DescriptionValue::new(-0.25, Some(DescriptionValueType::Percent))],
        );
        assert_eq!(formatter.talent_description(&talent), "Reduces damage by 25");
    }

    #[test]
    fn baked_percent_value_is_bonus_over_base() {
        let talent = talent(
            "speed_desc",
            vec![DescriptionValue::new(1.1, Some(DescriptionValueType::BakedPercent))],
        );
        let values = DescriptionFormatter::substitution_values(&talent);
        assert_eq!(values.len(), 1);
        assert!((values[0] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn fixture_talents_render() {
        let catalog = fixtures::catalog();
        let locale = fixtures::locale();
        let corrections = TemplateCorrections::builtin();
        let formatter = DescriptionFormatter::new(&locale, &corrections);
        let character = CharacterId::from("empire_soldier");

        let render = |name: &str| {
            let talent = catalog.talent_by_name(&character, name).unwrap();
            formatter.talent_description(talent)
        };
        assert_eq!(render("es_merc_a1"), "Reduces damage taken by 25%.");
        assert_eq!(render("es_merc_a2"), "Increases attack speed by 10%.");
        assert_eq!(render("es_merc_a3"), "Heals 15% health over 5 seconds.");
    }

    #[test]
    fn mistyped_template_is_corrected_before_formatting() {
        let key = TemplateCorrections::MISTYPED_PRECISION_KEY;
        let locale = LocaleTable::from_iter([(key, "Allies gain %1.f%% critical chance.")]);
        let corrections = TemplateCorrections::builtin();
        let formatter = DescriptionFormatter::new(&locale, &corrections);
        let talent = talent(
            key,
            vec![DescriptionValue::new(0.05, Some(DescriptionValueType::Percent))],
        );
        assert_eq!(formatter.talent_description(&talent), "Allies gain 5% critical chance.");
    }

    #[test]
    fn placeholder_count_mismatch_does_not_panic() {
        let locale = LocaleTable::from_iter([("two_desc", "%d then %d")]);
        let corrections = TemplateCorrections::builtin();
        let formatter = DescriptionFormatter::new(&locale, &corrections);

        let short = talent("two_desc", vec![DescriptionValue::new(1.0, None)]);
        assert_eq!(formatter.talent_description(&short), "1 then %d");

        let long = talent(
            "two_desc",
            vec![
                DescriptionValue::new(1.0, None),
                DescriptionValue::new(2.0, None),
                DescriptionValue::new(3.0, None),
            ],
        );
        assert_eq!(formatter.talent_description(&long), "1 then 2");
    }

    #[test]
    fn missing_template_falls_back_to_key() {
        let locale = LocaleTable::new();
        let corrections = TemplateCorrections::builtin();
        let formatter = DescriptionFormatter::new(&locale, &corrections);
        let talent = talent("unknown_desc", Vec::new());
        assert_eq!(formatter.talent_description(&talent), "unknown_desc");
    }

    #[test]
    fn ability_description_lists_perks() {
        let locale = LocaleTable::from_iter([
            ("passive_desc", "Passive text"),
            ("perk_a_desc", "Perk A"),
        ]);
        let corrections = TemplateCorrections::none();
        let formatter = DescriptionFormatter::new(&locale, &corrections);
        let ability = Ability {
            display_name: "passive".to_owned(),
            description: "passive_desc".to_owned(),
            perks: vec![
                Perk {
                    display_name: "perk_a".to_owned(),
                    description: "perk_a_desc".to_owned(),
                },
                Perk {
                    display_name: "perk_b".to_owned(),
                    description: "perk_b_desc".to_owned(),
                },
            ],
        };
        assert_eq!(
            formatter.ability_description(&ability),
            ["Passive text", "Perk A", "perk_b_desc"]
        );
    }
}
