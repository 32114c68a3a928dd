//! Plain-text rendering of a build view.
use std::fmt::Write;

use planner_session::{AbilityView, BuildView, Choice};

/// Human-readable summary of the selected character, career, talents and
/// loadout.
pub fn render_summary(view: &BuildView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Character: {}", name(view.selected_character()));
    let _ = writeln!(out, "Career:    {}", name(view.selected_career()));
    render_ability(&mut out, "Passive", &view.passive);
    render_ability(&mut out, "Skill", &view.activated);

    let _ = writeln!(out, "Talents:");
    for (row_index, row) in view.talent_rows.iter().enumerate() {
        match row.iter().find(|talent| talent.selected) {
            Some(talent) => {
                let _ = writeln!(
                    out,
                    "  {}. {}: {}",
                    row_index + 1,
                    talent.title,
                    talent.description
                );
            }
            None => {
                let _ = writeln!(out, "  {}. -", row_index + 1);
            }
        }
    }

    let _ = writeln!(out, "Equipment:");
    for slot in &view.equipment {
        let _ = writeln!(out, "  {}: {}", slot.slot_type, name(slot.selected()));
    }

    out
}

fn name(choice: Option<&Choice>) -> &str {
    choice.map_or("-", |choice| choice.name.as_str())
}

fn render_ability(out: &mut String, label: &str, ability: &AbilityView) {
    let _ = writeln!(out, "{}: {} - {}", label, ability.name, ability.description);
    for perk in &ability.perks {
        let _ = writeln!(out, "  * {}: {}", perk.name, perk.description);
    }
}
