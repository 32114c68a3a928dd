//! Session behaviour against the bundled sample data.

use std::sync::Arc;

use planner_content::{ContentFactory, bundled_data_dir};
use planner_core::{
    ActionEnvelope, BuildAction, CorrectionRule, ErrorSeverity, PlannerConfig, PlannerError,
    ReduceError,
};
use planner_session::{BuildSession, SessionError};

fn session_with(locale: Option<&str>, adjust: impl FnOnce(&mut PlannerConfig)) -> BuildSession {
    let mut content = ContentFactory::new(bundled_data_dir())
        .load_all(locale)
        .expect("bundled content loads");
    adjust(&mut content.config);
    BuildSession::new(
        Arc::new(content.catalog),
        Arc::new(content.locale),
        &content.config,
    )
    .expect("session starts")
}

fn session() -> BuildSession {
    session_with(None, |_| {})
}

#[test]
fn starts_on_configured_character_with_default_loadout() {
    let session = session();
    let build = session.build();

    assert_eq!(build.character, "empire_soldier");
    assert_eq!(build.career, "es_mercenary");
    assert!(build.talents.is_empty());
    assert_eq!(build.equipped(0).unwrap(), "es_1h_mace");
    assert_eq!(build.equipped(1).unwrap(), "es_blunderbuss");
    assert_eq!(build.metadata.game_version.as_deref(), Some("2.0"));
    assert!(build.metadata.tool_version.is_some());
    assert_eq!(session.revision(), 0);
    assert_eq!(session.catalog().characters.len(), 5);
}

#[test]
fn view_formats_talent_descriptions() {
    let view = session().view().unwrap();

    assert_eq!(view.talent_rows.len(), 3);
    let first_row: Vec<&str> = view.talent_rows[0]
        .iter()
        .map(|talent| talent.description.as_str())
        .collect();
    assert_eq!(
        first_row,
        [
            "Increases attack speed by 5%.",
            "Reduces damage taken by 10%.",
            "Heals 5 health on kill.",
        ]
    );
    assert_eq!(
        view.talent_rows[1][2].description,
        "Reduces ability cooldown by 20% for 10 seconds."
    );
    assert_eq!(view.talent_rows[0][0].title, "Mercenary Talent 1-1");
}

#[test]
fn view_marks_selections() {
    let mut session = session();
    session.dispatch(BuildAction::talent(1, 2)).unwrap();
    let view = session.view().unwrap();

    assert_eq!(view.selected_character().unwrap().name, "Markus Kruber");
    assert_eq!(view.selected_career().unwrap().name, "Mercenary");
    assert_eq!(view.characters.len(), 5);
    assert_eq!(view.careers.len(), 3);

    let selected: Vec<(usize, usize)> = view
        .talent_rows
        .iter()
        .enumerate()
        .flat_map(|(row, talents)| {
            talents
                .iter()
                .enumerate()
                .filter(|(_, talent)| talent.selected)
                .map(move |(index, _)| (row, index))
        })
        .collect();
    assert_eq!(selected, [(1, 2)]);

    let melee = &view.equipment[0];
    assert_eq!(melee.slot_type, "melee");
    assert_eq!(melee.selected().unwrap().id, "es_1h_mace");
    assert_eq!(melee.selected().unwrap().name, "1H Mace");
}

#[test]
fn view_lists_abilities_with_perks() {
    let view = session().view().unwrap();

    assert_eq!(view.passive.name, "Mercenary Passive");
    assert_eq!(view.passive.description, "Passive ability of the Mercenary.");
    assert_eq!(view.passive.perks.len(), 2);
    assert_eq!(view.passive.perks[0].name, "Mercenary Perk 1");
    assert_eq!(view.passive.perks[0].description, "Perk 1 of the Mercenary.");
    assert!(view.activated.perks.is_empty());
}

#[test]
fn mistyped_template_is_corrected() {
    let mut session = session();
    session.dispatch(BuildAction::career("es_huntsman")).unwrap();
    let view = session.view().unwrap();

    let talent = &view.talent_rows[1][0];
    assert_eq!(talent.name, "es_huntsman_talent_2_1");
    assert_eq!(
        talent.description,
        "Increases critical strike chance of nearby allies by 5%."
    );
}

#[test]
fn configured_corrections_apply_after_builtin_rules() {
    let mut session = session_with(None, |config| {
        config.template_corrections.push(CorrectionRule::for_key(
            "es_mercenary_talent_1_3_desc",
            "on kill",
            "per kill",
        ));
    });
    session.dispatch(BuildAction::talent(0, 2)).unwrap();
    let view = session.view().unwrap();
    assert_eq!(view.talent_rows[0][2].description, "Heals 5 health per kill.");
}

#[test]
fn missing_translations_fall_back_to_keys() {
    let view = session_with(Some("de"), |_| {}).view().unwrap();

    assert_eq!(view.selected_career().unwrap().name, "Söldner");
    assert_eq!(
        view.talent_rows[0][1].description,
        "Verringert erlittenen Schaden um 10%."
    );
    assert_eq!(view.talent_rows[0][2].description, "es_mercenary_talent_1_3_desc");
}

#[test]
fn accepted_actions_advance_revision() {
    let mut session = session();
    session.dispatch(BuildAction::career("es_huntsman")).unwrap();
    session.dispatch(BuildAction::equip(1, "es_longbow")).unwrap();

    let build = session.build();
    assert_eq!(build.career, "es_huntsman");
    assert_eq!(build.equipped(0).unwrap(), "es_1h_mace");
    assert_eq!(build.equipped(1).unwrap(), "es_longbow");
    assert_eq!(session.revision(), 2);
}

#[test]
fn equipping_second_melee_slot_leaves_first() {
    let mut session = session();
    session.dispatch(BuildAction::character("dwarf_ranger")).unwrap();
    session.dispatch(BuildAction::career("dr_slayer")).unwrap();
    assert_eq!(session.build().equipped(0).unwrap(), "dr_1h_axe");
    assert_eq!(session.build().equipped(1).unwrap(), "dr_1h_axe");

    session.dispatch(BuildAction::equip(1, "dr_dual_axes")).unwrap();
    assert_eq!(session.build().equipped(0).unwrap(), "dr_1h_axe");
    assert_eq!(session.build().equipped(1).unwrap(), "dr_dual_axes");
}

#[test]
fn rejected_action_keeps_previous_build() {
    let mut session = session();
    let before = session.build().clone();

    let err = session
        .dispatch(BuildAction::equip(1, "es_longbow"))
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Reduce(ReduceError::ItemNotWieldable { .. })
    ));
    assert_eq!(err.severity(), ErrorSeverity::Validation);

    let err = session.dispatch(BuildAction::career("dr_slayer")).unwrap_err();
    assert_eq!(err.error_code(), "REDUCE_CAREER_NOT_AVAILABLE");

    assert_eq!(session.build(), &before);
    assert_eq!(session.revision(), 0);
}

#[test]
fn unknown_envelope_type_is_unhandled() {
    let mut session = session();
    let err = session
        .dispatch_envelope(ActionEnvelope::new("rename", serde_json::json!("Tank")))
        .unwrap_err();

    assert!(matches!(
        err,
        SessionError::Reduce(ReduceError::UnhandledAction { ref kind }) if kind == "rename"
    ));
    assert_eq!(err.severity(), ErrorSeverity::Fatal);
}

#[test]
fn json_actions_dispatch() {
    let mut session = session();
    session
        .dispatch_json(r#"{"type": "character", "payload": "dwarf_ranger"}"#)
        .unwrap();
    session
        .dispatch_json(r#"{"type": "talent", "payload": {"row_index": 0, "talent_index": 1}}"#)
        .unwrap();

    assert_eq!(session.build().character, "dwarf_ranger");
    assert_eq!(session.build().career, "dr_ironbreaker");
    assert_eq!(session.build().talent(0), Some(1));

    let err = session.dispatch_json("not json").unwrap_err();
    assert!(matches!(err, SessionError::Decode(_)));
}

#[test]
fn export_round_trips_through_serde() {
    let mut session = session();
    session.dispatch(BuildAction::talent(2, 0)).unwrap();

    let json = session.export_json().unwrap();
    let restored: planner_core::Build = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, session.build());
}
