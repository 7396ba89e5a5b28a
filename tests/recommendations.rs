// ../tests/recommendations.rs
use elden_scout::analysis::{BALANCED_APPROACH, recommend};
use elden_scout::encounter::{DamageProfile, ResistanceProfile, ResistanceValue};
use ResistanceValue::{Immune, NotApplicable, Numeric};

fn damage(values: [f64; 8]) -> DamageProfile {
    DamageProfile {
        physical: values[0],
        strike: values[1],
        slash: values[2],
        pierce: values[3],
        magic: values[4],
        fire: values[5],
        lightning: values[6],
        holy: values[7],
    }
}

fn resistances(values: [ResistanceValue; 7]) -> ResistanceProfile {
    ResistanceProfile {
        poison: values[0],
        scarlet_rot: values[1],
        bleed: values[2],
        frost: values[3],
        sleep: values[4],
        madness: values[5],
        deathblight: values[6],
    }
}

#[test]
fn test_damage_weaknesses_sorted_from_lowest_negation() {
    let profile = damage([-10.0, -20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0]);
    assert_eq!(recommend(Some(&profile), None), vec!["Strike", "Physical"]);
}

#[test]
fn test_small_damage_spread_gives_no_damage_weakness() {
    let profile = damage([0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0]);
    assert_eq!(recommend(Some(&profile), None), vec![BALANCED_APPROACH]);
}

#[test]
fn test_status_weaknesses_skip_immune_missing_and_zero() {
    let profile = resistances([
        Numeric(200.0),
        Numeric(900.0),
        Immune,
        NotApplicable,
        Numeric(0.0),
        Numeric(150.0),
        Numeric(1000.0),
    ]);
    assert_eq!(recommend(None, Some(&profile)), vec!["Madness", "Poison"]);
}

#[test]
fn test_status_ceiling_excludes_high_thresholds() {
    let profile = resistances([
        Numeric(500.0),
        Numeric(500.0),
        Immune,
        Immune,
        Immune,
        Immune,
        Immune,
    ]);
    assert_eq!(recommend(None, Some(&profile)), vec![BALANCED_APPROACH]);
}

#[test]
fn test_damage_labels_come_before_status_labels() {
    let damage_profile = damage([-10.0, -20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0]);
    let resistance_profile = resistances([
        Numeric(200.0),
        Numeric(900.0),
        Immune,
        NotApplicable,
        Numeric(0.0),
        Numeric(150.0),
        Numeric(1000.0),
    ]);
    assert_eq!(
        recommend(Some(&damage_profile), Some(&resistance_profile)),
        vec!["Strike", "Physical", "Madness", "Poison"]
    );
}

#[test]
fn test_equal_values_keep_field_order() {
    let profile = damage([-20.0, -20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0]);
    assert_eq!(recommend(Some(&profile), None), vec!["Physical", "Strike"]);
}

#[test]
fn test_absent_profiles_fall_back_to_balanced_approach() {
    assert_eq!(recommend(None, None), vec![BALANCED_APPROACH]);

    let uniform = damage([30.0; 8]);
    let all_immune = resistances([Immune; 7]);
    assert_eq!(
        recommend(Some(&uniform), Some(&all_immune)),
        vec!["Balanced approach"]
    );
}

#[test]
fn test_worked_damage_example() {
    let profile = damage([-20.0, 0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    assert_eq!(recommend(Some(&profile), None), vec!["Physical", "Strike"]);
}

#[test]
fn test_worked_resistance_example_from_service_json() {
    let profile: ResistanceProfile = serde_json::from_str(
        r#"{
            "poison": 100, "scarlet_rot": "Immune", "bleed": 0, "frost": 300,
            "sleep": null, "madness": 50, "deathblight": 600
        }"#,
    )
    .expect("decode resistances");

    assert_eq!(profile.scarlet_rot, Immune);
    assert_eq!(profile.bleed, Numeric(0.0));
    assert_eq!(profile.sleep, NotApplicable);
    assert_eq!(recommend(None, Some(&profile)), vec!["Madness", "Poison"]);
}
