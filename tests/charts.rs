// ../tests/charts.rs
use elden_scout::chart::{
    DEFENSE_TOP_COLOR, RESISTANCE_TOP_COLOR, RESISTANCE_ZERO_COLOR, defense_color, defense_series,
    format_number, poise_label, resistance_color, resistance_series,
};
use elden_scout::encounter::{DamageProfile, EffectivePoise, ResistanceProfile, ResistanceValue};

#[test]
fn test_defense_series_follows_field_order() {
    let damage = DamageProfile {
        physical: 10.0,
        strike: -5.0,
        slash: 10.0,
        pierce: 10.0,
        magic: 40.0,
        fire: 20.0,
        lightning: 20.0,
        holy: 80.0,
    };
    let series = defense_series(Some(&damage));
    let labels: Vec<&str> = series.iter().map(|point| point.label).collect();
    assert_eq!(
        labels,
        vec!["Physical", "Strike", "Slash", "Pierce", "Magic", "Fire", "Lightning", "Holy"]
    );
    assert_eq!(series[1].value, -5.0);
    assert_eq!(series[7].value, 80.0);
}

#[test]
fn test_absent_profiles_give_empty_series() {
    assert!(defense_series(None).is_empty());
    assert!(resistance_series(None).is_empty());
}

#[test]
fn test_resistance_series_maps_immune_and_missing_to_zero() {
    let resistances = ResistanceProfile {
        poison: ResistanceValue::Numeric(252.0),
        scarlet_rot: ResistanceValue::Immune,
        bleed: ResistanceValue::Numeric(154.5),
        frost: ResistanceValue::NotApplicable,
        ..Default::default()
    };
    let series = resistance_series(Some(&resistances));
    assert_eq!(series.len(), 7);

    assert_eq!(series[0].value, 252.0);
    assert_eq!(series[0].display_label, "252");
    assert_eq!(series[1].label, "Scarlet Rot");
    assert_eq!(series[1].value, 0.0);
    assert_eq!(series[1].display_label, "Immune");
    assert_eq!(series[2].display_label, "154.5");
    assert_eq!(series[3].value, 0.0);
    assert_eq!(series[3].display_label, "N/A");
}

#[test]
fn test_defense_color_bounds_belong_to_next_bucket() {
    // -10 is not below -10, so it shares the bucket of -5.
    assert_eq!(defense_color(-10.0), defense_color(-5.0));
    assert_ne!(defense_color(-10.0), defense_color(-10.5));
    assert_eq!(defense_color(0.0), defense_color(19.9));
    assert_ne!(defense_color(19.9), defense_color(20.0));
    assert_eq!(defense_color(79.9), defense_color(60.0));
    assert_eq!(defense_color(80.0), DEFENSE_TOP_COLOR);
    assert_eq!(defense_color(100.0), DEFENSE_TOP_COLOR);
}

#[test]
fn test_resistance_zero_has_its_own_color() {
    assert_eq!(resistance_color(0.0), RESISTANCE_ZERO_COLOR);
    assert_ne!(resistance_color(1.0), RESISTANCE_ZERO_COLOR);
    assert_eq!(resistance_color(1.0), resistance_color(299.0));
    assert_ne!(resistance_color(299.0), resistance_color(300.0));
    assert_eq!(resistance_color(1199.0), resistance_color(900.0));
    assert_eq!(resistance_color(1200.0), RESISTANCE_TOP_COLOR);
}

#[test]
fn test_poise_and_number_labels() {
    assert_eq!(poise_label(&EffectivePoise::Unbreakable), "∞");
    assert_eq!(poise_label(&EffectivePoise::Finite(120)), "120");
    assert_eq!(format_number(40.0), "40");
    assert_eq!(format_number(-12.5), "-12.5");
}
