// ../tests/encounter_data.rs
use elden_scout::encounter::{
    EffectivePoise, EncounterRecord, NgLevel, PoiseProfile, ProgressStats, RegionSummary,
    ResistanceProfile, ResistanceValue,
};
use strum::IntoEnumIterator;

#[test]
fn test_ng_level_labels_and_service_params() {
    assert_eq!(NgLevel::Ng.as_param(), "NG");
    assert_eq!(NgLevel::NgPlus1.as_param(), "NG+");
    assert_eq!(NgLevel::NgPlus1.label(), "NG+1");
    assert_eq!(NgLevel::NgPlus5.as_param(), "NG+5");
    assert_eq!(NgLevel::iter().count(), 8);
}

#[test]
fn test_ng_level_steps_saturate() {
    assert_eq!(NgLevel::Ng.previous(), NgLevel::Ng);
    assert_eq!(NgLevel::Ng.next(), NgLevel::NgPlus1);
    assert_eq!(NgLevel::NgPlus7.next(), NgLevel::NgPlus7);
    assert_eq!(NgLevel::NgPlus3.previous(), NgLevel::NgPlus2);
}

#[test]
fn test_ng_level_serializes_as_label() {
    let json = serde_json::to_string(&NgLevel::NgPlus2).expect("serialize");
    assert_eq!(json, "\"NG+2\"");
    let level: NgLevel = serde_json::from_str("\"NG+1\"").expect("deserialize");
    assert_eq!(level, NgLevel::NgPlus1);
}

#[test]
fn test_encounter_record_from_service_json() {
    let json = r#"{
        "name": "Margit, the Fell Omen",
        "location": "Stormveil Castle",
        "hp": 4174,
        "damage_negation": {
            "physical": 10, "strike": 0, "slash": 10, "pierce": 10,
            "magic": 20, "fire": 20, "lightning": 20, "holy": 40
        },
        "resistances": {
            "poison": 252, "scarlet_rot": "Immune", "bleed": 999999,
            "frost": "154", "sleep": null, "madness": "Immune", "deathblight": "n/a"
        },
        "poise": {"base": 80.4, "effective": 999999, "regen_delay": 30},
        "ai_strategy": "**Parry** his delayed swings.",
        "all_instances": [
            {"location": "Stormveil Castle", "hp": 4174},
            {"location": "Limgrave"}
        ],
        "has_weak_spots": true
    }"#;

    let record: EncounterRecord = serde_json::from_str(json).expect("decode record");
    assert_eq!(record.name, "Margit, the Fell Omen");
    assert_eq!(record.hp, 4174);
    assert_eq!(record.damage.map(|d| d.holy), Some(40.0));

    let resistances = record.resistances.expect("resistances present");
    assert_eq!(resistances.poison, ResistanceValue::Numeric(252.0));
    assert_eq!(resistances.scarlet_rot, ResistanceValue::Immune);
    assert_eq!(resistances.bleed, ResistanceValue::NotApplicable);
    assert_eq!(resistances.frost, ResistanceValue::Numeric(154.0));
    assert_eq!(resistances.sleep, ResistanceValue::NotApplicable);
    assert_eq!(resistances.deathblight, ResistanceValue::NotApplicable);

    let poise = record.poise.expect("poise present");
    assert_eq!(poise.base, 80);
    assert_eq!(poise.effective, EffectivePoise::Unbreakable);

    assert_eq!(record.strategy_text, "**Parry** his delayed swings.");
    assert_eq!(record.location_variants.len(), 2);
    assert_eq!(record.location_variants[1].hp, None);
    assert!(record.has_weak_spots);
    assert!(record.status_multipliers.is_none());
}

#[test]
fn test_sparse_record_uses_defaults() {
    let record: EncounterRecord =
        serde_json::from_str(r#"{"name": "Wolf"}"#).expect("decode sparse record");
    assert_eq!(record.location, "");
    assert!(record.damage.is_none());
    assert!(record.location_variants.is_empty());
    assert!(!record.has_weak_spots);
}

#[test]
fn test_region_summary_presents_as_record() {
    let json = r#"{
        "region": "Limgrave",
        "enemy_count": 42,
        "avg_hp": 812,
        "avg_damage_negation": {
            "physical": 5, "strike": 5, "slash": 5, "pierce": 5,
            "magic": 10, "fire": 10, "lightning": 10, "holy": 10
        },
        "avg_poise": {"base": 20, "effective": "∞", "regen_delay": 25},
        "ai_strategy": "Mostly soldiers."
    }"#;

    let summary: RegionSummary = serde_json::from_str(json).expect("decode region");
    let record = summary.to_record();
    assert_eq!(record.name, "Limgrave (Average)");
    assert_eq!(record.location, "42 enemies");
    assert_eq!(record.hp, 812);
    assert_eq!(record.damage.map(|d| d.magic), Some(10.0));
    assert_eq!(
        record.poise.map(|p| p.effective),
        Some(EffectivePoise::Unbreakable)
    );
    assert_eq!(record.strategy_text, "Mostly soldiers.");
    assert!(record.location_variants.is_empty());
}

#[test]
fn test_progress_stats_accepts_cached_field_name() {
    let stats: ProgressStats = serde_json::from_str(
        r#"{"total_enemies": 400, "cached_enemies": 100, "percentage": 25.0}"#,
    )
    .expect("decode stats");
    assert_eq!(stats.analyzed_enemies, 100);
    assert_eq!(stats.total_enemies, 400);
    assert_eq!(stats.percentage, 25.0);
}

#[test]
fn test_sentinel_values_serialize_in_service_shape() {
    let record = EncounterRecord {
        name: "Crucible Knight".to_string(),
        location: "Stormhill Evergaol".to_string(),
        hp: 2000,
        resistances: Some(ResistanceProfile {
            poison: ResistanceValue::Numeric(252.0),
            scarlet_rot: ResistanceValue::Immune,
            ..Default::default()
        }),
        poise: Some(PoiseProfile {
            base: 60,
            effective: EffectivePoise::Unbreakable,
            regen_delay: 30.0,
        }),
        ..Default::default()
    };

    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["resistances"]["poison"], 252.0);
    assert_eq!(json["resistances"]["scarlet_rot"], "Immune");
    assert!(json["resistances"]["bleed"].is_null());
    assert_eq!(json["poise"]["effective"], "∞");

    let decoded: EncounterRecord = serde_json::from_value(json).expect("decode record");
    assert_eq!(decoded, record);

    let finite = serde_json::to_string(&EffectivePoise::Finite(80)).expect("serialize poise");
    assert_eq!(finite, "80");
}
