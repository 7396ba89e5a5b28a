// encounter.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::EnumIter;

// The data service writes this in place of blank spreadsheet cells and for ∞ poise.
const MISSING_SENTINEL: f64 = 999_999.0;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum NgLevel {
    #[default]
    #[serde(rename = "NG")]
    Ng,
    #[serde(rename = "NG+1")]
    NgPlus1,
    #[serde(rename = "NG+2")]
    NgPlus2,
    #[serde(rename = "NG+3")]
    NgPlus3,
    #[serde(rename = "NG+4")]
    NgPlus4,
    #[serde(rename = "NG+5")]
    NgPlus5,
    #[serde(rename = "NG+6")]
    NgPlus6,
    #[serde(rename = "NG+7")]
    NgPlus7,
}

impl NgLevel {
    const ORDER: [NgLevel; 8] = [
        NgLevel::Ng,
        NgLevel::NgPlus1,
        NgLevel::NgPlus2,
        NgLevel::NgPlus3,
        NgLevel::NgPlus4,
        NgLevel::NgPlus5,
        NgLevel::NgPlus6,
        NgLevel::NgPlus7,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NgLevel::Ng => "NG",
            NgLevel::NgPlus1 => "NG+1",
            NgLevel::NgPlus2 => "NG+2",
            NgLevel::NgPlus3 => "NG+3",
            NgLevel::NgPlus4 => "NG+4",
            NgLevel::NgPlus5 => "NG+5",
            NgLevel::NgPlus6 => "NG+6",
            NgLevel::NgPlus7 => "NG+7",
        }
    }

    /// Sheet name the data service keys its stat variants by.
    pub fn as_param(self) -> &'static str {
        match self {
            NgLevel::Ng => "NG",
            NgLevel::NgPlus1 => "NG+",
            other => other.label(),
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Next level up, saturating at NG+7.
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1).min(Self::ORDER.len() - 1)]
    }

    /// Next level down, saturating at NG.
    pub fn previous(self) -> Self {
        Self::ORDER[self.index().saturating_sub(1)]
    }
}

impl std::fmt::Display for NgLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Damage negation percentages. Negative values amplify incoming damage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DamageProfile {
    pub physical: f64,
    pub strike: f64,
    pub slash: f64,
    pub pierce: f64,
    pub magic: f64,
    pub fire: f64,
    pub lightning: f64,
    pub holy: f64,
}

impl DamageProfile {
    pub const LABELS: [&'static str; 8] = [
        "Physical",
        "Strike",
        "Slash",
        "Pierce",
        "Magic",
        "Fire",
        "Lightning",
        "Holy",
    ];

    /// (label, value) pairs in display order.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        let values = [
            self.physical,
            self.strike,
            self.slash,
            self.pierce,
            self.magic,
            self.fire,
            self.lightning,
            self.holy,
        ];
        std::array::from_fn(|i| (Self::LABELS[i], values[i]))
    }
}

/// A status build-up threshold as reported by the data service.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResistanceValue {
    Numeric(f64),
    Immune,
    #[default]
    NotApplicable,
}

impl ResistanceValue {
    pub fn numeric(&self) -> Option<f64> {
        match self {
            ResistanceValue::Numeric(value) => Some(*value),
            _ => None,
        }
    }

    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("immune") {
            return ResistanceValue::Immune;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::from_number(value),
            Err(_) => ResistanceValue::NotApplicable,
        }
    }

    pub fn from_number(value: f64) -> Self {
        if !value.is_finite() || value >= MISSING_SENTINEL {
            ResistanceValue::NotApplicable
        } else {
            ResistanceValue::Numeric(value)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Text(String),
}

/// Written back in the service's own shape: a number, `"Immune"`, or `null`.
impl Serialize for ResistanceValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResistanceValue::Numeric(value) => serializer.serialize_f64(*value),
            ResistanceValue::Immune => serializer.serialize_str("Immune"),
            ResistanceValue::NotApplicable => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ResistanceValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawScalar>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawScalar::Number(value)) => ResistanceValue::from_number(value),
            Some(RawScalar::Text(text)) => ResistanceValue::from_text(&text),
            None => ResistanceValue::NotApplicable,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResistanceProfile {
    #[serde(default)]
    pub poison: ResistanceValue,
    #[serde(default)]
    pub scarlet_rot: ResistanceValue,
    #[serde(default)]
    pub bleed: ResistanceValue,
    #[serde(default)]
    pub frost: ResistanceValue,
    #[serde(default)]
    pub sleep: ResistanceValue,
    #[serde(default)]
    pub madness: ResistanceValue,
    #[serde(default)]
    pub deathblight: ResistanceValue,
}

impl ResistanceProfile {
    pub const LABELS: [&'static str; 7] = [
        "Poison",
        "Scarlet Rot",
        "Bleed",
        "Frost",
        "Sleep",
        "Madness",
        "Deathblight",
    ];

    pub fn entries(&self) -> [(&'static str, ResistanceValue); 7] {
        let values = [
            self.poison,
            self.scarlet_rot,
            self.bleed,
            self.frost,
            self.sleep,
            self.madness,
            self.deathblight,
        ];
        std::array::from_fn(|i| (Self::LABELS[i], values[i]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectivePoise {
    Finite(u32),
    Unbreakable,
}

impl Default for EffectivePoise {
    fn default() -> Self {
        EffectivePoise::Finite(0)
    }
}

impl Serialize for EffectivePoise {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EffectivePoise::Finite(value) => serializer.serialize_u32(*value),
            EffectivePoise::Unbreakable => serializer.serialize_str("∞"),
        }
    }
}

impl<'de> Deserialize<'de> for EffectivePoise {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawScalar>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawScalar::Number(value)) if value >= MISSING_SENTINEL || value.is_infinite() => {
                EffectivePoise::Unbreakable
            }
            Some(RawScalar::Number(value)) => EffectivePoise::Finite(to_whole(value)),
            Some(RawScalar::Text(text)) => {
                let trimmed = text.trim();
                if trimmed == "∞" || trimmed.eq_ignore_ascii_case("inf") {
                    EffectivePoise::Unbreakable
                } else {
                    trimmed
                        .parse::<f64>()
                        .map(|value| EffectivePoise::Finite(to_whole(value)))
                        .unwrap_or_default()
                }
            }
            None => EffectivePoise::default(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PoiseProfile {
    #[serde(default, deserialize_with = "whole_number")]
    pub base: u32,
    #[serde(default)]
    pub effective: EffectivePoise,
    #[serde(default)]
    pub regen_delay: f64,
}

/// Extra damage multipliers some enemies take from status procs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusMultipliers {
    #[serde(default = "neutral_multiplier")]
    pub bleed: f64,
    #[serde(default = "neutral_multiplier")]
    pub frost: f64,
    #[serde(default = "neutral_multiplier")]
    pub black_flame: f64,
}

fn neutral_multiplier() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationVariant {
    pub location: String,
    #[serde(default)]
    pub hp: Option<i64>,
}

/// A search hit or region member: just enough to fetch the full record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnemyStub {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub hp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EncounterRecord {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub hp: i64,
    #[serde(default, rename = "damage_negation")]
    pub damage: Option<DamageProfile>,
    #[serde(default)]
    pub resistances: Option<ResistanceProfile>,
    #[serde(default)]
    pub poise: Option<PoiseProfile>,
    #[serde(default, rename = "ai_strategy")]
    pub strategy_text: String,
    #[serde(default, rename = "all_instances")]
    pub location_variants: Vec<LocationVariant>,
    #[serde(default)]
    pub status_multipliers: Option<StatusMultipliers>,
    #[serde(default)]
    pub has_weak_spots: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionAverages {
    #[serde(default, rename = "avg_hp")]
    pub hp: i64,
    #[serde(default, rename = "avg_damage_negation")]
    pub damage: Option<DamageProfile>,
    #[serde(default, rename = "avg_resistances")]
    pub resistances: Option<ResistanceProfile>,
    #[serde(default, rename = "avg_poise")]
    pub poise: Option<PoiseProfile>,
    #[serde(default, rename = "avg_status_multipliers")]
    pub status_multipliers: Option<StatusMultipliers>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionSummary {
    #[serde(rename = "region")]
    pub name: String,
    #[serde(default)]
    pub enemy_count: u32,
    #[serde(flatten)]
    pub averages: RegionAverages,
    #[serde(default, rename = "ai_strategy")]
    pub strategy_text: String,
    #[serde(default, rename = "enemies")]
    pub member_enemies: Vec<EnemyStub>,
}

impl RegionSummary {
    /// Presents the regional averages as if they were a single encounter.
    pub fn to_record(&self) -> EncounterRecord {
        EncounterRecord {
            name: format!("{} (Average)", self.name),
            location: format!("{} enemies", self.enemy_count),
            hp: self.averages.hp,
            damage: self.averages.damage,
            resistances: self.averages.resistances,
            poise: self.averages.poise,
            strategy_text: self.strategy_text.clone(),
            location_variants: Vec::new(),
            status_multipliers: self.averages.status_multipliers,
            has_weak_spots: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressStats {
    #[serde(default)]
    pub total_enemies: u32,
    #[serde(default, alias = "cached_enemies")]
    pub analyzed_enemies: u32,
    #[serde(default)]
    pub percentage: f64,
}

fn to_whole(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawScalar::Number(value)) => to_whole(value),
        Some(RawScalar::Text(text)) => text.trim().parse::<f64>().map(to_whole).unwrap_or(0),
        None => 0,
    })
}
