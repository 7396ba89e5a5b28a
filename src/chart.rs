//! Chart series and color scales for defense and resistance panels.

use ratatui::style::Color;

use crate::encounter::{DamageProfile, EffectivePoise, ResistanceProfile, ResistanceValue};

#[derive(Debug, Clone, PartialEq)]
pub struct DefensePoint {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResistancePoint {
    pub label: &'static str,
    pub value: f64,
    pub display_label: String,
}

pub const IMMUNE_LABEL: &str = "Immune";
pub const NOT_APPLICABLE_LABEL: &str = "N/A";

pub fn defense_series(damage: Option<&DamageProfile>) -> Vec<DefensePoint> {
    damage
        .map(|damage| {
            damage
                .entries()
                .into_iter()
                .map(|(label, value)| DefensePoint { label, value })
                .collect()
        })
        .unwrap_or_default()
}

pub fn resistance_series(resistances: Option<&ResistanceProfile>) -> Vec<ResistancePoint> {
    let Some(resistances) = resistances else {
        return Vec::new();
    };

    resistances
        .entries()
        .into_iter()
        .map(|(label, value)| match value {
            ResistanceValue::Numeric(value) => ResistancePoint {
                label,
                value,
                display_label: format_number(value),
            },
            ResistanceValue::Immune => ResistancePoint {
                label,
                value: 0.0,
                display_label: IMMUNE_LABEL.to_string(),
            },
            ResistanceValue::NotApplicable => ResistancePoint {
                label,
                value: 0.0,
                display_label: NOT_APPLICABLE_LABEL.to_string(),
            },
        })
        .collect()
}

// Upper bounds are exclusive: a value equal to a bound belongs to the next bucket.
const DEFENSE_SCALE: [(f64, Color); 6] = [
    (-10.0, Color::Rgb(0x2e, 0xcc, 0x71)),
    (0.0, Color::Rgb(0x7d, 0xd8, 0x6b)),
    (20.0, Color::Rgb(0xd4, 0xe1, 0x57)),
    (40.0, Color::Rgb(0xf1, 0xc4, 0x0f)),
    (60.0, Color::Rgb(0xe6, 0x7e, 0x22)),
    (80.0, Color::Rgb(0xe7, 0x4c, 0x3c)),
];
pub const DEFENSE_TOP_COLOR: Color = Color::Rgb(0x8e, 0x44, 0xad);

const RESISTANCE_SCALE: [(f64, Color); 4] = [
    (300.0, Color::Rgb(0x2e, 0xcc, 0x71)),
    (600.0, Color::Rgb(0xf1, 0xc4, 0x0f)),
    (900.0, Color::Rgb(0xe6, 0x7e, 0x22)),
    (1200.0, Color::Rgb(0xe7, 0x4c, 0x3c)),
];
pub const RESISTANCE_ZERO_COLOR: Color = Color::Rgb(0x7f, 0x8c, 0x8d);
pub const RESISTANCE_TOP_COLOR: Color = Color::Rgb(0x8e, 0x44, 0xad);

pub fn defense_color(value: f64) -> Color {
    DEFENSE_SCALE
        .iter()
        .find(|(bound, _)| value < *bound)
        .map(|(_, color)| *color)
        .unwrap_or(DEFENSE_TOP_COLOR)
}

/// Zero is its own bucket: it reads as "immune or no data", not "very vulnerable".
pub fn resistance_color(value: f64) -> Color {
    if value == 0.0 {
        return RESISTANCE_ZERO_COLOR;
    }
    RESISTANCE_SCALE
        .iter()
        .find(|(bound, _)| value < *bound)
        .map(|(_, color)| *color)
        .unwrap_or(RESISTANCE_TOP_COLOR)
}

pub fn poise_label(poise: &EffectivePoise) -> String {
    match poise {
        EffectivePoise::Finite(value) => value.to_string(),
        EffectivePoise::Unbreakable => "∞".to_string(),
    }
}

/// Whole numbers print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
