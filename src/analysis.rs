//! Weakness recommendations derived from damage negation and status resistances.

use crate::encounter::{DamageProfile, ResistanceProfile};

pub const BALANCED_APPROACH: &str = "Balanced approach";

/// Below this spread, no damage type stands out.
const MIN_DAMAGE_SPREAD: f64 = 15.0;
/// Build-up thresholds at or above this are never worth recommending.
const STATUS_CEILING: f64 = 400.0;

/// Ranks the attack types and status effects an encounter is most exposed to.
///
/// Damage types come first, then status effects, each ordered from the most
/// exploitable value up. Falls back to `["Balanced approach"]` when neither
/// profile yields a recommendation.
pub fn recommend(
    damage: Option<&DamageProfile>,
    resistances: Option<&ResistanceProfile>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(damage) = damage {
        recommendations.extend(damage_weaknesses(damage));
    }
    if let Some(resistances) = resistances {
        recommendations.extend(status_weaknesses(resistances));
    }

    if recommendations.is_empty() {
        recommendations.push(BALANCED_APPROACH.to_string());
    }
    recommendations
}

fn damage_weaknesses(damage: &DamageProfile) -> Vec<String> {
    let entries = damage.entries();
    let (min, max) = entries
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (_, value)| {
            (min.min(*value), max.max(*value))
        });

    if max - min < MIN_DAMAGE_SPREAD {
        return Vec::new();
    }

    let values: Vec<f64> = entries.iter().map(|(_, value)| *value).collect();
    select_below_midpoint(entries.to_vec(), midpoint_threshold(&values), f64::INFINITY)
}

fn status_weaknesses(resistances: &ResistanceProfile) -> Vec<String> {
    // Zero means the sheet had no build-up data, not that the enemy is helpless.
    let survivors: Vec<(&'static str, f64)> = resistances
        .entries()
        .into_iter()
        .filter_map(|(label, value)| value.numeric().map(|value| (label, value)))
        .filter(|(_, value)| *value != 0.0)
        .collect();

    if survivors.is_empty() {
        return Vec::new();
    }

    let values: Vec<f64> = survivors.iter().map(|(_, value)| *value).collect();
    select_below_midpoint(survivors, midpoint_threshold(&values), STATUS_CEILING)
}

/// Halfway between the minimum and the mean.
fn midpoint_threshold(values: &[f64]) -> f64 {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    min + (avg - min) * 0.5
}

fn select_below_midpoint(
    mut entries: Vec<(&'static str, f64)>,
    threshold: f64,
    ceiling: f64,
) -> Vec<String> {
    entries.retain(|(_, value)| *value <= threshold && *value < ceiling);
    // Stable sort keeps field order between equal values.
    entries.sort_by(|a, b| a.1.total_cmp(&b.1));
    entries
        .into_iter()
        .map(|(label, _)| label.to_string())
        .collect()
}
