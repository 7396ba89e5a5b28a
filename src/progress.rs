// progress.rs

use crate::{
    encounter::{NgLevel, ProgressStats},
    error::ApiError,
};

/// Last known "percentage analyzed" counters for the active NG level.
#[derive(Debug, Default, Clone)]
pub struct ProgressTracker {
    stats: Option<ProgressStats>,
    level: Option<NgLevel>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Option<&ProgressStats> {
        self.stats.as_ref()
    }

    /// NG level the current stats were fetched for.
    pub fn level(&self) -> Option<NgLevel> {
        self.level
    }

    /// Stores a refresh result. Failures keep whatever was there before.
    pub fn apply(&mut self, level: NgLevel, outcome: Result<ProgressStats, ApiError>) {
        match outcome {
            Ok(stats) => {
                log::debug!(
                    "Progress for {level}: {}/{} ({}%)",
                    stats.analyzed_enemies,
                    stats.total_enemies,
                    stats.percentage
                );
                self.stats = Some(stats);
                self.level = Some(level);
            }
            Err(e) => {
                log::warn!("Failed to refresh progress for {level}: {e}");
            }
        }
    }
}
