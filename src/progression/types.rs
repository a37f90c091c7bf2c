//! The persisted per-day progression record.

use serde::{Deserialize, Serialize};

/// Progression for one calendar day.
///
/// Serialized with the field names `date`, `castsToday`, `cotdCaught` and
/// `catchBonusRemaining`. Missing fields read as zero/false.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyProgressionState {
    /// ISO calendar day (`YYYY-MM-DD`)
    pub date: String,
    pub casts_today: u32,
    pub cotd_caught: bool,
    /// Upcoming resolutions that roll with 2x odds
    pub catch_bonus_remaining: u32,
}

impl DailyProgressionState {
    /// A fresh record for `date`.
    pub fn fresh(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            casts_today: 0,
            cotd_caught: false,
            catch_bonus_remaining: 0,
        }
    }

    pub fn bonus_active(&self) -> bool {
        self.catch_bonus_remaining > 0
    }

    /// Tracker text, e.g. "🔥 2x Odds: 3 casts left". None when no bonus.
    pub fn bonus_tracker_text(&self) -> Option<String> {
        match self.catch_bonus_remaining {
            0 => None,
            1 => Some("🔥 2x Odds: 1 cast left".to_string()),
            n => Some(format!("🔥 2x Odds: {} casts left", n)),
        }
    }
}
