//! Loads and saves the daily progression record, resetting it when the
//! calendar day changes.
//!
//! Progression is best-effort: a missing, unreadable or malformed record
//! starts a fresh day instead of failing.

use super::types::DailyProgressionState;
use crate::fishing::cotd::date_key;
use crate::utils::persistence::{KeyValueStore, StoreError};
use chrono::NaiveDate;

/// Key the record is stored under.
pub const PROGRESSION_KEY: &str = "fishing_state";

/// Reads the record for `today`, resetting it if it belongs to another day.
pub fn load_state(backend: &impl KeyValueStore, today: NaiveDate) -> DailyProgressionState {
    let today_key = date_key(today);

    let stored = match backend.get(PROGRESSION_KEY) {
        Ok(Some(json)) => match serde_json::from_str::<DailyProgressionState>(&json) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("progression record is malformed, starting fresh: {}", e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("progression store unavailable, starting fresh: {}", e);
            None
        }
    };

    match stored {
        Some(state) if state.date == today_key => state,
        Some(state) => {
            log::info!("new day {} (last played {})", today_key, state.date);
            DailyProgressionState::fresh(today_key)
        }
        None => DailyProgressionState::fresh(today_key),
    }
}

/// Writes the whole record.
pub fn save_state(
    backend: &mut impl KeyValueStore,
    state: &DailyProgressionState,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(state)?;
    backend.set(PROGRESSION_KEY, &json)
}

/// Owns the live progression record and its backing store.
#[derive(Debug)]
pub struct DailyProgressionStore<S: KeyValueStore> {
    backend: S,
    state: DailyProgressionState,
}

impl<S: KeyValueStore> DailyProgressionStore<S> {
    /// Loads the record for `today` from `backend`.
    pub fn load(backend: S, today: NaiveDate) -> Self {
        let state = load_state(&backend, today);
        Self { backend, state }
    }

    pub fn state(&self) -> &DailyProgressionState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut DailyProgressionState {
        &mut self.state
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Persists the live record.
    pub fn save(&mut self) -> Result<(), StoreError> {
        save_state(&mut self.backend, &self.state)
    }

    /// The day the live record belongs to.
    pub fn date(&self) -> &str {
        &self.state.date
    }

    /// Resets the record if `today` is a different day. Returns true if it did.
    ///
    /// The reset record is not written until the next save.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        let today_key = date_key(today);
        if self.state.date == today_key {
            return false;
        }
        log::info!("day rolled over {} -> {}", self.state.date, today_key);
        self.state = DailyProgressionState::fresh(today_key);
        true
    }
}
