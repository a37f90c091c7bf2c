//! User-tunable settings, stored as `config.json` in the config directory.

use super::constants::*;
use crate::fishing::{CastRules, FishingRules};
use crate::scene::{Actor, CatchArea};
use crate::utils::persistence::{config_dir, load_json_or_default, save_json};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Every gameplay tunable. Fields missing from the file take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub wait_secs: f64,
    pub forced_cotd_cast: u32,
    pub cotd_bonus_casts: u32,
    pub cast_distance: f32,
    pub line_length: f32,
    pub facing_threshold: f32,
    pub lake_center: [f32; 2],
    pub lake_radius: f32,
    pub player_speed: f32,
    /// Radians per turn key press
    pub turn_step: f32,
    pub fish_rise_per_tick: f32,
    pub fish_rise_target: f32,
    /// No leaderboard delivery when unset
    pub leaderboard_url: Option<String>,
    pub leaderboard_timeout_secs: u64,
    pub player_id: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wait_secs: DEFAULT_WAIT_SECS,
            forced_cotd_cast: FORCED_COTD_CAST,
            cotd_bonus_casts: COTD_BONUS_CASTS,
            cast_distance: CAST_DISTANCE,
            line_length: LINE_LENGTH,
            facing_threshold: FACING_THRESHOLD,
            lake_center: LAKE_CENTER,
            lake_radius: LAKE_RADIUS,
            player_speed: PLAYER_SPEED,
            turn_step: TURN_STEP,
            fish_rise_per_tick: FISH_RISE_PER_TICK,
            fish_rise_target: FISH_RISE_TARGET,
            leaderboard_url: None,
            leaderboard_timeout_secs: LEADERBOARD_TIMEOUT_SECS,
            player_id: None,
        }
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl GameConfig {
    pub fn path() -> io::Result<PathBuf> {
        Ok(config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads from the default location, ensuring a player id exists.
    pub fn load() -> io::Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Loads from `path`. A generated player id is written back.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let mut config: GameConfig = load_json_or_default(path);
        if config.ensure_player_id() {
            log::info!("generated player id, saving {}", path.display());
            config.save_to(path)?;
        }
        Ok(config.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        save_json(path, self)
    }

    /// Assigns a fresh UUID if there is no player id. Returns true if it did.
    pub fn ensure_player_id(&mut self) -> bool {
        match &self.player_id {
            Some(id) if !id.trim().is_empty() => false,
            _ => {
                self.player_id = Some(uuid::Uuid::new_v4().to_string());
                true
            }
        }
    }

    /// Replaces values the game can't run with by their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.wait_secs.is_finite() && self.wait_secs > 0.0) {
            log::warn!("invalid wait_secs {}, using {}", self.wait_secs, defaults.wait_secs);
            self.wait_secs = defaults.wait_secs;
        }
        self.forced_cotd_cast = self.forced_cotd_cast.max(1);
        self.cast_distance = positive_or(self.cast_distance, defaults.cast_distance);
        self.line_length = positive_or(self.line_length, defaults.line_length);
        self.facing_threshold = if self.facing_threshold.is_finite() {
            self.facing_threshold.clamp(-1.0, 1.0)
        } else {
            defaults.facing_threshold
        };
        if !self.lake_center.iter().all(|c| c.is_finite()) {
            self.lake_center = defaults.lake_center;
        }
        if !(self.lake_radius.is_finite() && self.lake_radius > 0.0) {
            log::warn!("invalid lake_radius {}, using {}", self.lake_radius, defaults.lake_radius);
            self.lake_radius = defaults.lake_radius;
        }
        self.player_speed = positive_or(self.player_speed, defaults.player_speed);
        self.turn_step = positive_or(self.turn_step, defaults.turn_step);
        self.fish_rise_per_tick = positive_or(self.fish_rise_per_tick, defaults.fish_rise_per_tick);
        self.fish_rise_target = positive_or(self.fish_rise_target, defaults.fish_rise_target);
        self.leaderboard_timeout_secs = self.leaderboard_timeout_secs.max(1);
        if self
            .leaderboard_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            self.leaderboard_url = None;
        }
        self
    }

    pub fn cast_rules(&self) -> CastRules {
        CastRules {
            cast_distance: self.cast_distance,
            facing_threshold: self.facing_threshold,
        }
    }

    pub fn fishing_rules(&self) -> FishingRules {
        FishingRules {
            wait_ms: (self.wait_secs * 1000.0).round() as i64,
            forced_cotd_cast: self.forced_cotd_cast,
            cotd_bonus_casts: self.cotd_bonus_casts,
            line_length: self.line_length,
            fish_rise_per_tick: self.fish_rise_per_tick,
            fish_rise_target: self.fish_rise_target,
            catch_weight: CATCH_WEIGHT,
            cast: self.cast_rules(),
        }
    }

    pub fn catch_area(&self) -> CatchArea {
        CatchArea::new(Vec2::from(self.lake_center), self.lake_radius)
    }

    pub fn leaderboard_timeout(&self) -> Duration {
        Duration::from_secs(self.leaderboard_timeout_secs)
    }

    /// Where a new session starts: on the shore south of the lake, facing it.
    pub fn start_actor(&self) -> Actor {
        let center = Vec2::from(self.lake_center);
        Actor::new(center.x, center.y + self.lake_radius + SHORE_OFFSET, 0.0)
    }

    /// The configured player id, or an empty string before `ensure_player_id`.
    pub fn player_id(&self) -> &str {
        self.player_id.as_deref().unwrap_or_default()
    }
}
