//! Gameplay tuning loaded from ~/.duskrunner/config.json.

use std::io;

use serde::{Deserialize, Serialize};

use crate::utils::persistence;

/// File name inside the app directory.
pub const CONFIG_FILE: &str = "config.json";

/// Tuning table. Every field falls back to its built-in value when the
/// config file is missing, partial, or fails validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Downward acceleration in rows/sec².
    pub gravity: f64,
    /// Jump velocity in rows/sec. Negative = upward.
    pub jump_impulse: f64,
    /// Obstacle velocity in cols/sec. Negative = leftward.
    pub obstacle_speed: f64,
    /// Seconds between obstacle spawns (fixed delay).
    pub spawn_interval: f64,
    /// Seconds per day/night phase.
    pub day_length: f64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            gravity: 60.0,
            jump_impulse: -21.0,
            obstacle_speed: -16.0,
            spawn_interval: 2.0,
            day_length: 60.0,
        }
    }
}

impl RunnerConfig {
    /// Load from disk, falling back to defaults, then field-validate.
    pub fn load() -> Self {
        persistence::load_json_or_default::<RunnerConfig>(CONFIG_FILE).validated()
    }

    /// Write the current table to disk (seeds an editable file on first
    /// run).
    pub fn save(&self) -> io::Result<()> {
        persistence::save_json(CONFIG_FILE, self)
    }

    /// True if a config file is already present.
    pub fn exists_on_disk() -> bool {
        persistence::file_path(CONFIG_FILE)
            .map(|p| p.exists())
            .unwrap_or(false)
    }

    /// Replace out-of-range fields with their defaults, each field
    /// independently. Signs are part of the contract: gravity pulls
    /// down, jumps and obstacle velocity point the other way.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            self.gravity = defaults.gravity;
        }
        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            self.jump_impulse = defaults.jump_impulse;
        }
        if !(self.obstacle_speed.is_finite() && self.obstacle_speed < 0.0) {
            self.obstacle_speed = defaults.obstacle_speed;
        }
        if !(self.spawn_interval.is_finite() && self.spawn_interval > 0.0) {
            self.spawn_interval = defaults.spawn_interval;
        }
        if !(self.day_length.is_finite() && self.day_length > 0.0) {
            self.day_length = defaults.day_length;
        }
        self
    }
}
