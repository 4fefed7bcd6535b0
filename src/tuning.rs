//! Data-driven game balance
//!
//! Every gameplay number lives here so a balance pass never touches sim code.
//! A JSON file can override any subset of fields; the rest keep their
//! defaults.

use serde::{Deserialize, Serialize};

/// Gameplay balance values
///
/// Velocities are in pixels per tick, gravity in pixels per tick squared,
/// windows in ticks, countdowns in whole seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Hero horizontal speed
    pub hero_speed: f32,
    /// Upward velocity applied on jump (negative is up)
    pub jump_impulse: f32,
    /// Downward acceleration applied every tick
    pub gravity: f32,
    /// Enemy per-axis pursuit speed
    pub enemy_speed: f32,
    /// Lives at the start of a run
    pub starting_lives: u8,
    /// Ticks of damage immunity after a hit
    pub invulnerability_ticks: u32,
    /// Ticks of hurt tint (visual only, shorter than the immunity window)
    pub flash_ticks: u32,
    /// Seconds the hero must survive to win
    pub countdown_secs: u32,
    /// Seconds the on-screen hint stays up after a run starts
    pub hint_secs: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            hero_speed: 5.0,
            jump_impulse: -18.0,
            gravity: 1.0,
            enemy_speed: 3.0,
            starting_lives: 3,
            invulnerability_ticks: 60,
            flash_ticks: 30,
            countdown_secs: 10,
            hint_secs: 20,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse tuning from JSON, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("Bad tuning JSON, using defaults: {err}");
                Self::default()
            }
        }
    }
}
