//! The pursuing enemy
//!
//! Flies straight at the hero, one fixed-speed step per axis per tick, with
//! no platform or gravity interaction. Both axes step at full speed, so
//! diagonal pursuit is faster than axis-aligned.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::Body;
use crate::consts::*;
use crate::tuning::Tuning;

/// The enemy: a clamped pursuit body with a two-frame animation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    /// Current animation frame (alternates 0/1)
    pub frame: u8,
    /// Ticks since the frame last flipped
    anim_ticks: u32,
}

impl Enemy {
    /// Spawn at a seeded position in the upper air band
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let x = rng.random_range(0..=ARENA_WIDTH as u32) as f32;
        let y = rng.random_range(ENEMY_SPAWN_MIN_Y as u32..=ENEMY_SPAWN_MAX_Y as u32) as f32;
        Self {
            body: Body::new(Vec2::new(x, y), Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT)),
            frame: 0,
            anim_ticks: 0,
        }
    }

    /// Step toward the hero on both axes, then clamp to the arena
    ///
    /// Strict comparison: an exactly aligned axis steps negative.
    pub fn pursue(&mut self, hero_pos: Vec2, tuning: &Tuning) {
        let dx = hero_pos.x - self.body.pos.x;
        let dy = hero_pos.y - self.body.pos.y;

        self.body.pos.x += if dx > 0.0 {
            tuning.enemy_speed
        } else {
            -tuning.enemy_speed
        };
        self.body.pos.y += if dy > 0.0 {
            tuning.enemy_speed
        } else {
            -tuning.enemy_speed
        };

        self.body.clamp_x(0.0, ARENA_WIDTH);
        self.body.pos.y = self.body.pos.y.clamp(0.0, ARENA_HEIGHT);

        self.anim_ticks += 1;
        if self.anim_ticks >= ANIM_FRAME_TICKS {
            self.anim_ticks = 0;
            self.frame = (self.frame + 1) % ENEMY_FRAMES;
        }
    }
}
