//! Shared physics body for the hero and the enemy
//!
//! Position is the sprite center and y grows downward, so falling bodies
//! have velocity.y > 0. Horizontal motion is a direct position delta driven
//! by input or AI; only the vertical axis carries velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// A movable bounding box with gravity-driven vertical motion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Sprite center
    pub pos: Vec2,
    /// Per-tick velocity (x stays 0; horizontal moves bypass it)
    pub vel: Vec2,
    /// Full sprite extent
    pub size: Vec2,
    /// Set on jump, cleared by collision resolution
    pub airborne: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            airborne: false,
        }
    }

    /// Place a body so its bottom edge rests on `surface_y`
    pub fn resting_on(x: f32, surface_y: f32, size: Vec2) -> Self {
        Self::new(Vec2::new(x, surface_y - size.y / 2.0), size)
    }

    /// One integration step: gravity into velocity, then velocity into position
    pub fn integrate(&mut self, gravity: f32) {
        self.vel.y += gravity;
        self.pos += self.vel;
    }

    /// Bounding box at the current position
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Bottom edge y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Move so the bottom edge sits exactly at `y`
    pub fn snap_bottom_to(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// True while moving downward
    #[inline]
    pub fn falling(&self) -> bool {
        self.vel.y > 0.0
    }

    /// Clamp the center x into the arena span
    pub fn clamp_x(&mut self, min: f32, max: f32) {
        self.pos.x = self.pos.x.clamp(min, max);
    }
}
