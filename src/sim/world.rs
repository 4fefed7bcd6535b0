//! Static arena description
//!
//! Built once per run: a ground line, three fixed platforms and a seeded
//! decorative star field. Immutable for the lifetime of the run.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// A decorative background star (no physics)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Grayscale intensity, 150-255
    pub brightness: u8,
}

/// A row of collidable segments sharing one top edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Left edge of the first segment
    pub x: f32,
    /// Top edge shared by every segment
    pub top: f32,
    /// Number of segments in the row
    pub segments: usize,
}

impl Platform {
    pub fn new(x: f32, top: f32) -> Self {
        Self {
            x,
            top,
            segments: PLATFORM_SEGMENTS,
        }
    }

    /// Bounding box of segment `index`
    pub fn segment_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.x + index as f32 * SEGMENT_WIDTH,
            self.top,
            SEGMENT_WIDTH,
            SEGMENT_HEIGHT,
        )
    }

    /// All segment boxes, left to right
    pub fn segment_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.segments).map(|i| self.segment_rect(i))
    }

    /// True if `rect` overlaps any segment
    pub fn overlaps(&self, rect: &Rect) -> bool {
        self.segment_rects().any(|seg| seg.intersects(rect))
    }
}

/// Immutable arena state for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Actors rest their bottom edge here
    pub ground_y: f32,
    /// Fixed platforms, stored left to right (resolution order)
    pub platforms: Vec<Platform>,
    /// Cosmetic star field, regenerated per run
    pub stars: Vec<Star>,
}

impl World {
    /// Build the fixed arena with a freshly drawn star field
    pub fn generate(rng: &mut impl Rng) -> Self {
        let platforms = PLATFORM_XS
            .iter()
            .map(|&x| Platform::new(x, PLATFORM_TOP_Y))
            .collect();

        let stars = (0..NUM_STARS)
            .map(|_| {
                let x = rng.random_range(0..=ARENA_WIDTH as u32) as f32;
                let y = rng.random_range(0..=STAR_MAX_Y as u32) as f32;
                let radius = rng.random_range(1..=3u32) as f32;
                let brightness = rng.random_range(150..=255u8);
                Star {
                    pos: Vec2::new(x, y),
                    radius,
                    brightness,
                }
            })
            .collect();

        Self {
            ground_y: GROUND_Y,
            platforms,
            stars,
        }
    }

    /// Bare ground with no platforms or stars (degenerate arenas still work)
    pub fn bare() -> Self {
        Self {
            ground_y: GROUND_Y,
            platforms: Vec::new(),
            stars: Vec::new(),
        }
    }
}
