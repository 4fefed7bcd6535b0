//! Read-only state for the external renderer
//!
//! The sim does no drawing. Once per frame the host takes a snapshot and
//! renders it however it likes; nothing here can mutate the session.

use glam::Vec2;
use serde::Serialize;

use super::enemy::Enemy;
use super::hero::{Facing, Hero, HeroAnim};
use super::rect::Rect;
use super::state::{Session, SessionPhase};
use super::world::Star;

/// One drawable entity, tagged by kind
#[derive(Debug, Clone, Serialize)]
pub enum SpriteView {
    Hero {
        pos: Vec2,
        size: Vec2,
        facing: Facing,
        anim: HeroAnim,
        walk_frame: u8,
        /// Hurt tint is active
        flashing: bool,
    },
    Enemy {
        pos: Vec2,
        size: Vec2,
        frame: u8,
    },
    PlatformSegment {
        rect: Rect,
    },
}

impl From<&Hero> for SpriteView {
    fn from(hero: &Hero) -> Self {
        SpriteView::Hero {
            pos: hero.body.pos,
            size: hero.body.size,
            facing: hero.facing,
            anim: hero.anim,
            walk_frame: hero.walk_frame,
            flashing: hero.is_flashing(),
        }
    }
}

impl From<&Enemy> for SpriteView {
    fn from(enemy: &Enemy) -> Self {
        SpriteView::Enemy {
            pos: enemy.body.pos,
            size: enemy.body.size,
            frame: enemy.frame,
        }
    }
}

/// Everything an external renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub phase: SessionPhase,
    pub lives: u8,
    pub countdown_secs: u32,
    /// For the audio sink: whether emitted events should be honored
    pub sound_enabled: bool,
    /// Show the survival hint near the top of the screen
    pub show_hint: bool,
    pub sprites: Vec<SpriteView>,
    pub stars: Vec<Star>,
}

impl Session {
    /// Capture the current state for drawing
    pub fn render_snapshot(&self) -> RenderSnapshot {
        let segment_count: usize = self.world.platforms.iter().map(|p| p.segments).sum();
        let mut sprites = Vec::with_capacity(2 + segment_count);
        sprites.push(SpriteView::from(&self.hero));
        sprites.push(SpriteView::from(&self.enemy));
        for platform in &self.world.platforms {
            for rect in platform.segment_rects() {
                sprites.push(SpriteView::PlatformSegment { rect });
            }
        }

        RenderSnapshot {
            phase: self.phase,
            lives: self.hero.lives,
            countdown_secs: self.countdown.remaining(),
            sound_enabled: self.sound_enabled,
            show_hint: self.hint_ticks > 0,
            sprites,
            stars: self.world.stars.clone(),
        }
    }
}
