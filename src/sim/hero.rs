//! The player-controlled character
//!
//! Horizontal movement is a direct per-tick offset; jumping feeds the
//! vertical axis through gravity integration and collision resolution.
//! Damage is gated by an invulnerability window so one enemy contact
//! cannot drain several lives across consecutive ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Body;
use super::collision::resolve_vertical;
use super::input::InputState;
use super::world::World;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which way the sprite is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Visual motion state for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeroAnim {
    #[default]
    Idle,
    Walk,
    Jump,
}

/// The hero: physics body plus lives, damage gating and animation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub body: Body,
    pub lives: u8,
    /// Ticks of remaining damage immunity
    pub invulnerable_ticks: u32,
    /// Ticks of remaining hurt tint (visual only)
    pub flash_ticks: u32,
    pub facing: Facing,
    pub anim: HeroAnim,
    /// Current frame of the walk cycle
    pub walk_frame: u8,
    /// Ticks since the walk frame last advanced
    anim_ticks: u32,
}

impl Hero {
    /// Fresh hero resting on the ground at the spawn column
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            body: Body::resting_on(
                HERO_SPAWN_X,
                GROUND_Y,
                Vec2::new(HERO_WIDTH, HERO_HEIGHT),
            ),
            lives: tuning.starting_lives,
            invulnerable_ticks: 0,
            flash_ticks: 0,
            facing: Facing::default(),
            anim: HeroAnim::default(),
            walk_frame: 0,
            anim_ticks: 0,
        }
    }

    /// Advance one tick of movement, physics and collision
    pub fn update(&mut self, input: &InputState, world: &World, tuning: &Tuning) {
        // Left wins when both directions are held
        let walking = if input.left {
            self.body.pos.x -= tuning.hero_speed;
            self.facing = Facing::Left;
            true
        } else if input.right {
            self.body.pos.x += tuning.hero_speed;
            self.facing = Facing::Right;
            true
        } else {
            false
        };

        // No double-jump: the command is ignored while airborne
        if input.jump && !self.body.airborne {
            self.body.vel.y = tuning.jump_impulse;
            self.body.airborne = true;
        }

        self.body.integrate(tuning.gravity);
        resolve_vertical(&mut self.body, world);
        self.body.clamp_x(0.0, ARENA_WIDTH);

        self.advance_anim(walking);
    }

    fn advance_anim(&mut self, walking: bool) {
        if self.body.airborne {
            self.anim = HeroAnim::Jump;
        } else if walking {
            self.anim = HeroAnim::Walk;
            self.anim_ticks += 1;
            if self.anim_ticks >= ANIM_FRAME_TICKS {
                self.anim_ticks = 0;
                self.walk_frame = (self.walk_frame + 1) % WALK_FRAMES;
            }
        } else {
            self.anim = HeroAnim::Idle;
            self.walk_frame = 0;
            self.anim_ticks = 0;
        }
    }

    /// Apply a hit unless the invulnerability window is open
    ///
    /// Returns true if the hit landed. Lives saturate at zero; deciding what
    /// zero lives means is the session's job.
    pub fn take_damage(&mut self, tuning: &Tuning) -> bool {
        if self.invulnerable_ticks > 0 {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.invulnerable_ticks = tuning.invulnerability_ticks;
        self.flash_ticks = tuning.flash_ticks;
        true
    }

    /// Count down the invulnerability and flash windows (once per tick)
    pub fn decay_timers(&mut self) {
        if self.invulnerable_ticks > 0 {
            self.invulnerable_ticks -= 1;
        }
        if self.flash_ticks > 0 {
            self.flash_ticks -= 1;
        }
    }

    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ticks > 0
    }

    /// True while the hurt tint should show
    #[inline]
    pub fn is_flashing(&self) -> bool {
        self.flash_ticks > 0
    }
}
