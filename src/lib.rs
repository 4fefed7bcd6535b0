//! Star Chase - a single-screen survival platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio playback and raw input polling live outside this crate.
//! The simulation consumes one [`sim::InputState`] per tick and exposes
//! [`sim::RenderSnapshot`] plus discrete [`sim::GameEvent`]s in return.

pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, InputState, RenderSnapshot, Session, SessionCommand, SessionPhase};
pub use tuning::Tuning;

/// Arena and presentation constants
pub mod consts {
    /// Nominal simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed timestep at the nominal rate
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Arena dimensions (y grows downward)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Top of the ground strip; actors rest their bottom edge here
    pub const GROUND_Y: f32 = 500.0;

    /// Hero sprite bounds
    pub const HERO_WIDTH: f32 = 24.0;
    pub const HERO_HEIGHT: f32 = 30.0;
    /// Hero spawn column (resting on the ground)
    pub const HERO_SPAWN_X: f32 = 20.0;

    /// Enemy sprite bounds
    pub const ENEMY_WIDTH: f32 = 32.0;
    pub const ENEMY_HEIGHT: f32 = 32.0;
    /// Enemy spawns somewhere in the upper air band
    pub const ENEMY_SPAWN_MIN_Y: f32 = 50.0;
    pub const ENEMY_SPAWN_MAX_Y: f32 = 200.0;

    /// Platform segment tile size
    pub const SEGMENT_WIDTH: f32 = 32.0;
    pub const SEGMENT_HEIGHT: f32 = 16.0;
    /// Segments per platform
    pub const PLATFORM_SEGMENTS: usize = 3;
    /// Left edges of the three fixed platforms
    pub const PLATFORM_XS: [f32; 3] = [200.0, 400.0, 600.0];
    /// Shared platform top
    pub const PLATFORM_TOP_Y: f32 = 400.0;

    /// Decorative star field
    pub const NUM_STARS: usize = 100;
    /// Stars only populate the upper band of the sky
    pub const STAR_MAX_Y: f32 = 300.0;

    /// Ticks between walk/enemy animation frames (5 fps at the nominal rate)
    pub const ANIM_FRAME_TICKS: u32 = 12;
    /// Frames in the hero walk cycle
    pub const WALK_FRAMES: u8 = 4;
    /// Frames in the enemy cycle
    pub const ENEMY_FRAMES: u8 = 2;

    /// Menu button geometry (stacked at screen center)
    pub const MENU_BUTTON_WIDTH: f32 = 300.0;
    pub const MENU_BUTTON_HEIGHT: f32 = 60.0;
    /// Vertical spacing between button tops
    pub const MENU_BUTTON_STRIDE: f32 = 80.0;
}
