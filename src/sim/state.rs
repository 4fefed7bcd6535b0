//! Session state and run lifecycle
//!
//! Everything a playthrough mutates lives in one owned [`Session`] aggregate:
//! phase, timers, sound flags and the hero/enemy/world trio. A run's entities
//! are discarded and rebuilt on every start or restart; nothing leaks across
//! runs except the seed-derived RNG stream.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::Countdown;
use super::enemy::Enemy;
use super::events::GameEvent;
use super::hero::Hero;
use super::input::SessionCommand;
use super::rect::Rect;
use super::world::World;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Title menu, nothing simulating
    Menu,
    /// Active run
    Playing,
    /// Countdown survived; frozen tableau until restart
    Won,
    /// Lives exhausted; frozen tableau until restart
    GameOver,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the current (seed, stream) pair
    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }

    /// Bump to the next stream so a new run draws fresh values
    pub fn next_stream(&mut self) -> Pcg32 {
        self.stream = self.stream.wrapping_add(1);
        self.to_rng()
    }
}

/// Hit-testable menu controls
///
/// The sim never sees raw pointer events; the host tests click positions
/// against these and feeds back the matching [`SessionCommand`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MenuRegions {
    pub start: Rect,
    pub toggle_sound: Rect,
    pub exit: Rect,
}

impl MenuRegions {
    /// Map a pointer position to the command it triggers, if any
    pub fn command_at(&self, point: Vec2) -> Option<SessionCommand> {
        if self.start.contains_point(point) {
            Some(SessionCommand::Start)
        } else if self.toggle_sound.contains_point(point) {
            Some(SessionCommand::ToggleSound)
        } else if self.exit.contains_point(point) {
            Some(SessionCommand::Quit)
        } else {
            None
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Seed for reproducibility
    pub seed: u64,
    /// RNG state; the stream bumps once per run
    pub rng_state: RngState,
    /// Current phase
    pub phase: SessionPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Sound preference, read by the external audio sink
    pub sound_enabled: bool,
    /// Whether music has been started and not stopped since
    pub music_playing: bool,
    /// Survival countdown (wall-clock paced)
    pub countdown: Countdown,
    /// Ticks the on-screen hint stays visible (cosmetic)
    pub hint_ticks: u32,
    pub hero: Hero,
    pub enemy: Enemy,
    pub world: World,
    /// Gameplay balance in effect
    pub tuning: Tuning,
}

impl Session {
    /// Create a new session in the menu with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let hero = Hero::spawn(&tuning);
        let enemy = Enemy::spawn(&mut rng);
        let world = World::generate(&mut rng);
        let countdown = Countdown::new(tuning.countdown_secs);
        let hint_ticks = tuning.hint_secs * TICK_RATE;

        Self {
            seed,
            rng_state,
            phase: SessionPhase::Menu,
            time_ticks: 0,
            sound_enabled: true,
            music_playing: false,
            countdown,
            hint_ticks,
            hero,
            enemy,
            world,
            tuning,
        }
    }

    /// Start a fresh run: rebuild the entities, reset the timers, go Playing
    ///
    /// Serves both the menu's "start" and the terminal screens' "restart".
    pub fn begin_run(&mut self, events: &mut Vec<GameEvent>) {
        let mut rng = self.rng_state.next_stream();
        self.hero = Hero::spawn(&self.tuning);
        self.enemy = Enemy::spawn(&mut rng);
        self.world = World::generate(&mut rng);
        self.countdown.reset(self.tuning.countdown_secs);
        self.hint_ticks = self.tuning.hint_secs * TICK_RATE;

        if self.sound_enabled && !self.music_playing {
            events.push(GameEvent::MusicShouldStart);
            self.music_playing = true;
        }

        self.set_phase(SessionPhase::Playing, events);
        log::info!(
            "Run started (seed {}, stream {})",
            self.seed,
            self.rng_state.stream
        );
    }

    /// Flip the sound flag, stopping or resuming music to match
    pub fn toggle_sound(&mut self, events: &mut Vec<GameEvent>) {
        if self.sound_enabled {
            events.push(GameEvent::MusicShouldStop);
            self.music_playing = false;
            self.sound_enabled = false;
        } else {
            self.sound_enabled = true;
            if !self.music_playing {
                events.push(GameEvent::MusicShouldStart);
                self.music_playing = true;
            }
        }
        log::debug!("Sound enabled: {}", self.sound_enabled);
    }

    /// Record a phase change, emitting the transition event
    pub(crate) fn set_phase(&mut self, to: SessionPhase, events: &mut Vec<GameEvent>) {
        if self.phase != to {
            events.push(GameEvent::PhaseChanged {
                from: self.phase,
                to,
            });
            self.phase = to;
        }
    }

    /// Menu button rectangles, stacked at the screen center
    pub fn menu_regions() -> MenuRegions {
        let x = ARENA_WIDTH / 2.0 - MENU_BUTTON_WIDTH / 2.0;
        let y = ARENA_HEIGHT / 2.0;
        MenuRegions {
            start: Rect::new(
                x,
                y - MENU_BUTTON_STRIDE,
                MENU_BUTTON_WIDTH,
                MENU_BUTTON_HEIGHT,
            ),
            toggle_sound: Rect::new(x, y, MENU_BUTTON_WIDTH, MENU_BUTTON_HEIGHT),
            exit: Rect::new(
                x,
                y + MENU_BUTTON_STRIDE,
                MENU_BUTTON_WIDTH,
                MENU_BUTTON_HEIGHT,
            ),
        }
    }
}
