//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only; `dt` feeds nothing but the survival countdown
//! - Seeded RNG only, one fresh stream per run
//! - No rendering, audio, or platform dependencies; side effects leave
//!   as [`GameEvent`]s and hosts draw from [`RenderSnapshot`]s

pub mod actor;
pub mod clock;
pub mod collision;
pub mod enemy;
pub mod events;
pub mod hero;
pub mod input;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod world;

pub use actor::Body;
pub use clock::Countdown;
pub use collision::{Support, resolve_vertical};
pub use enemy::Enemy;
pub use events::GameEvent;
pub use hero::{Facing, Hero, HeroAnim};
pub use input::{InputState, SessionCommand};
pub use rect::Rect;
pub use snapshot::{RenderSnapshot, SpriteView};
pub use state::{MenuRegions, RngState, Session, SessionPhase};
pub use tick::{TickResult, tick};
pub use world::{Platform, Star, World};
