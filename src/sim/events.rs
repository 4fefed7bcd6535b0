//! Discrete events emitted by the simulation
//!
//! The sim never plays audio or draws text; it hands these out through the
//! tick result and the host decides what to do with them. The sound-enabled
//! flag in the render snapshot tells audio sinks whether to honor them.

use serde::{Deserialize, Serialize};

use super::state::SessionPhase;

/// One-shot notifications for external audio/log sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The hero was hit; carries the lives remaining afterward
    DamageTaken { lives_left: u8 },
    /// Ambient music should begin looping
    MusicShouldStart,
    /// Ambient music should stop
    MusicShouldStop,
    /// The session moved between phases
    PhaseChanged {
        from: SessionPhase,
        to: SessionPhase,
    },
}
