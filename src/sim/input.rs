//! Per-tick input snapshot
//!
//! The host polls whatever devices it likes and hands the sim one snapshot
//! per tick. Pointer clicks never reach the sim directly; the host maps them
//! to a [`SessionCommand`] through the exposed menu regions.

/// Session-level actions produced by the host's input-to-action mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Leave the menu and start a run
    Start,
    /// Flip the sound-enabled flag
    ToggleSound,
    /// Start a fresh run from a won/lost screen
    Restart,
    /// Ask the host process to exit
    Quit,
}

/// Input state for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Move left this tick
    pub left: bool,
    /// Move right this tick
    pub right: bool,
    /// Jump command (edge, not level - host sends it on key press)
    pub jump: bool,
    /// Mapped session action, if any
    pub command: Option<SessionCommand>,
}

impl InputState {
    /// Snapshot with a command and no movement
    pub fn command(command: SessionCommand) -> Self {
        Self {
            command: Some(command),
            ..Self::default()
        }
    }
}
