//! Fixed-timestep session pipeline
//!
//! One call to [`tick`] advances the whole session by a single step:
//!
//! 1. apply the frame's command, if any (start, restart, sound, quit)
//! 2. bail out unless the phase is `Playing`
//! 3. move the hero from held input, then the pursuer toward the hero
//! 4. resolve contact damage and check for a lost run
//! 5. feed wall-clock time to the countdown and check for a won run
//! 6. decay per-tick timers
//!
//! Movement is expressed in pixels per tick, so `dt` only drives the
//! countdown. A lost run wins any tie with an expiring countdown.

use super::events::GameEvent;
use super::input::{InputState, SessionCommand};
use super::state::{Session, SessionPhase};

/// What one advance of the session produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Side effects for the host to act on, in the order they happened
    pub events: Vec<GameEvent>,
    /// The exit control was activated; the host decides what that means
    pub quit: bool,
}

/// Advance the session by one step.
///
/// `dt` is the wall-clock seconds since the previous call.
pub fn tick(session: &mut Session, input: &InputState, dt: f32) -> TickResult {
    let mut result = TickResult::default();

    if let Some(command) = input.command {
        handle_command(session, command, &mut result);
    }

    // Menu and the terminal phases hold a frozen tableau
    if session.phase != SessionPhase::Playing {
        return result;
    }

    session.time_ticks += 1;

    session.hero.update(input, &session.world, &session.tuning);
    let hero_pos = session.hero.body.pos;
    session.enemy.pursue(hero_pos, &session.tuning);

    if session.hero.body.rect().intersects(&session.enemy.body.rect())
        && session.hero.take_damage(&session.tuning)
    {
        result
            .events
            .push(GameEvent::DamageTaken { lives_left: session.hero.lives });
        log::info!("hero hit, {} lives left", session.hero.lives);
    }

    if session.hero.lives == 0 {
        stop_music(session, &mut result.events);
        session.set_phase(SessionPhase::GameOver, &mut result.events);
        log::info!("run lost after {} ticks", session.time_ticks);
        return result;
    }

    if session.countdown.advance(dt) {
        stop_music(session, &mut result.events);
        session.set_phase(SessionPhase::Won, &mut result.events);
        log::info!("countdown finished, run survived");
        return result;
    }

    session.hero.decay_timers();
    session.hint_ticks = session.hint_ticks.saturating_sub(1);

    result
}

fn handle_command(session: &mut Session, command: SessionCommand, result: &mut TickResult) {
    match command {
        SessionCommand::Start if session.phase == SessionPhase::Menu => {
            session.begin_run(&mut result.events);
        }
        SessionCommand::Restart
            if matches!(session.phase, SessionPhase::Won | SessionPhase::GameOver) =>
        {
            session.begin_run(&mut result.events);
        }
        SessionCommand::ToggleSound => session.toggle_sound(&mut result.events),
        SessionCommand::Quit => result.quit = true,
        // Start and Restart outside their phase are dropped
        _ => {}
    }
}

fn stop_music(session: &mut Session, events: &mut Vec<GameEvent>) {
    if session.music_playing {
        session.music_playing = false;
        events.push(GameEvent::MusicShouldStop);
    }
}
