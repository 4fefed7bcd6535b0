//! Headless demo driver
//!
//! Runs a scripted session against the simulation core and prints the final
//! render snapshot as JSON. Useful for eyeballing behavior and log output
//! without wiring up a real renderer. An optional first argument names a
//! tuning JSON file; any subset of fields overrides the defaults.

use std::time::{SystemTime, UNIX_EPOCH};
use std::{env, fs};

use star_chase::consts::TICK_DT;
use star_chase::sim::tick;
use star_chase::{InputState, Session, SessionPhase, Tuning};

/// Upper bound on the demo, in ticks (well past the ten second countdown)
const MAX_DEMO_TICKS: u32 = 1200;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let tuning = match env::args().nth(1) {
        Some(path) => match fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(err) => {
                log::warn!("Cannot read tuning file {path}, using defaults: {err}");
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };
    let mut session = Session::with_tuning(seed, tuning);
    log::info!("star-chase demo starting, seed {seed}");

    // Press the menu's start button the way a pointer-driven host would
    let click = Session::menu_regions().start.center();
    let start = InputState {
        command: Session::menu_regions().command_at(click),
        ..InputState::default()
    };

    // Fixed dt per tick, so the demo finishes instantly instead of in
    // real time
    for t in 0..MAX_DEMO_TICKS {
        let input = if t == 0 { start.clone() } else { scripted_input(t) };
        let result = tick(&mut session, &input, TICK_DT);

        for event in &result.events {
            log::info!("event: {event:?}");
        }
        if result.quit {
            log::info!("quit requested, stopping");
            break;
        }
        if matches!(session.phase, SessionPhase::Won | SessionPhase::GameOver) {
            log::info!("run ended in {:?} after {} ticks", session.phase, session.time_ticks);
            break;
        }
    }

    match serde_json::to_string_pretty(&session.render_snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}

/// Sweep back and forth across the arena, hopping every so often
fn scripted_input(t: u32) -> InputState {
    let sweep_right = (t / 120) % 2 == 0;
    InputState {
        left: !sweep_right,
        right: sweep_right,
        jump: t % 90 == 0,
        ..InputState::default()
    }
}
