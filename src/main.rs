//! Gapfall headless driver
//!
//! Plays the scheduler and input source for a seeded demo session:
//! `gapfall [config.json] [seed]`.

use std::error::Error;

use gapfall::sim::{GameState, autopilot_input, dispatch, tick};
use gapfall::{DebugSnapshot, FrameStats, GameConfig, HighScores};

/// Runs played before exiting
const DEMO_RUNS: u32 = 5;
/// Tick limit per run
const MAX_TICKS_PER_RUN: u64 = 10_000;
/// Simulated frame interval for the FPS counter (60 Hz)
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Gapfall (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(&path)?)?,
        None => GameConfig::default(),
    };
    let seed = match args.next() {
        Some(seed) => seed.parse::<u64>()?,
        None => 42,
    };

    let mut state = GameState::new(config, seed);
    let mut scores = HighScores::new();
    let mut frames = FrameStats::new();
    let mut frame_time = 0.0;

    state.start();
    let mut runs = 1;
    loop {
        let input = autopilot_input(&state);
        tick(&mut state, &input);
        frame_time += FRAME_MS;
        frames.record(frame_time);
        dispatch(&state.drain_events(), &mut scores);

        if state.just_ended() {
            let snapshot = DebugSnapshot::capture(&state, &frames);
            log::info!("Run {} ended: {}", runs, snapshot.lines().join(", "));
            if runs >= DEMO_RUNS {
                break;
            }
            runs += 1;
        } else if state.time_ticks() >= MAX_TICKS_PER_RUN {
            log::info!(
                "Run {} reached the tick limit with score {}",
                runs,
                state.score()
            );
            // Unfinished runs still count; continue on a fresh seed
            scores.add_score(state.score(), runs);
            if runs >= DEMO_RUNS {
                break;
            }
            runs += 1;
            let next_seed = state.seed().wrapping_add(runs as u64);
            state = GameState::new(state.config().clone(), next_seed);
            state.start();
        }
    }

    println!("Best score: {}", scores.best());
    println!("{}", scores.to_json()?);
    Ok(())
}
