//! Per-frame simulation tick
//!
//! One call per animation frame. Physics constants are flat per-tick amounts,
//! so the host's frame rate sets the game speed.

use super::collision::entity_collides;
use super::state::{GameEvent, GameState};

/// Input events gathered since the previous tick, applied before stepping
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (space/tap); restarts after game over
    pub jump: bool,
    /// Flip the debug overlay
    pub toggle_debug: bool,
}

/// Apply queued input, then advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.toggle_debug {
        state.toggle_debug();
    }
    if input.jump {
        state.request_jump();
    }

    step(state);
}

/// Advance the game by one tick with no input. No-op unless running.
pub fn step(state: &mut GameState) {
    state.just_ended = false;

    if !state.is_running() {
        return;
    }

    state.time_ticks += 1;

    state.entity.advance();
    state.field.advance(&mut state.rng);

    let bounds = state.entity.bounds();
    if entity_collides(&bounds, state.config.world_height, state.field.rects()) {
        state.end_run();
        return;
    }

    if state.field.check_passing(state.entity.pos.x) {
        state.score += state.config.pass_reward;
        state.field.adjust_difficulty(&state.config, state.score);
        state.events.push(GameEvent::Scored { score: state.score });
    }
}
