//! Demo mode: a simple controller that plays the game
//!
//! Keeps the entity hovering just above the next lower segment. Jumps only
//! when the next tick of gravity would drop it into the safety margin.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Clearance kept above the lower segment's top edge
const HOVER_MARGIN: f32 = 8.0;

/// Decide this tick's input for demo play
pub fn autopilot_input(state: &GameState) -> TickInput {
    TickInput {
        jump: should_jump(state),
        ..Default::default()
    }
}

/// Whether the demo player wants to jump now
pub fn should_jump(state: &GameState) -> bool {
    match state.phase() {
        GamePhase::Running => {}
        // Jump is also the restart gesture
        GamePhase::GameOver => return true,
        GamePhase::Idle => return false,
    }

    let entity = state.entity();
    let config = state.config();
    let floor = state
        .field()
        .next_lower(entity.pos.x)
        .map(|lower| lower.rect.top())
        .unwrap_or(config.world_height);

    let predicted_bottom = entity.pos.y + entity.size + entity.velocity + config.gravity;
    predicted_bottom > floor - HOVER_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::tick::tick;

    #[test]
    fn test_idle_never_jumps() {
        let state = GameState::new(GameConfig::default(), 3);
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_jumps_when_low() {
        let mut state = GameState::new(GameConfig::default(), 3);
        state.start();
        let floor = state.field().next_lower(160.0).map(|o| o.rect.top());
        let floor = floor.expect("first pair present");

        state.entity.pos.y = floor - 30.0;
        assert!(should_jump(&state));

        state.entity.pos.y = floor - 200.0;
        state.entity.velocity = 0.0;
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_restarts_after_game_over() {
        let mut state = GameState::new(GameConfig::default(), 3);
        state.start();
        state.end_run();
        assert!(should_jump(&state));
    }

    #[test]
    fn test_clears_first_obstacles() {
        let mut state = GameState::new(GameConfig::default(), 42);
        state.start();
        for _ in 0..1_000 {
            let input = autopilot_input(&state);
            tick(&mut state, &input);
            assert!(state.is_running(), "crashed at tick {}", state.time_ticks());
        }
        assert!(state.score() >= 300);
    }
}
