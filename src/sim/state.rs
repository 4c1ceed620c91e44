//! Game state and the run state machine
//!
//! `Idle` -> `Running` -> `GameOver` -> (restart) -> `Running`. Hosts read the
//! state through accessors and change it only through the operations here and
//! in [`super::tick`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::obstacle::ObstacleField;
use crate::config::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first run
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; a jump or start begins a new one
    GameOver,
}

/// Something observers may react to (sound, score text, high scores)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new run began
    Started,
    /// The entity jumped
    Jumped,
    /// An obstacle was cleared; carries the new score
    Scored { score: u64 },
    /// The run ended with this score
    GameOver { score: u64 },
}

/// A collaborator that reacts to game events (audio, score display, high scores)
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Feed a batch of drained events to an observer, in order
pub fn dispatch<O: GameObserver + ?Sized>(events: &[GameEvent], observer: &mut O) {
    for event in events {
        observer.on_event(event);
    }
}

/// Complete simulation state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    pub(crate) phase: GamePhase,
    pub(crate) score: u64,
    pub(crate) entity: Entity,
    pub(crate) field: ObstacleField,
    /// Debug overlay toggle (read by the renderer)
    pub(crate) debug: bool,
    /// Ticks simulated in the current run
    pub(crate) time_ticks: u64,
    /// Set on the tick that entered `GameOver`
    pub(crate) just_ended: bool,
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle session. Call [`start`](Self::start) to begin the first run.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let entity = Entity::new(&config);
        let field = ObstacleField::new(&config);
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            entity,
            field,
            debug: false,
            time_ticks: 0,
            just_ended: false,
            events: Vec::new(),
        }
    }

    /// Reset everything and begin a run. Ignored while already running.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Running {
            return;
        }

        self.score = 0;
        self.time_ticks = 0;
        self.just_ended = false;
        self.entity.reset();
        self.field.adjust_difficulty(&self.config, 0);
        self.field.reset(&mut self.rng);
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        log::info!("Run started (seed {})", self.seed);
    }

    /// Jump while running, restart after game over.
    ///
    /// Before the first run this starts only if `idle_jump_starts` is set.
    pub fn request_jump(&mut self) {
        match self.phase {
            GamePhase::Running => {
                self.entity.apply_impulse();
                self.events.push(GameEvent::Jumped);
            }
            GamePhase::GameOver => self.start(),
            GamePhase::Idle => {
                if self.config.idle_jump_starts {
                    self.start();
                }
            }
        }
    }

    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
        log::info!("Debug mode: {}", self.debug);
    }

    /// End the run (collision)
    pub(crate) fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        self.just_ended = true;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!(
            "Game over: score {} after {} ticks",
            self.score,
            self.time_ticks
        );
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// True only right after the tick that ended the run
    pub fn just_ended(&self) -> bool {
        self.just_ended
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(state.phase(), GamePhase::Idle);
        assert!(!state.is_running());
        assert!(!state.is_game_over());
        assert!(state.field().is_empty());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_start_resets_and_runs() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.start();
        assert!(state.is_running());
        assert_eq!(state.field().len(), 2);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.start();
        state.request_jump();
        let velocity = state.entity().velocity;
        state.start();
        assert_eq!(state.entity().velocity, velocity);
        assert_eq!(state.field().len(), 2);
    }

    #[test]
    fn test_idle_jump_is_noop_by_default() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.request_jump();
        assert_eq!(state.phase(), GamePhase::Idle);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_idle_jump_can_start() {
        let config = GameConfig {
            idle_jump_starts: true,
            ..Default::default()
        };
        let mut state = GameState::new(config, 1);
        state.request_jump();
        assert!(state.is_running());
        // Starting does not also jump
        assert_eq!(state.entity().velocity, 0.0);
    }

    #[test]
    fn test_jump_while_running() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.start();
        state.drain_events();
        state.request_jump();
        assert_eq!(state.entity().velocity, -10.0);
        assert_eq!(state.drain_events(), vec![GameEvent::Jumped]);
    }

    #[test]
    fn test_jump_after_game_over_restarts() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.start();
        state.score = 300;
        state.end_run();
        assert!(state.is_game_over());
        assert!(state.just_ended());

        state.request_jump();
        assert!(state.is_running());
        assert!(!state.just_ended());
        assert_eq!(state.score(), 0);
        assert_eq!(state.entity().velocity, 0.0);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::Started,
                GameEvent::GameOver { score: 300 },
                GameEvent::Started
            ]
        );
    }

    #[test]
    fn test_restart_resets_difficulty() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.start();
        let config = state.config.clone();
        state.field.adjust_difficulty(&config, 25_000);
        state.end_run();
        state.start();
        assert_eq!(state.field().speed(), 3.0);
        assert_eq!(state.field().gap(), 200.0);
    }

    #[test]
    fn test_toggle_debug() {
        let mut state = GameState::new(GameConfig::default(), 1);
        assert!(!state.debug());
        state.toggle_debug();
        assert!(state.debug());
        state.toggle_debug();
        assert!(!state.debug());
    }
}
