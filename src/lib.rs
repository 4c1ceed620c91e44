//! Gapfall - a side-scrolling gap-dodging game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `config`: Tunable game constants, loadable from JSON
//! - `highscores`: Best-score observer fed by simulation events
//! - `frame`: Frame-rate counter and debug overlay snapshot

pub mod config;
pub mod error;
pub mod frame;
pub mod highscores;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use frame::{DebugSnapshot, FrameStats};
pub use highscores::HighScores;

/// Game configuration defaults
pub mod consts {
    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Entity defaults
    pub const ENTITY_SIZE: f32 = 30.0;
    /// Per-tick downward acceleration
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_FORCE: f32 = -10.0;
    /// Entity start position as a fraction of world width/height
    pub const ENTITY_X_FRACTION: f32 = 0.2;
    pub const ENTITY_Y_FRACTION: f32 = 0.5;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const BASE_GAP: f32 = 200.0;
    pub const BASE_SPEED: f32 = 3.0;
    /// New pair spawns once the newest one is this far left of the right edge
    pub const SPAWN_DISTANCE: f32 = 300.0;
    pub const MIN_SEGMENT_HEIGHT: f32 = 100.0;

    /// Scoring and difficulty
    pub const PASS_REWARD: u64 = 100;
    pub const SPEED_DIVISOR: f32 = 1000.0;
    pub const SPEED_CAP: f32 = 2.0;
    pub const GAP_DIVISOR: f32 = 500.0;
    pub const GAP_REDUCTION_CAP: f32 = 50.0;
    pub const MAX_SPEED: f32 = 6.0;
    pub const MIN_GAP: f32 = 150.0;
}
