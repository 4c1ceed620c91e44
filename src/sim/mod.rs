//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Flat per-tick physics, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order, ordered ID sets)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use autopilot::{autopilot_input, should_jump};
pub use collision::{Rect, entity_collides, intersects, out_of_bounds};
pub use difficulty::{gap_for_score, speed_for_score};
pub use entity::Entity;
pub use obstacle::{Obstacle, ObstacleField, ObstacleRole};
pub use state::{GameEvent, GameObserver, GamePhase, GameState, dispatch};
pub use tick::{TickInput, step, tick};
