//! Game configuration
//!
//! Every tunable constant of the simulation. Loaded from JSON by the host;
//! missing fields fall back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    // === Entity ===
    pub entity_size: f32,
    /// Added to velocity every tick
    pub gravity: f32,
    /// Velocity a jump sets (not adds)
    pub jump_force: f32,
    /// Start x as a fraction of world width
    pub entity_x_fraction: f32,
    /// Start y as a fraction of world height
    pub entity_y_fraction: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub base_gap: f32,
    pub base_speed: f32,
    pub spawn_distance: f32,
    /// Smallest height either segment of a pair may have
    pub min_segment_height: f32,

    // === Scoring & difficulty ===
    pub pass_reward: u64,
    pub speed_divisor: f32,
    pub speed_cap: f32,
    pub gap_divisor: f32,
    pub gap_reduction_cap: f32,
    pub max_speed: f32,
    pub min_gap: f32,

    // === Controls ===
    /// Whether a jump request before the first run starts it
    pub idle_jump_starts: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            entity_size: ENTITY_SIZE,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            entity_x_fraction: ENTITY_X_FRACTION,
            entity_y_fraction: ENTITY_Y_FRACTION,

            obstacle_width: OBSTACLE_WIDTH,
            base_gap: BASE_GAP,
            base_speed: BASE_SPEED,
            spawn_distance: SPAWN_DISTANCE,
            min_segment_height: MIN_SEGMENT_HEIGHT,

            pass_reward: PASS_REWARD,
            speed_divisor: SPEED_DIVISOR,
            speed_cap: SPEED_CAP,
            gap_divisor: GAP_DIVISOR,
            gap_reduction_cap: GAP_REDUCTION_CAP,
            max_speed: MAX_SPEED,
            min_gap: MIN_GAP,

            idle_jump_starts: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded config: world {}x{}, gap {}, speed {}",
            config.world_width,
            config.world_height,
            config.base_gap,
            config.base_speed
        );
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the simulation can run with these values.
    ///
    /// A gap too large for the world is allowed: segment heights clamp to the
    /// minimum instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("entity_size", self.entity_size)?;
        positive("gravity", self.gravity)?;
        if !(self.jump_force < 0.0) {
            return Err(ConfigError::invalid(
                "jump_force",
                format!("must be negative (upward), got {}", self.jump_force),
            ));
        }
        fraction("entity_x_fraction", self.entity_x_fraction)?;
        fraction("entity_y_fraction", self.entity_y_fraction)?;

        positive("obstacle_width", self.obstacle_width)?;
        positive("base_gap", self.base_gap)?;
        positive("base_speed", self.base_speed)?;
        if !(self.min_segment_height >= 0.0) {
            return Err(ConfigError::invalid(
                "min_segment_height",
                format!("must not be negative, got {}", self.min_segment_height),
            ));
        }
        if !(self.spawn_distance >= self.obstacle_width) {
            return Err(ConfigError::invalid(
                "spawn_distance",
                format!(
                    "must be at least obstacle_width ({}), got {}",
                    self.obstacle_width, self.spawn_distance
                ),
            ));
        }

        positive("speed_divisor", self.speed_divisor)?;
        positive("gap_divisor", self.gap_divisor)?;
        if !(self.speed_cap >= 0.0) {
            return Err(ConfigError::invalid("speed_cap", "must not be negative"));
        }
        if !(self.gap_reduction_cap >= 0.0) {
            return Err(ConfigError::invalid(
                "gap_reduction_cap",
                "must not be negative",
            ));
        }
        if !(self.max_speed >= self.base_speed) {
            return Err(ConfigError::invalid(
                "max_speed",
                format!(
                    "must be at least base_speed ({}), got {}",
                    self.base_speed, self.max_speed
                ),
            ));
        }
        if !(self.min_gap > 0.0 && self.min_gap <= self.base_gap) {
            return Err(ConfigError::invalid(
                "min_gap",
                format!(
                    "must be in (0, base_gap = {}], got {}",
                    self.base_gap, self.min_gap
                ),
            ));
        }
        Ok(())
    }

    /// Entity start position for these world dimensions
    pub fn entity_start(&self) -> (f32, f32) {
        (
            self.world_width * self.entity_x_fraction,
            self.world_height * self.entity_y_fraction,
        )
    }
}

// Written as `!(v > 0.0)` so NaN is rejected too.
fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(ConfigError::invalid(
            field,
            format!("must be positive, got {value}"),
        ));
    }
    Ok(())
}

fn fraction(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::invalid(
            field,
            format!("must be in [0, 1], got {value}"),
        ));
    }
    Ok(())
}
