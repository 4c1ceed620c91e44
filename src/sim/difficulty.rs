//! Difficulty curve
//!
//! Scroll speed rises and the gap shrinks as the score grows, both saturating.

use crate::config::GameConfig;

/// Scroll speed for a score, never above `max_speed`
pub fn speed_for_score(config: &GameConfig, score: u64) -> f32 {
    let boost = (score as f32 / config.speed_divisor).min(config.speed_cap);
    (config.base_speed + boost).min(config.max_speed)
}

/// Gap size for a score, never below `min_gap`
pub fn gap_for_score(config: &GameConfig, score: u64) -> f32 {
    let reduction = (score as f32 / config.gap_divisor).min(config.gap_reduction_cap);
    (config.base_gap - reduction).max(config.min_gap)
}
