//! The controlled entity and its vertical physics
//!
//! The entity never moves horizontally; the world scrolls under it. Gravity
//! and jumps are flat per-tick amounts, not scaled by elapsed time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;

/// The falling body the player controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity (positive = downward)
    pub velocity: f32,
    /// Edge length of the square hitbox
    pub size: f32,
    /// World dimensions the entity was placed in
    world: Vec2,
    start_fraction: Vec2,
    gravity: f32,
    jump_force: f32,
}

impl Entity {
    /// Create an entity already reset to its start position
    pub fn new(config: &GameConfig) -> Self {
        let mut entity = Self {
            pos: Vec2::ZERO,
            velocity: 0.0,
            size: config.entity_size,
            world: Vec2::new(config.world_width, config.world_height),
            start_fraction: Vec2::new(config.entity_x_fraction, config.entity_y_fraction),
            gravity: config.gravity,
            jump_force: config.jump_force,
        };
        entity.reset();
        entity
    }

    /// Back to the start position, at rest
    pub fn reset(&mut self) {
        self.pos = self.world * self.start_fraction;
        self.velocity = 0.0;
    }

    /// Jump: override velocity with the jump force (repeated jumps don't stack)
    pub fn apply_impulse(&mut self) {
        self.velocity = self.jump_force;
    }

    /// One tick of gravity. No clamping; leaving the world is a collision.
    pub fn advance(&mut self) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;
    }

    /// Hitbox for collision queries
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::splat(self.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_places_entity_at_start() {
        let mut entity = Entity::new(&GameConfig::default());
        assert_eq!(entity.pos, Vec2::new(160.0, 300.0));
        assert_eq!(entity.velocity, 0.0);

        entity.apply_impulse();
        entity.advance();
        entity.reset();
        assert_eq!(entity.pos, Vec2::new(160.0, 300.0));
        assert_eq!(entity.velocity, 0.0);
    }

    #[test]
    fn test_advance_applies_gravity() {
        let mut entity = Entity::new(&GameConfig::default());
        entity.advance();
        assert_eq!(entity.velocity, 0.5);
        assert_eq!(entity.pos.y, 300.5);
    }

    #[test]
    fn test_impulse_then_advance() {
        let mut entity = Entity::new(&GameConfig::default());
        entity.apply_impulse();
        entity.advance();
        assert_eq!(entity.velocity, -9.5);
        assert_eq!(entity.pos.y, 290.5);
    }

    #[test]
    fn test_impulses_do_not_accumulate() {
        let mut entity = Entity::new(&GameConfig::default());
        entity.apply_impulse();
        entity.apply_impulse();
        entity.apply_impulse();
        assert_eq!(entity.velocity, -10.0);
    }

    #[test]
    fn test_x_never_changes() {
        let mut entity = Entity::new(&GameConfig::default());
        for i in 0..50 {
            if i % 7 == 0 {
                entity.apply_impulse();
            }
            entity.advance();
            assert_eq!(entity.pos.x, 160.0);
        }
    }

    #[test]
    fn test_trajectories_are_bit_identical() {
        let config = GameConfig::default();
        let mut a = Entity::new(&config);
        let mut b = Entity::new(&config);
        for i in 0..200 {
            if i % 13 == 0 {
                a.apply_impulse();
                b.apply_impulse();
            }
            a.advance();
            b.advance();
            assert_eq!(a.pos.y.to_bits(), b.pos.y.to_bits());
            assert_eq!(a.velocity.to_bits(), b.velocity.to_bits());
        }
    }

    #[test]
    fn test_bounds_match_position() {
        let entity = Entity::new(&GameConfig::default());
        let bounds = entity.bounds();
        assert_eq!(bounds.left(), 160.0);
        assert_eq!(bounds.bottom(), 330.0);
    }
}
