//! Obstacle field: scrolling pairs of segments framing a gap
//!
//! Pairs spawn at the right edge and scroll left every tick. The live list is
//! kept in spawn order (oldest first); segments only ever leave from the
//! front, so it never needs sorting.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, intersects};
use super::difficulty::{gap_for_score, speed_for_score};
use crate::config::GameConfig;

/// Which half of a pair a segment is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleRole {
    /// Hangs from the ceiling
    Upper,
    /// Rises from the ground; the only role that scores
    Lower,
}

/// One vertical segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Unique for the lifetime of the field
    pub id: u32,
    pub role: ObstacleRole,
    pub rect: Rect,
}

impl Obstacle {
    /// Right edge; once this is behind the entity the segment is passed
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.rect.right()
    }
}

/// Owns every live obstacle plus the current speed and gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Live segments, spawn order (lower then upper per pair)
    obstacles: Vec<Obstacle>,
    /// IDs of lower segments already scored
    scored: BTreeSet<u32>,
    gap: f32,
    speed: f32,
    world_width: f32,
    world_height: f32,
    obstacle_width: f32,
    spawn_distance: f32,
    min_height: f32,
    next_id: u32,
}

impl ObstacleField {
    /// Create an empty field at base difficulty
    pub fn new(config: &GameConfig) -> Self {
        Self {
            obstacles: Vec::new(),
            scored: BTreeSet::new(),
            gap: config.base_gap,
            speed: config.base_speed,
            world_width: config.world_width,
            world_height: config.world_height,
            obstacle_width: config.obstacle_width,
            spawn_distance: config.spawn_distance,
            min_height: config.min_segment_height,
            next_id: 1,
        }
    }

    /// Clear everything and spawn the first pair.
    ///
    /// Speed and gap are left alone; the caller resets difficulty.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.obstacles.clear();
        self.scored.clear();
        self.spawn_pair(rng);
    }

    /// Allocate a new obstacle ID
    fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a pair at the right edge with a random gap position
    pub fn spawn_pair<R: Rng>(&mut self, rng: &mut R) {
        let lower_height = self.draw_lower_height(rng);
        let upper_height = self.world_height - self.gap - lower_height;
        let x = self.world_width;

        let lower_id = self.next_obstacle_id();
        let upper_id = self.next_obstacle_id();

        self.obstacles.push(Obstacle {
            id: lower_id,
            role: ObstacleRole::Lower,
            rect: Rect::new(
                x,
                self.world_height - lower_height,
                self.obstacle_width,
                lower_height,
            ),
        });
        self.obstacles.push(Obstacle {
            id: upper_id,
            role: ObstacleRole::Upper,
            rect: Rect::new(x, 0.0, self.obstacle_width, upper_height),
        });

        log::debug!(
            "Spawned pair {}/{}: lower {:.1}, gap {:.1}, upper {:.1}",
            lower_id,
            upper_id,
            lower_height,
            self.gap,
            upper_height
        );
    }

    /// Uniform in `[min, world_height - gap - min]`, or exactly `min` when
    /// that range is empty
    fn draw_lower_height<R: Rng>(&self, rng: &mut R) -> f32 {
        let min = self.min_height;
        let max = self.world_height - self.gap - self.min_height;
        if max > min {
            rng.random_range(min..=max)
        } else {
            min
        }
    }

    /// Scroll left, drop expired segments, then spawn if needed
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        for obstacle in &mut self.obstacles {
            obstacle.rect.pos.x -= self.speed;
        }

        let scored = &mut self.scored;
        self.obstacles.retain(|obstacle| {
            let expired = obstacle.trailing_edge() < 0.0;
            if expired {
                scored.remove(&obstacle.id);
                log::trace!("Removed obstacle {}", obstacle.id);
            }
            !expired
        });

        let needs_spawn = match self.obstacles.last() {
            None => true,
            Some(newest) => newest.rect.left() < self.world_width - self.spawn_distance,
        };
        if needs_spawn {
            self.spawn_pair(rng);
        }
    }

    /// Mark every unscored lower segment now behind `entity_x` as scored.
    ///
    /// Returns true if at least one was newly scored.
    pub fn check_passing(&mut self, entity_x: f32) -> bool {
        let mut passed = false;
        for obstacle in &self.obstacles {
            if obstacle.role == ObstacleRole::Lower
                && entity_x > obstacle.trailing_edge()
                && self.scored.insert(obstacle.id)
            {
                log::debug!("Passed obstacle {}", obstacle.id);
                passed = true;
            }
        }
        passed
    }

    /// Whether `bounds` overlaps any live segment
    pub fn check_collision(&self, bounds: &Rect) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| intersects(bounds, &obstacle.rect))
    }

    /// Recompute speed and gap from the score. Existing pairs keep their shape.
    pub fn adjust_difficulty(&mut self, config: &GameConfig, score: u64) {
        self.speed = speed_for_score(config, score);
        self.gap = gap_for_score(config, score);
        log::debug!(
            "Difficulty at score {}: speed {:.3}, gap {:.1}",
            score,
            self.speed,
            self.gap
        );
    }

    /// Segments at least partly inside the visible world
    pub fn on_screen(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles
            .iter()
            .filter(|o| o.trailing_edge() > 0.0 && o.rect.left() < self.world_width)
    }

    /// The first lower segment the entity has not yet cleared
    pub fn next_lower(&self, entity_x: f32) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .find(|o| o.role == ObstacleRole::Lower && o.trailing_edge() > entity_x)
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.obstacles.iter().map(|o| &o.rect)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn is_scored(&self, id: u32) -> bool {
        self.scored.contains(&id)
    }

    pub fn scored_count(&self) -> usize {
        self.scored.len()
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}
