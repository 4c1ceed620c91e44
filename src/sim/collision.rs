//! Collision detection for axis-aligned rectangles
//!
//! Everything in the world is a box: the entity, every obstacle segment and
//! the world itself. Touching edges never count as an overlap; the world's
//! top and bottom edges do count as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Strict overlap test on both axes
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Check if a box touches or crosses the ceiling (y = 0) or the ground
pub fn out_of_bounds(bounds: &Rect, world_height: f32) -> bool {
    bounds.top() <= 0.0 || bounds.bottom() >= world_height
}

/// Full collision query: world boundaries first, then every obstacle
pub fn entity_collides<'a>(
    bounds: &Rect,
    world_height: f32,
    obstacles: impl IntoIterator<Item = &'a Rect>,
) -> bool {
    out_of_bounds(bounds, world_height)
        || obstacles.into_iter().any(|rect| intersects(bounds, rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        // Shares the bottom edge
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        // Corner only
        let d = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(!intersects(&a, &b));
        assert!(!intersects(&a, &c));
        assert!(!intersects(&a, &d));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(intersects(&outer, &inner));
    }

    #[test]
    fn test_world_boundaries_are_inclusive() {
        let world_height = 600.0;

        let inside = Rect::new(160.0, 300.0, 30.0, 30.0);
        assert!(!out_of_bounds(&inside, world_height));
        assert!(!entity_collides(&inside, world_height, std::iter::empty()));

        let ceiling = Rect::new(160.0, 0.0, 30.0, 30.0);
        assert!(out_of_bounds(&ceiling, world_height));

        let ground = Rect::new(160.0, world_height - 30.0, 30.0, 30.0);
        assert!(out_of_bounds(&ground, world_height));

        let just_above_ground = Rect::new(160.0, world_height - 30.5, 30.0, 30.0);
        assert!(!out_of_bounds(&just_above_ground, world_height));
    }

    #[test]
    fn test_entity_collides_with_any_obstacle() {
        let entity = Rect::new(160.0, 300.0, 30.0, 30.0);
        let miss = Rect::new(400.0, 0.0, 60.0, 200.0);
        let hit = Rect::new(170.0, 320.0, 60.0, 280.0);
        assert!(!entity_collides(&entity, 600.0, &[miss]));
        assert!(entity_collides(&entity, 600.0, &[miss, hit]));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }

        #[test]
        fn edge_adjacent_rects_never_intersect(a in rect_strategy(), h in 0.0f32..200.0) {
            let right_neighbour = Rect::new(a.right(), a.top(), 10.0, h);
            let below_neighbour = Rect::new(a.left(), a.bottom(), a.size.x, h);
            prop_assert!(!intersects(&a, &right_neighbour));
            prop_assert!(!intersects(&a, &below_neighbour));
        }
    }
}
