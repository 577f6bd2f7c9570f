use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// World-space cell position (top-left corner) of an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: i32,
    pub y: i32,
}

impl MapPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move by `(dx, dy)` without any bounds.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Move by `(dx, dy)` and clamp both axes to be non-negative.
    /// The world has no upper bound.
    pub fn move_clamped(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx).max(0);
        self.y = self.y.saturating_add(dy).max(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_clamped_never_goes_negative() {
        let starts = [(0, 0), (3, 1), (100, 200), (0, 50)];
        let moves = [(-1, 0), (0, -1), (-1000, -1000), (i32::MIN, i32::MIN), (-3, 7)];
        for (sx, sy) in starts {
            for (dx, dy) in moves {
                let mut p = MapPosition::new(sx, sy);
                p.move_clamped(dx, dy);
                assert!(p.x >= 0 && p.y >= 0, "({sx},{sy}) + ({dx},{dy}) -> {p:?}");
            }
        }
    }

    #[test]
    fn move_clamped_has_no_upper_bound() {
        let mut p = MapPosition::new(10_000, 10_000);
        p.move_clamped(1, 1);
        assert_eq!(p, MapPosition::new(10_001, 10_001));
    }

    #[test]
    fn translate_allows_negative_coordinates() {
        let mut p = MapPosition::new(2, 2);
        p.translate(-7, 0);
        assert_eq!(p, MapPosition::new(-5, 2));
    }
}
