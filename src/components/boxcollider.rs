use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;

/// Axis-aligned rectangular collider, `w` x `h` cells anchored at the entity's
/// [`MapPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct BoxCollider {
    pub w: i32,
    pub h: i32,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Returns `(min_x, min_y, max_x, max_y)` of the collider at `position`.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: MapPosition) -> (i32, i32, i32, i32) {
        let (x0, y0) = (position.x, position.y);
        let x1 = x0 + self.w;
        let y1 = y0 + self.h;
        (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    /// Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, position: MapPosition, other: &Self, other_position: MapPosition) -> bool {
        let (ax0, ay0, ax1, ay1) = self.aabb(position);
        let (bx0, by0, bx1, by1) = other.aabb(other_position);
        ax0 < bx1 && ax1 > bx0 && ay0 < by1 && ay1 > by0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes() {
        let a = BoxCollider::new(14, 28);
        let b = BoxCollider::new(14, 28);
        assert!(a.overlaps(MapPosition::new(0, 0), &b, MapPosition::new(10, 20)));
        assert!(b.overlaps(MapPosition::new(10, 20), &a, MapPosition::new(0, 0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoxCollider::new(14, 28);
        let b = BoxCollider::new(2, 7);
        assert!(!a.overlaps(MapPosition::new(0, 0), &b, MapPosition::new(14, 0)));
        assert!(!a.overlaps(MapPosition::new(0, 0), &b, MapPosition::new(5, 28)));
    }

    #[test]
    fn aabb_is_anchored_at_the_position() {
        let a = BoxCollider::new(7, 2);
        assert_eq!(a.aabb(MapPosition::new(-14, 14)), (-14, 14, -7, 16));
    }

    #[test]
    fn negative_size_is_normalized() {
        let a = BoxCollider::new(-4, -4);
        assert_eq!(a.aabb(MapPosition::new(10, 10)), (6, 6, 10, 10));
    }
}
