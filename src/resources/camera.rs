//! Level offset that keeps the player in view.
//!
//! Written by [`camera_follow`](crate::systems::camera::camera_follow) and
//! handed to [`Screen::set_offset`](crate::render::Screen::set_offset) at the
//! start of each render pass.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CameraOffset {
    pub dx: i32,
    pub dy: i32,
}

impl CameraOffset {
    /// Offset that centres an avatar of width `avatar_w` at `(x, y)`
    /// horizontally and anchors it at the top fifth of the screen.
    pub fn follow(screen_w: i32, screen_h: i32, x: i32, y: i32, avatar_w: i32) -> Self {
        Self {
            dx: screen_w / 2 - avatar_w / 2 - x,
            dy: screen_h / 5 - y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_centres_horizontally() {
        let off = CameraOffset::follow(120, 40, 0, 0, 14);
        assert_eq!(off, CameraOffset { dx: 53, dy: 8 });
        let off = CameraOffset::follow(120, 40, 10, 5, 14);
        assert_eq!(off, CameraOffset { dx: 43, dy: 3 });
    }
}
