//! Seam towards the terminal screen engine.
//!
//! Drawing cells, loading images and reading keys belong to the screen
//! collaborator. The core talks to it through the [`Screen`] trait and only
//! decides *what* goes where: [`render_world`] walks the live entities in
//! insertion order, draws each one's current image, then overlays the
//! player's stats panel. The panel stays up after the avatar is removed.
//!
//! Coordinates passed to `draw_*` are level coordinates; the screen applies
//! the offset set by [`Screen::set_offset`].

pub mod headless;
pub mod hud;

use std::sync::Arc;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::animation::AnimatedSprite;
use crate::components::controller::{Controller, PlayerStats};
use crate::components::mapposition::MapPosition;
use crate::components::spawnorder::SpawnOrder;
use crate::components::sprite::Sprite;
use crate::resources::camera::CameraOffset;
use crate::resources::playerhud::PlayerHud;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
    Blue,
    Yellow,
    Magenta,
    Rgb(u8, u8, u8),
}

/// Rendering sink implemented by the terminal engine.
pub trait Screen {
    /// Current size in cells.
    fn size(&self) -> (i32, i32);
    /// Level offset applied to every subsequent draw.
    fn set_offset(&mut self, dx: i32, dy: i32);
    /// Draw the image registered under `tex_key` with its top-left at `(x, y)`.
    fn draw_image(&mut self, x: i32, y: i32, tex_key: &str);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color);
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
}

/// Draw the world onto `screen`.
pub fn render_world(world: &mut World, screen: &mut dyn Screen) {
    let camera = *world.resource::<CameraOffset>();
    screen.set_offset(camera.dx, camera.dy);

    let mut to_draw: Vec<(SpawnOrder, MapPosition, Arc<str>)> = {
        let mut q = world.query::<(
            &SpawnOrder,
            &MapPosition,
            Option<&Sprite>,
            Option<&AnimatedSprite>,
        )>();
        q.iter(world)
            .filter_map(|(order, pos, sprite, animated)| {
                let key = match (animated, sprite) {
                    (Some(animated), _) => animated.frames.get(animated.frame_index)?.clone(),
                    (None, Some(sprite)) => sprite.tex_key.clone(),
                    (None, None) => return None,
                };
                Some((*order, *pos, key))
            })
            .collect()
    };
    to_draw.sort_by_key(|(order, _, _)| *order);

    for (_, pos, key) in &to_draw {
        screen.draw_image(pos.x, pos.y, key);
    }

    let live: Vec<(MapPosition, PlayerStats)> = {
        let mut q = world.query::<(&MapPosition, &Controller)>();
        q.iter(world)
            .filter_map(|(pos, c)| c.as_player().map(|p| (*pos, p.clone())))
            .collect()
    };
    let players = if live.is_empty() {
        world
            .get_resource::<PlayerHud>()
            .map(|hud| hud.panels.clone())
            .unwrap_or_default()
    } else {
        world.insert_resource(PlayerHud {
            panels: live.clone(),
        });
        live
    };
    for (pos, stats) in &players {
        hud::draw_hud(screen, *pos, stats);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Draw call captured by [`RecordingScreen`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DrawCall {
        Offset(i32, i32),
        Image(i32, i32, String),
        Text(i32, i32, String, Color, Color),
        Rect(i32, i32, i32, i32, Color),
    }

    pub struct RecordingScreen {
        pub w: i32,
        pub h: i32,
        pub calls: Vec<DrawCall>,
    }

    impl RecordingScreen {
        pub fn new(w: i32, h: i32) -> Self {
            Self { w, h, calls: Vec::new() }
        }
    }

    impl Screen for RecordingScreen {
        fn size(&self) -> (i32, i32) {
            (self.w, self.h)
        }
        fn set_offset(&mut self, dx: i32, dy: i32) {
            self.calls.push(DrawCall::Offset(dx, dy));
        }
        fn draw_image(&mut self, x: i32, y: i32, tex_key: &str) {
            self.calls.push(DrawCall::Image(x, y, tex_key.to_string()));
        }
        fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color) {
            self.calls.push(DrawCall::Text(x, y, text.to_string(), fg, bg));
        }
        fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
            self.calls.push(DrawCall::Rect(x, y, w, h, color));
        }
    }
}
