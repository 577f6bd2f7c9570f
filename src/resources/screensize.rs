//! Screen size resource.
//!
//! Stores the current terminal dimensions in cells. The camera system reads
//! it to keep the player in view; the driver refreshes it from
//! [`Screen::size`](crate::render::Screen::size) every tick.

use bevy_ecs::prelude::Resource;

/// Current screen size in cells.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in cells.
    pub w: i32,
    /// Height in cells.
    pub h: i32,
}
