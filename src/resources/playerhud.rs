//! Last drawn stats panels.
//!
//! The panel belongs to the player, not to the avatar: once the avatar has
//! been removed the render pass keeps drawing the last panel it saw, frozen
//! at the final stats.

use bevy_ecs::prelude::Resource;

use crate::components::controller::PlayerStats;
use crate::components::mapposition::MapPosition;

#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerHud {
    /// Avatar position and stats per player, as of the last render pass.
    pub panels: Vec<(MapPosition, PlayerStats)>,
}
