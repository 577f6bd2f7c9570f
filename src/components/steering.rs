//! Per-tick movement intent.
//!
//! Controller systems ([`crate::systems::controller`]) decide where an avatar
//! wants to go this tick and store it here; the
//! [`movement`](crate::systems::movement::movement) system applies it.

use bevy_ecs::prelude::Component;

use crate::components::direction::Direction;

/// Movement intent for one tick.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Steering {
    /// Direction to step in this tick, `None` to stay put.
    pub intent: Option<Direction>,
    /// Cells moved per step.
    pub step: i32,
}

impl Steering {
    pub fn new(step: i32) -> Self {
        Self { intent: None, step }
    }
}

impl Default for Steering {
    fn default() -> Self {
        Self::new(1)
    }
}
