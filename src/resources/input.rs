//! Input delivered for the current tick.
//!
//! The interactive loop hands exactly one [`InputEvent`] to the core per
//! tick through [`advance_tick`](crate::systems::time::advance_tick); every
//! controller system reads it from this resource.
use bevy_ecs::prelude::*;

use crate::events::input::{InputEvent, Key};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInput {
    pub event: InputEvent,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            event: InputEvent::Other,
        }
    }
}

impl TickInput {
    /// The key pressed this tick, if the event was a key press.
    pub fn key(&self) -> Option<Key> {
        match self.event {
            InputEvent::Key(key) => Some(key),
            InputEvent::Other => None,
        }
    }

    pub fn is_key(&self) -> bool {
        self.key().is_some()
    }
}
