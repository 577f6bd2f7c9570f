//! Tick update.
//!
//! Advances the shared [`WorldTick`](crate::resources::worldtime::WorldTick)
//! clock and stores the tick's input before the tick schedule runs.
use bevy_ecs::prelude::*;

use crate::events::input::InputEvent;
use crate::resources::input::TickInput;
use crate::resources::worldtime::WorldTick;

/// Start a new tick driven by `event`.
pub fn advance_tick(world: &mut World, event: InputEvent) {
    world.resource_mut::<WorldTick>().tick += 1;
    world.resource_mut::<TickInput>().event = event;
}
