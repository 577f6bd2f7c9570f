//! Lazy removal of dead characters.
//!
//! See [`Lifecycle`] for the state machine. [`mark_dead`] runs after combat,
//! [`reap_removed`] runs first thing in the next tick, which leaves exactly
//! one render pass in between where the dead character is still drawn.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::controller::Controller;
use crate::components::lifecycle::Lifecycle;

/// `Alive -> PendingRemoval` for every character at or below zero health.
pub fn mark_dead(mut query: Query<(Entity, &Controller, &mut Lifecycle)>) {
    for (entity, controller, mut lifecycle) in query.iter_mut() {
        if lifecycle.is_alive() && controller.is_dead() {
            *lifecycle = Lifecycle::PendingRemoval;
            debug!("{:?} died (health {})", entity, controller.health());
        }
    }
}

/// `PendingRemoval -> Removed`: despawn everything marked last tick.
pub fn reap_removed(query: Query<(Entity, &Lifecycle)>, mut commands: Commands) {
    for (entity, lifecycle) in query.iter() {
        if *lifecycle == Lifecycle::PendingRemoval {
            debug!("{:?} removed", entity);
            commands.entity(entity).try_despawn();
        }
    }
}
