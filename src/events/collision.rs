//! Collision event type.
//!
//! The collision detector triggers [`CollisionEvent`] once per overlapping
//! pair per tick. [`combat_observer`](crate::systems::collision::combat_observer)
//! turns the pairs that matter into damage.
use bevy_ecs::prelude::*;

/// Event fired when two entities with BoxCollider overlap.
///
/// The two fields, [`CollisionEvent::a`] and [`CollisionEvent::b`], are the
/// entity IDs of the participants. No ordering guarantees are provided.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}
