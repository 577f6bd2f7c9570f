//! Insertion-order component for the draw pass.
//!
//! Query iteration order is an ECS detail, so every entity spawned through
//! [`SpawnCounter`](crate::resources::spawncounter::SpawnCounter) carries a
//! [`SpawnOrder`]. The renderer sorts by it to draw in insertion order.

use bevy_ecs::prelude::Component;

/// Monotonic insertion index. Lower values are drawn first (underneath).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);
