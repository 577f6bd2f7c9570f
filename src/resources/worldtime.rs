use bevy_ecs::prelude::Resource;

/// Discrete simulation clock: one tick per input event.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldTick {
    pub tick: u64,
}
