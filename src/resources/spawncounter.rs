use bevy_ecs::prelude::Resource;

use crate::components::spawnorder::SpawnOrder;

/// Hands out increasing [`SpawnOrder`] values.
#[derive(Resource, Debug, Default)]
pub struct SpawnCounter {
    next: u64,
}

impl SpawnCounter {
    pub fn next_order(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next);
        self.next += 1;
        order
    }
}
