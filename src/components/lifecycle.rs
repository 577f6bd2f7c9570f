//! Removal state machine for controller entities.
//!
//! A character whose health drops to zero is not despawned on the spot:
//!
//! ```text
//! Alive --(health <= 0, end of tick N)--> PendingRemoval --(start of tick N+1)--> Removed
//! ```
//!
//! `Removed` is not a variant: it is the entity being despawned. Between the
//! two ticks the entity is still in the world and the render pass draws it
//! one last time.
//!
//! # Related
//!
//! - [`crate::systems::lifecycle::mark_dead`] – `Alive -> PendingRemoval`
//! - [`crate::systems::lifecycle::reap_removed`] – `PendingRemoval -> Removed`

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    #[default]
    Alive,
    PendingRemoval,
}

impl Lifecycle {
    pub fn is_alive(self) -> bool {
        self == Lifecycle::Alive
    }
}
