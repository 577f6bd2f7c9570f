//! Input and AI decisions.
//!
//! Both systems only write a [`Steering`] intent; [`movement`] applies it.
//! Avatars react to key events only: a tick carrying
//! [`InputEvent::Other`](crate::events::input::InputEvent::Other) leaves every
//! character where it is.
//!
//! [`movement`]: crate::systems::movement::movement
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::controller::Controller;
use crate::components::steering::Steering;
use crate::resources::input::TickInput;
use crate::resources::rng::WorldRng;

/// Map arrow keys to the player's steering intent.
pub fn player_input_controller(
    mut query: Query<(&Controller, &mut Steering)>,
    input: Res<TickInput>,
) {
    for (controller, mut steering) in query.iter_mut() {
        if let Controller::PlayerControlled(_) = controller {
            steering.intent = input.key().and_then(|key| key.direction());
        }
    }
}

/// Enemies wander: one uniformly random direction per key tick.
pub fn wander_controller(
    mut query: Query<(Entity, &Controller, &mut Steering)>,
    input: Res<TickInput>,
    mut rng: ResMut<WorldRng>,
) {
    for (entity, controller, mut steering) in query.iter_mut() {
        if let Controller::EnemyControlled(_) = controller {
            steering.intent = if input.is_key() {
                Some(rng.direction())
            } else {
                None
            };
            trace!("{:?} wanders {:?}", entity, steering.intent);
        }
    }
}
