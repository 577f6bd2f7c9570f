use bevy_ecs::prelude::*;

use crate::components::animation::AnimatedSprite;
use crate::components::mapposition::MapPosition;
use crate::components::steering::Steering;

/// Step every steered avatar one move in its intended direction, clamped to
/// the non-negative quadrant, and advance its walk animation.
pub fn movement(mut query: Query<(&mut MapPosition, &mut AnimatedSprite, &Steering)>) {
    for (mut position, mut sprite, steering) in query.iter_mut() {
        let Some(direction) = steering.intent else {
            continue;
        };
        let (dx, dy) = direction.delta();
        position.move_clamped(dx * steering.step, dy * steering.step);
        sprite.advance(direction);
    }
}
