use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::controller::Controller;
use crate::components::mapposition::MapPosition;
use crate::resources::camera::CameraOffset;
use crate::resources::screensize::ScreenSize;

/// Keep the player horizontally centred and near the top fifth of the screen.
/// The offset is left untouched once the player is gone.
pub fn camera_follow(
    query: Query<(&Controller, &MapPosition, &BoxCollider)>,
    screen: Res<ScreenSize>,
    mut camera: ResMut<CameraOffset>,
) {
    for (controller, position, collider) in query.iter() {
        if controller.as_player().is_some() {
            *camera = CameraOffset::follow(screen.w, screen.h, position.x, position.y, collider.w);
        }
    }
}
