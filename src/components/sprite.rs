use std::sync::Arc;

use bevy_ecs::prelude::Component;

/// Single static image identified by its texture key (the asset path).
/// Used for backdrops and spell projectiles; walking characters use
/// [`AnimatedSprite`](crate::components::animation::AnimatedSprite).
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub tex_key: Arc<str>,
}

impl Sprite {
    pub fn new(tex_key: impl Into<Arc<str>>) -> Self {
        Self {
            tex_key: tex_key.into(),
        }
    }
}
