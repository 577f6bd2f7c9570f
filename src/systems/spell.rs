//! Spell projectile lifecycle.
//!
//! # System Flow
//!
//! Each tick:
//!
//! 1. [`spell_flight`] moves every projectile `speed` cells along its
//!    direction and counts the tick. Projectiles fly on every tick, key or not.
//! 2. Collision resolution may mark a projectile `hit`.
//! 3. [`spawn_cast_spells`] turns a pending cast into a new projectile next
//!    to the caster.
//! 4. [`expire_spells`] despawns projectiles that hit something or have
//!    flown for `duration_ticks` ticks.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::AnimatedSprite;
use crate::components::boxcollider::BoxCollider;
use crate::components::controller::Controller;
use crate::components::mapposition::MapPosition;
use crate::components::spell::{SpellEffect, spawn_box};
use crate::components::sprite::Sprite;
use crate::resources::spawncounter::SpawnCounter;

pub fn spell_flight(mut query: Query<(&mut MapPosition, &mut SpellEffect)>) {
    for (mut position, mut spell) in query.iter_mut() {
        spell.ticks_elapsed += 1;
        let (dx, dy) = spell.direction.delta();
        position.translate(dx * spell.speed, dy * spell.speed);
    }
}

/// Consume each player's cast flag and spawn the projectile on the side the
/// caster is facing.
pub fn spawn_cast_spells(
    mut casters: Query<(Entity, &mut Controller, &MapPosition, &BoxCollider, &AnimatedSprite)>,
    mut counter: ResMut<SpawnCounter>,
    mut commands: Commands,
) {
    for (entity, mut controller, position, collider, sprite) in casters.iter_mut() {
        let Some(player) = controller.as_player_mut() else {
            continue;
        };
        if !player.take_cast() {
            continue;
        }
        let direction = sprite.direction;
        let (x, y, w, h) = spawn_box(*position, collider.w, collider.h, direction);
        let spell = commands
            .spawn((
                MapPosition::new(x, y),
                BoxCollider::new(w, h),
                SpellEffect::new(direction, &player.spell),
                Sprite::new(player.spell_frame(direction).clone()),
                counter.next_order(),
            ))
            .id();
        debug!(
            "{:?} spawned {:?} at ({}, {}) facing {:?}",
            entity, spell, x, y, direction
        );
    }
}

pub fn expire_spells(query: Query<(Entity, &SpellEffect)>, mut commands: Commands) {
    for (entity, spell) in query.iter() {
        if spell.hit || spell.is_expired() {
            commands.entity(entity).try_despawn();
        }
    }
}
