//! Collision detection and combat dispatch.
//!
//! - [`collision_detector`] tests every distinct pair of entities that have a
//!   [`MapPosition`] and a [`BoxCollider`] and triggers a [`CollisionEvent`]
//!   for each overlapping pair.
//! - [`combat_observer`] routes those events into stat changes:
//!   - player and enemy: the enemy and its damage are queued as the player's
//!     pending attack; [`player_update`] applies it on the next tick, even if
//!     the enemy died in the meantime.
//!   - spell and enemy: the spell marks itself hit and the damage is applied
//!     immediately. The `hit` flag makes it land at most once. A spell on its
//!     last tick of flight can still hit; it expires later in the same tick.
//!   - anything else is ignored.
//!
//! [`player_update`]: crate::systems::player::player_update
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::controller::{Controller, PendingAttack};
use crate::components::mapposition::MapPosition;
use crate::components::spell::SpellEffect;
use crate::events::collision::CollisionEvent;

pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider)>,
    mut commands: Commands,
) {
    let mut pairs: SmallVec<[(Entity, Entity); 8]> = SmallVec::new();

    for [(entity_a, position_a, collider_a), (entity_b, position_b, collider_b)] in
        query.iter_combinations::<2>()
    {
        if collider_a.overlaps(*position_a, collider_b, *position_b) {
            pairs.push((entity_a, entity_b));
        }
    }

    for (a, b) in pairs {
        commands.trigger(CollisionEvent { a, b });
    }
}

pub fn combat_observer(
    trigger: On<CollisionEvent>,
    mut controllers: Query<&mut Controller>,
    mut spells: Query<&mut SpellEffect>,
) {
    let CollisionEvent { a, b } = *trigger.event();

    // Order the pair so each rule is handled once regardless of which side
    // the detector reported first.
    for (this, other) in [(a, b), (b, a)] {
        if let Ok(mut spell) = spells.get_mut(this) {
            hit_enemy_with_spell(this, &mut spell, other, &mut controllers);
            return;
        }
        let is_player = controllers
            .get(this)
            .map(|c| c.as_player().is_some())
            .unwrap_or(false);
        if is_player {
            queue_attacker(this, other, &mut controllers);
            return;
        }
    }
}

fn hit_enemy_with_spell(
    spell_entity: Entity,
    spell: &mut SpellEffect,
    target: Entity,
    controllers: &mut Query<&mut Controller>,
) {
    if spell.hit {
        return;
    }
    let Ok(mut controller) = controllers.get_mut(target) else {
        return;
    };
    let Some(enemy) = controller.as_enemy_mut() else {
        return;
    };
    if let Some(damage) = spell.register_hit() {
        enemy.take_damage(damage);
        debug!(
            "{:?} hits {:?} for {}, health {}",
            spell_entity, target, damage, enemy.health
        );
    }
}

fn queue_attacker(player: Entity, other: Entity, controllers: &mut Query<&mut Controller>) {
    let Some(damage) = controllers
        .get(other)
        .ok()
        .and_then(|c| c.as_enemy())
        .map(|enemy| enemy.damage)
    else {
        return;
    };
    if let Ok(mut controller) = controllers.get_mut(player) {
        if let Some(stats) = controller.as_player_mut() {
            stats.pending_attacker = Some(PendingAttack {
                attacker: other,
                damage,
            });
        }
    }
}
