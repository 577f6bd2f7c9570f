//! Player-side update.
//!
//! Runs once per tick, before collision detection:
//!
//! 1. Space requests a cast ([`PlayerStats::cast_spell`]); the projectile is
//!    spawned later in the tick by [`spawn_cast_spells`].
//! 2. An attack queued in `pending_attacker` by the previous tick's collision
//!    deals its captured damage exactly once, then the slot is cleared. The
//!    attacker may already be gone by then.
//!
//! [`PlayerStats::cast_spell`]: crate::components::controller::PlayerStats::cast_spell
//! [`spawn_cast_spells`]: crate::systems::spell::spawn_cast_spells
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::controller::Controller;
use crate::events::input::Key;
use crate::resources::input::TickInput;

pub fn player_update(mut controllers: Query<(Entity, &mut Controller)>, input: Res<TickInput>) {
    for (entity, mut controller) in controllers.iter_mut() {
        let Some(player) = controller.as_player_mut() else {
            continue;
        };
        if input.key() == Some(Key::Space) {
            if player.cast_spell() {
                debug!("{:?} casts, mana left {}", entity, player.mana);
            } else {
                debug!("{:?} cast refused, mana {}", entity, player.mana);
            }
        }
        if let Some(attack) = player.pending_attacker.take() {
            player.take_damage(attack.damage);
            debug!(
                "{:?} hit by {:?} for {}, health {}",
                entity, attack.attacker, attack.damage, player.health
            );
        }
    }
}
