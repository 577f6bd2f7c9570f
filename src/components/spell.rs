//! Spell projectiles.
//!
//! A successful cast spawns a [`SpellEffect`] next to the caster. The
//! projectile flies `speed` cells per tick in the caster's facing and is
//! removed once it has hit something or after `duration_ticks` ticks.
//!
//! # Related
//!
//! - [`crate::systems::spell`] – spawning, flight and expiry
//! - [`crate::systems::collision::combat_observer`] – hit resolution

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::direction::Direction;
use crate::components::mapposition::MapPosition;

/// Long side of a projectile's box.
pub const SPELL_LENGTH: i32 = 7;
/// Short side of a projectile's box.
pub const SPELL_THICKNESS: i32 = 2;

/// Tunables of the player's spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSpec {
    /// Mana required (and deducted) per cast.
    pub cost: i32,
    pub damage: i32,
    /// Cells per tick.
    pub speed: i32,
    pub duration_ticks: u32,
}

impl Default for SpellSpec {
    fn default() -> Self {
        Self {
            cost: 5,
            damage: 5,
            speed: 7,
            duration_ticks: 20,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellEffect {
    pub direction: Direction,
    pub speed: i32,
    pub damage: i32,
    pub duration_ticks: u32,
    pub ticks_elapsed: u32,
    /// Set on the first enemy hit; a spell deals damage at most once.
    pub hit: bool,
}

impl SpellEffect {
    pub fn new(direction: Direction, spec: &SpellSpec) -> Self {
        Self {
            direction,
            speed: spec.speed,
            damage: spec.damage,
            duration_ticks: spec.duration_ticks,
            ticks_elapsed: 0,
            hit: false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.ticks_elapsed >= self.duration_ticks
    }

    /// Register a hit. Returns the damage to apply, or `None` if this spell
    /// already hit something.
    pub fn register_hit(&mut self) -> Option<i32> {
        if self.hit {
            return None;
        }
        self.hit = true;
        Some(self.damage)
    }
}

/// Position and size `(x, y, w, h)` of a projectile spawned by a caster at
/// `caster` with box `caster_w` x `caster_h`, facing `direction`.
///
/// Vertical facings give a tall, narrow box centred above or below the
/// caster; horizontal facings give a wide, short box at half height.
pub fn spawn_box(
    caster: MapPosition,
    caster_w: i32,
    caster_h: i32,
    direction: Direction,
) -> (i32, i32, i32, i32) {
    let (w, h) = if direction.is_vertical() {
        (SPELL_THICKNESS, SPELL_LENGTH)
    } else {
        (SPELL_LENGTH, SPELL_THICKNESS)
    };
    let (x, y) = match direction {
        Direction::Up => (caster.x + caster_w / 2 - 1, caster.y - h - 1),
        Direction::Right => (caster.x + caster_w + 1, caster.y + caster_h / 2),
        Direction::Down => (caster.x + caster_w / 2 - 1, caster.y + caster_h + 1),
        Direction::Left => (caster.x - w, caster.y + caster_h / 2),
    };
    (x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_hit_only_once() {
        let mut spell = SpellEffect::new(Direction::Right, &SpellSpec::default());
        assert_eq!(spell.register_hit(), Some(5));
        assert_eq!(spell.register_hit(), None);
        assert!(spell.hit);
    }

    #[test]
    fn expires_after_duration() {
        let mut spell = SpellEffect::new(Direction::Up, &SpellSpec::default());
        spell.ticks_elapsed = 19;
        assert!(!spell.is_expired());
        spell.ticks_elapsed = 20;
        assert!(spell.is_expired());
        // Expiry does not disarm it; removal happens after collisions.
        assert_eq!(spell.register_hit(), Some(5));
    }

    #[test]
    fn spawn_box_per_facing() {
        let caster = MapPosition::new(20, 30);
        assert_eq!(spawn_box(caster, 14, 28, Direction::Up), (26, 22, 2, 7));
        assert_eq!(spawn_box(caster, 14, 28, Direction::Right), (35, 44, 7, 2));
        assert_eq!(spawn_box(caster, 14, 28, Direction::Down), (26, 59, 2, 7));
        assert_eq!(spawn_box(caster, 14, 28, Direction::Left), (13, 44, 7, 2));
    }
}
