//! Who drives a character and the combat stats that come with it.
//!
//! Every walking character is an [`AnimatedSprite`] plus exactly one
//! [`Controller`]: either the player's stats or an enemy's. Systems match on
//! the variant instead of probing optional role fields.
//!
//! [`AnimatedSprite`]: crate::components::animation::AnimatedSprite

use std::sync::Arc;

use bevy_ecs::prelude::{Component, Entity};
use serde::{Deserialize, Serialize};

use crate::components::direction::Direction;
use crate::components::spell::SpellSpec;

/// Contact queued by the collision pass and resolved on the player's next
/// update. The damage is captured at contact time, so it still lands if the
/// attacker is removed in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAttack {
    pub attacker: Entity,
    pub damage: i32,
}

/// Player-side attributes.
#[derive(Debug, Clone)]
pub struct PlayerStats {
    pub health: i32,
    pub max_health: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub gold: i32,
    pub experience: i32,
    pub experience_to_level: i32,
    pub level: i32,
    /// Set by a successful cast, consumed when the projectile is spawned.
    pub is_casting: bool,
    /// Enemy that touched the player this tick; damage lands on the next update.
    pub pending_attacker: Option<PendingAttack>,
    pub spell: SpellSpec,
    /// Projectile image per facing, indexed by [`Direction::index`].
    pub spell_frames: [Arc<str>; 4],
    pub portrait: Arc<str>,
}

impl PlayerStats {
    pub fn new(
        max_health: i32,
        max_mana: i32,
        spell: SpellSpec,
        spell_frames: [Arc<str>; 4],
        portrait: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            health: max_health,
            max_health,
            mana: max_mana,
            max_mana,
            gold: 0,
            experience: 0,
            experience_to_level: 100,
            level: 1,
            is_casting: false,
            pending_attacker: None,
            spell,
            spell_frames,
            portrait: portrait.into(),
        }
    }

    /// Request a cast. Returns `false` and changes nothing when mana is below
    /// the spell cost.
    pub fn cast_spell(&mut self) -> bool {
        if self.mana < self.spell.cost {
            return false;
        }
        self.mana -= self.spell.cost;
        self.is_casting = true;
        true
    }

    /// Take the pending cast request, if any.
    pub fn take_cast(&mut self) -> bool {
        std::mem::take(&mut self.is_casting)
    }

    /// Apply damage; health never drops below zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).clamp(0, self.max_health);
    }

    pub fn spell_frame(&self, direction: Direction) -> &Arc<str> {
        &self.spell_frames[direction.index()]
    }
}

/// Enemy-side attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStats {
    /// Damage dealt to the player per touch.
    pub damage: i32,
    pub health: i32,
    pub max_health: i32,
}

impl EnemyStats {
    pub fn new(damage: i32, max_health: i32) -> Self {
        Self {
            damage,
            health: max_health,
            max_health,
        }
    }

    /// Health may go negative; the lifecycle systems remove the enemy later.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

#[derive(Component, Debug, Clone)]
pub enum Controller {
    PlayerControlled(PlayerStats),
    EnemyControlled(EnemyStats),
}

impl Controller {
    pub fn health(&self) -> i32 {
        match self {
            Controller::PlayerControlled(p) => p.health,
            Controller::EnemyControlled(e) => e.health,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health() <= 0
    }

    pub fn as_player(&self) -> Option<&PlayerStats> {
        match self {
            Controller::PlayerControlled(p) => Some(p),
            Controller::EnemyControlled(_) => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerStats> {
        match self {
            Controller::PlayerControlled(p) => Some(p),
            Controller::EnemyControlled(_) => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&EnemyStats> {
        match self {
            Controller::EnemyControlled(e) => Some(e),
            Controller::PlayerControlled(_) => None,
        }
    }

    pub fn as_enemy_mut(&mut self) -> Option<&mut EnemyStats> {
        match self {
            Controller::EnemyControlled(e) => Some(e),
            Controller::PlayerControlled(_) => None,
        }
    }
}
