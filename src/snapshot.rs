//! Serializable summary of the live world.
//!
//! Used by the headless driver (`--json`) and handy in tests to compare two
//! runs. Entities are listed in insertion order.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::animation::AnimatedSprite;
use crate::components::controller::{Controller, EnemyStats};
use crate::components::direction::Direction;
use crate::components::lifecycle::Lifecycle;
use crate::components::mapposition::MapPosition;
use crate::components::spawnorder::SpawnOrder;
use crate::components::spell::SpellEffect;
use crate::resources::worldtime::WorldTick;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub position: MapPosition,
    pub facing: Direction,
    pub health: i32,
    pub max_health: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub gold: i32,
    pub experience: i32,
    pub level: i32,
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    pub position: MapPosition,
    pub facing: Direction,
    pub stats: EnemyStats,
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellSnapshot {
    pub position: MapPosition,
    pub direction: Direction,
    pub ticks_elapsed: u32,
    pub hit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub player: Option<PlayerSnapshot>,
    pub enemies: Vec<EnemySnapshot>,
    pub spells: Vec<SpellSnapshot>,
}

impl WorldSnapshot {
    pub fn capture(world: &mut World) -> Self {
        let tick = world.get_resource::<WorldTick>().map(|t| t.tick).unwrap_or(0);

        let mut characters: Vec<(SpawnOrder, MapPosition, Direction, Controller, Lifecycle)> = {
            let mut q = world.query::<(
                &SpawnOrder,
                &MapPosition,
                &AnimatedSprite,
                &Controller,
                Option<&Lifecycle>,
            )>();
            q.iter(world)
                .map(|(order, pos, sprite, controller, lifecycle)| {
                    (
                        *order,
                        *pos,
                        sprite.direction,
                        controller.clone(),
                        lifecycle.copied().unwrap_or_default(),
                    )
                })
                .collect()
        };
        characters.sort_by_key(|(order, ..)| *order);

        let mut player = None;
        let mut enemies = Vec::new();
        for (_, position, facing, controller, lifecycle) in characters {
            match controller {
                Controller::PlayerControlled(p) => {
                    player = Some(PlayerSnapshot {
                        position,
                        facing,
                        health: p.health,
                        max_health: p.max_health,
                        mana: p.mana,
                        max_mana: p.max_mana,
                        gold: p.gold,
                        experience: p.experience,
                        level: p.level,
                        lifecycle,
                    })
                }
                Controller::EnemyControlled(stats) => enemies.push(EnemySnapshot {
                    position,
                    facing,
                    stats,
                    lifecycle,
                }),
            }
        }

        let mut spells: Vec<(SpawnOrder, SpellSnapshot)> = {
            let mut q = world.query::<(&SpawnOrder, &MapPosition, &SpellEffect)>();
            q.iter(world)
                .map(|(order, pos, spell)| {
                    (
                        *order,
                        SpellSnapshot {
                            position: *pos,
                            direction: spell.direction,
                            ticks_elapsed: spell.ticks_elapsed,
                            hit: spell.hit,
                        },
                    )
                })
                .collect()
        };
        spells.sort_by_key(|(order, _)| *order);

        Self {
            tick,
            player,
            enemies,
            spells: spells.into_iter().map(|(_, s)| s).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize snapshot: {}", e))
    }
}
