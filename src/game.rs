//! World setup and the per-tick schedule.
//!
//! [`Game`] owns the ECS world and the tick schedule. A driver feeds it one
//! [`InputEvent`] per tick and renders after each tick:
//!
//! ```no_run
//! use termmage::game::Game;
//! use termmage::events::input::{InputEvent, Key};
//! use termmage::resources::gameconfig::GameConfig;
//!
//! let mut game = Game::new(GameConfig::new());
//! game.tick(InputEvent::Key(Key::Right));
//! game.tick(InputEvent::Key(Key::Space));
//! ```

use std::sync::Arc;

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use bevy_ecs::system::RunSystemOnce;
use log::{error, info};

use crate::components::animation::AnimatedSprite;
use crate::components::boxcollider::BoxCollider;
use crate::components::controller::{Controller, EnemyStats, PlayerStats};
use crate::components::direction::Direction;
use crate::components::lifecycle::Lifecycle;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::steering::Steering;
use crate::events::input::InputEvent;
use crate::render::{Screen, render_world};
use crate::resources::camera::CameraOffset;
use crate::resources::framestore::{FrameSet, FrameStore};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::TickInput;
use crate::resources::rng::WorldRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::spawncounter::SpawnCounter;
use crate::resources::worldtime::WorldTick;
use crate::snapshot::WorldSnapshot;
use crate::systems::camera::camera_follow;
use crate::systems::collision::{collision_detector, combat_observer};
use crate::systems::controller::{player_input_controller, wander_controller};
use crate::systems::lifecycle::{mark_dead, reap_removed};
use crate::systems::movement::movement;
use crate::systems::player::player_update;
use crate::systems::spell::{expire_spells, spawn_cast_spells, spell_flight};
use crate::systems::time::advance_tick;

/// Character box in cells.
pub const CHARACTER_W: i32 = 14;
pub const CHARACTER_H: i32 = 28;
/// Walk frames per facing.
pub const FRAMES_PER_DIRECTION: usize = 3;
/// Frame shown before the first step (middle of the Down block).
pub const INITIAL_FRAME: usize = 7;
/// Horizontal spacing between extra enemies.
const ENEMY_SPACING: i32 = 30;
const BACKGROUND_AT: (i32, i32) = (-50, -50);

/// Components of the player's avatar.
pub fn player_bundle(position: MapPosition, frames: FrameSet, stats: PlayerStats) -> impl Bundle {
    (
        position,
        BoxCollider::new(CHARACTER_W, CHARACTER_H),
        AnimatedSprite::new(frames, FRAMES_PER_DIRECTION, Direction::Down)
            .with_frame_index(INITIAL_FRAME),
        Steering::default(),
        Controller::PlayerControlled(stats),
        Lifecycle::Alive,
    )
}

/// Components of an enemy avatar.
pub fn enemy_bundle(position: MapPosition, frames: FrameSet, stats: EnemyStats) -> impl Bundle {
    (
        position,
        BoxCollider::new(CHARACTER_W, CHARACTER_H),
        AnimatedSprite::new(frames, FRAMES_PER_DIRECTION, Direction::Down)
            .with_frame_index(INITIAL_FRAME),
        Steering::default(),
        Controller::EnemyControlled(stats),
        Lifecycle::Alive,
    )
}

/// Populate the level from [`GameConfig`]: backdrop, the player, then enemies.
pub fn setup(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut frames: ResMut<FrameStore>,
    mut counter: ResMut<SpawnCounter>,
) {
    commands.spawn((
        MapPosition::new(BACKGROUND_AT.0, BACKGROUND_AT.1),
        Sprite::new("artwork/background/forest.png"),
        counter.next_order(),
    ));

    let player_frames = frames.insert_numbered(
        "player",
        &config.player_sprite_dir(),
        4 * FRAMES_PER_DIRECTION,
    );
    let enemy_frames =
        frames.insert_numbered("enemy", &config.enemy_sprite_dir(), 4 * FRAMES_PER_DIRECTION);
    let spell_frames = frames.insert_numbered("spell", &config.spell_sprite_dir(), 4);

    let spell_frames: [Arc<str>; 4] = std::array::from_fn(|i| spell_frames[i].clone());
    let stats = PlayerStats::new(
        config.player_health,
        config.player_mana,
        config.spell,
        spell_frames,
        config.portrait_path(),
    );
    commands.spawn((
        player_bundle(
            MapPosition::new(config.player_x, config.player_y),
            player_frames,
            stats,
        ),
        counter.next_order(),
    ));

    for i in 0..config.enemy_count as i32 {
        let position = MapPosition::new(config.enemy_x + i * ENEMY_SPACING, config.enemy_y);
        commands.spawn((
            enemy_bundle(
                position,
                enemy_frames.clone(),
                EnemyStats::new(config.enemy_damage, config.enemy_health),
            ),
            counter.next_order(),
        ));
    }

    info!(
        "Level ready: {} as '{}' vs {} '{}'",
        config.spell_name, config.character, config.enemy_count, config.enemy_kind
    );
}

/// Systems run once per tick, strictly in this order.
pub fn tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems(
        (
            reap_removed,
            player_input_controller,
            wander_controller,
            movement,
            spell_flight,
            player_update,
            collision_detector,
            mark_dead,
            spawn_cast_spells,
            expire_spells,
            camera_follow,
        )
            .chain(),
    );
    schedule
}

/// Insert every resource the tick schedule reads and register the combat observer.
pub fn init_resources(world: &mut World, config: GameConfig) {
    let rng = match config.seed {
        Some(seed) => WorldRng::with_seed(seed),
        None => WorldRng::from_entropy(),
    };
    world.insert_resource(ScreenSize {
        w: config.screen_width,
        h: config.screen_height,
    });
    world.insert_resource(rng);
    world.insert_resource(config);
    world.insert_resource(WorldTick::default());
    world.insert_resource(TickInput::default());
    world.insert_resource(CameraOffset::default());
    world.insert_resource(FrameStore::new());
    world.insert_resource(SpawnCounter::default());
    world.add_observer(combat_observer);
    world.flush();
}

pub struct Game {
    pub world: World,
    schedule: Schedule,
}

impl Game {
    /// Build the level described by `config`.
    pub fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        init_resources(&mut world, config);
        if let Err(e) = world.run_system_once(setup) {
            error!("World setup failed: {}", e);
        }
        if let Err(e) = world.run_system_once(camera_follow) {
            error!("Initial camera placement failed: {}", e);
        }

        let mut schedule = tick_schedule();
        if let Err(e) = schedule.initialize(&mut world) {
            error!("Failed to initialize tick schedule: {}", e);
        }
        Self { world, schedule }
    }

    /// Run one tick driven by `event`.
    pub fn tick(&mut self, event: InputEvent) {
        advance_tick(&mut self.world, event);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Track a resized screen; the camera uses it from the next tick on.
    pub fn set_screen_size(&mut self, w: i32, h: i32) {
        let mut size = self.world.resource_mut::<ScreenSize>();
        size.w = w;
        size.h = h;
    }

    pub fn render(&mut self, screen: &mut dyn Screen) {
        render_world(&mut self.world, screen);
    }

    pub fn snapshot(&mut self) -> WorldSnapshot {
        WorldSnapshot::capture(&mut self.world)
    }

    pub fn tick_count(&self) -> u64 {
        self.world.resource::<WorldTick>().tick
    }

    /// `true` while a player avatar is alive.
    pub fn player_alive(&mut self) -> bool {
        let mut q = self.world.query::<(&Controller, &Lifecycle)>();
        q.iter(&self.world)
            .any(|(c, l)| c.as_player().is_some() && l.is_alive())
    }

    /// Number of enemies still alive.
    pub fn enemies_alive(&mut self) -> usize {
        let mut q = self.world.query::<(&Controller, &Lifecycle)>();
        q.iter(&self.world)
            .filter(|(c, l)| c.as_enemy().is_some() && l.is_alive())
            .count()
    }
}
