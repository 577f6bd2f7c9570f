//! End-to-end runs through [`Game`]: setup from config, scripted ticks,
//! rendering and snapshots.

use termmage::components::controller::Controller;
use termmage::components::direction::Direction;
use termmage::components::lifecycle::Lifecycle;
use termmage::components::mapposition::MapPosition;
use termmage::components::spawnorder::SpawnOrder;
use termmage::events::input::InputEvent;
use termmage::game::Game;
use termmage::render::headless::{DrawStats, HeadlessScreen};
use termmage::resources::camera::CameraOffset;
use termmage::resources::gameconfig::GameConfig;
use termmage::snapshot::WorldSnapshot;

fn config(seed: u64) -> GameConfig {
    let mut config = GameConfig::new();
    config.seed = Some(seed);
    config
}

fn script(keys: &str) -> Vec<InputEvent> {
    keys.chars().map(InputEvent::from_script_char).collect()
}

#[test]
fn default_level_layout() {
    let mut game = Game::new(config(1));
    let snapshot = game.snapshot();

    assert_eq!(snapshot.tick, 0);
    let player = snapshot.player.expect("player spawned");
    assert_eq!(player.position, MapPosition::new(0, 0));
    assert_eq!(player.facing, Direction::Down);
    assert_eq!((player.health, player.mana, player.level), (100, 100, 1));

    assert_eq!(snapshot.enemies.len(), 1);
    let enemy = &snapshot.enemies[0];
    assert_eq!(enemy.position, MapPosition::new(70, 15));
    assert_eq!((enemy.stats.damage, enemy.stats.health), (5, 10));
    assert!(snapshot.spells.is_empty());

    // Camera is placed before the first tick.
    assert_eq!(
        *game.world.resource::<CameraOffset>(),
        CameraOffset { dx: 53, dy: 8 }
    );
}

#[test]
fn extra_enemies_are_spread_out() {
    let mut cfg = config(1);
    cfg.enemy_count = 3;
    let mut game = Game::new(cfg);
    let xs: Vec<i32> = game
        .snapshot()
        .enemies
        .iter()
        .map(|e| e.position.x)
        .collect();
    assert_eq!(xs, vec![70, 100, 130]);
    assert_eq!(game.enemies_alive(), 3);
}

#[test]
fn player_is_drawn_before_enemies() {
    let mut cfg = config(1);
    cfg.enemy_count = 2;
    let mut game = Game::new(cfg);
    let mut q = game.world.query::<(&SpawnOrder, &Controller)>();
    let mut characters: Vec<(SpawnOrder, bool)> = q
        .iter(&game.world)
        .map(|(order, c)| (*order, c.as_player().is_some()))
        .collect();
    characters.sort_by_key(|(order, _)| *order);
    let is_player: Vec<bool> = characters.into_iter().map(|(_, p)| p).collect();
    assert_eq!(is_player, vec![true, false, false]);
}

#[test]
fn render_draws_backdrop_characters_and_hud() {
    let mut game = Game::new(config(1));
    let mut screen = HeadlessScreen::new(120, 40);
    game.render(&mut screen);

    // backdrop, enemy, player, portrait
    assert_eq!(
        screen.stats,
        DrawStats {
            images: 4,
            texts: 4,
            rects: 1
        }
    );
    assert_eq!(screen.offset(), (53, 8));
}

#[test]
fn same_seed_same_run() {
    let keys = script("d d d s s a w  >>>>....^^");
    let mut a = Game::new(config(42));
    let mut b = Game::new(config(42));
    for event in &keys {
        a.tick(*event);
        b.tick(*event);
    }
    let snap_a: WorldSnapshot = a.snapshot();
    assert_eq!(snap_a, b.snapshot());
    assert_eq!(snap_a.tick, keys.len() as u64);
}

#[test]
fn fireballs_kill_the_flower() {
    // Face right without walking into the enemy's reach, then keep casting.
    let mut cfg = config(3);
    cfg.enemy_x = 60;
    cfg.enemy_y = 0;
    let mut game = Game::new(cfg);

    game.tick(InputEvent::from_script_char('d'));
    let mut killed_on = None;
    for _ in 0..40 {
        game.tick(InputEvent::from_script_char(' '));
        let snapshot = game.snapshot();
        match snapshot.enemies.first() {
            Some(enemy) if enemy.lifecycle == Lifecycle::PendingRemoval => {
                killed_on.get_or_insert(snapshot.tick);
            }
            Some(_) => {}
            None => break,
        }
    }
    let killed_on = killed_on.expect("enemy should die");
    assert!(game.snapshot().enemies.is_empty());
    assert_eq!(game.tick_count(), killed_on + 1);
    assert_eq!(game.enemies_alive(), 0);
    assert!(game.player_alive());
}

#[test]
fn snapshot_serializes_to_json() {
    let mut game = Game::new(config(5));
    for event in script(" ") {
        game.tick(event);
    }
    let json = game.snapshot().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tick"], 1);
    assert_eq!(value["player"]["mana"], 95);
    assert_eq!(value["spells"].as_array().unwrap().len(), 1);
    assert_eq!(value["enemies"][0]["lifecycle"], "Alive");
}

#[test]
fn stats_panel_stays_after_the_player_is_removed() {
    let mut cfg = config(2);
    cfg.enemy_x = 5;
    cfg.enemy_y = 5;
    cfg.enemy_damage = 100;
    let mut game = Game::new(cfg);

    // Contact on tick 1, lethal damage on tick 2, removal on tick 3.
    let mut screen = HeadlessScreen::new(120, 40);
    for event in script("...") {
        game.tick(event);
        game.render(&mut screen);
    }
    assert!(game.snapshot().player.is_none());

    let mut screen = HeadlessScreen::new(120, 40);
    game.render(&mut screen);
    // backdrop, enemy, portrait
    assert_eq!(
        screen.stats,
        DrawStats {
            images: 3,
            texts: 4,
            rects: 1
        }
    );
}
