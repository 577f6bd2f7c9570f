//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! seed = 42
//! screen_width = 120
//! screen_height = 40
//!
//! [player]
//! character = m_mage
//! x = 0
//! y = 0
//! health = 100
//! mana = 100
//!
//! [enemy]
//! kind = flower
//! x = 70
//! y = 15
//! damage = 5
//! health = 10
//! count = 1
//!
//! [spell]
//! name = fireball
//! cost = 5
//! damage = 5
//! speed = 7
//! duration = 20
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::spell::SpellSpec;

/// Default safe values for startup
const DEFAULT_SCREEN_WIDTH: i32 = 120;
const DEFAULT_SCREEN_HEIGHT: i32 = 40;
const DEFAULT_CHARACTER: &str = "m_mage";
const DEFAULT_PLAYER_X: i32 = 0;
const DEFAULT_PLAYER_Y: i32 = 0;
const DEFAULT_PLAYER_HEALTH: i32 = 100;
const DEFAULT_PLAYER_MANA: i32 = 100;
const DEFAULT_ENEMY_KIND: &str = "flower";
const DEFAULT_ENEMY_X: i32 = 70;
const DEFAULT_ENEMY_Y: i32 = 15;
const DEFAULT_ENEMY_DAMAGE: i32 = 5;
const DEFAULT_ENEMY_HEALTH: i32 = 10;
const DEFAULT_ENEMY_COUNT: u32 = 1;
const DEFAULT_SPELL_NAME: &str = "fireball";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores world, character and spell settings. Every value is optional in
/// the file; missing keys keep their defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Seed for the enemy AI. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Fallback screen width in cells when no screen reports one.
    pub screen_width: i32,
    /// Fallback screen height in cells.
    pub screen_height: i32,
    /// Player sprite folder under `artwork/sprites/player/`.
    pub character: String,
    pub player_x: i32,
    pub player_y: i32,
    pub player_health: i32,
    pub player_mana: i32,
    /// Enemy sprite folder under `artwork/sprites/enemy/`.
    pub enemy_kind: String,
    pub enemy_x: i32,
    pub enemy_y: i32,
    pub enemy_damage: i32,
    pub enemy_health: i32,
    /// Number of enemies; extra ones are spread out to the right.
    pub enemy_count: u32,
    /// Spell sprite folder under `artwork/spells/`.
    pub spell_name: String,
    pub spell: SpellSpec,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            seed: None,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            character: DEFAULT_CHARACTER.to_string(),
            player_x: DEFAULT_PLAYER_X,
            player_y: DEFAULT_PLAYER_Y,
            player_health: DEFAULT_PLAYER_HEALTH,
            player_mana: DEFAULT_PLAYER_MANA,
            enemy_kind: DEFAULT_ENEMY_KIND.to_string(),
            enemy_x: DEFAULT_ENEMY_X,
            enemy_y: DEFAULT_ENEMY_Y,
            enemy_damage: DEFAULT_ENEMY_DAMAGE,
            enemy_health: DEFAULT_ENEMY_HEALTH,
            enemy_count: DEFAULT_ENEMY_COUNT,
            spell_name: DEFAULT_SPELL_NAME.to_string(),
            spell: SpellSpec::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let int = |section: &str, key: &str| config.getint(section, key).ok().flatten();
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();

        // [world] section
        if let Some(seed) = uint("world", "seed") {
            self.seed = Some(seed);
        }
        if let Some(w) = int("world", "screen_width") {
            self.screen_width = w as i32;
        }
        if let Some(h) = int("world", "screen_height") {
            self.screen_height = h as i32;
        }

        // [player] section
        if let Some(character) = config.get("player", "character") {
            self.character = character;
        }
        if let Some(x) = int("player", "x") {
            self.player_x = x as i32;
        }
        if let Some(y) = int("player", "y") {
            self.player_y = y as i32;
        }
        if let Some(health) = int("player", "health") {
            self.player_health = health as i32;
        }
        if let Some(mana) = int("player", "mana") {
            self.player_mana = mana as i32;
        }

        // [enemy] section
        if let Some(kind) = config.get("enemy", "kind") {
            self.enemy_kind = kind;
        }
        if let Some(x) = int("enemy", "x") {
            self.enemy_x = x as i32;
        }
        if let Some(y) = int("enemy", "y") {
            self.enemy_y = y as i32;
        }
        if let Some(damage) = int("enemy", "damage") {
            self.enemy_damage = damage as i32;
        }
        if let Some(health) = int("enemy", "health") {
            self.enemy_health = health as i32;
        }
        if let Some(count) = uint("enemy", "count") {
            self.enemy_count = count as u32;
        }

        // [spell] section
        if let Some(name) = config.get("spell", "name") {
            self.spell_name = name;
        }
        if let Some(cost) = int("spell", "cost") {
            self.spell.cost = cost as i32;
        }
        if let Some(damage) = int("spell", "damage") {
            self.spell.damage = damage as i32;
        }
        if let Some(speed) = int("spell", "speed") {
            self.spell.speed = speed as i32;
        }
        if let Some(duration) = uint("spell", "duration") {
            self.spell.duration_ticks = duration as u32;
        }

        info!(
            "Loaded config: character={}, enemy={}x{}, spell={} (cost={}, damage={}, speed={}, duration={}), seed={:?}",
            self.character,
            self.enemy_count,
            self.enemy_kind,
            self.spell_name,
            self.spell.cost,
            self.spell.damage,
            self.spell.speed,
            self.spell.duration_ticks,
            self.seed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [world] section
        if let Some(seed) = self.seed {
            config.set("world", "seed", Some(seed.to_string()));
        }
        config.set("world", "screen_width", Some(self.screen_width.to_string()));
        config.set("world", "screen_height", Some(self.screen_height.to_string()));

        // [player] section
        config.set("player", "character", Some(self.character.clone()));
        config.set("player", "x", Some(self.player_x.to_string()));
        config.set("player", "y", Some(self.player_y.to_string()));
        config.set("player", "health", Some(self.player_health.to_string()));
        config.set("player", "mana", Some(self.player_mana.to_string()));

        // [enemy] section
        config.set("enemy", "kind", Some(self.enemy_kind.clone()));
        config.set("enemy", "x", Some(self.enemy_x.to_string()));
        config.set("enemy", "y", Some(self.enemy_y.to_string()));
        config.set("enemy", "damage", Some(self.enemy_damage.to_string()));
        config.set("enemy", "health", Some(self.enemy_health.to_string()));
        config.set("enemy", "count", Some(self.enemy_count.to_string()));

        // [spell] section
        config.set("spell", "name", Some(self.spell_name.clone()));
        config.set("spell", "cost", Some(self.spell.cost.to_string()));
        config.set("spell", "damage", Some(self.spell.damage.to_string()));
        config.set("spell", "speed", Some(self.spell.speed.to_string()));
        config.set("spell", "duration", Some(self.spell.duration_ticks.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Player sprite folder for the configured character.
    pub fn player_sprite_dir(&self) -> String {
        format!("artwork/sprites/player/{}", self.character)
    }

    pub fn portrait_path(&self) -> String {
        format!("artwork/sprites/player/{}/portrait.png", self.character)
    }

    pub fn enemy_sprite_dir(&self) -> String {
        format!("artwork/sprites/enemy/{}", self.enemy_kind)
    }

    pub fn spell_sprite_dir(&self) -> String {
        format!("artwork/spells/{}", self.spell_name)
    }
}
