//! termmage main entry point.
//!
//! Drives the game core headlessly from a key script:
//! - **bevy_ecs** holds the level and runs the tick schedule
//! - **configparser** reads `config.ini`
//! - **clap** parses the command line
//!
//! The interactive terminal front end is a separate collaborator that
//! implements [`termmage::render::Screen`]; this binary plugs in a screen
//! that only counts and traces draw calls.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --seed 7 --keys ">>>>>>>>  ..." --json
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::info;

use termmage::events::input::InputEvent;
use termmage::game::Game;
use termmage::render::headless::HeadlessScreen;
use termmage::render::Screen;
use termmage::resources::gameconfig::GameConfig;

/// termmage: a mage, a forest, and something angry in it.
#[derive(Parser)]
#[command(version, about = "Runs the termmage core from a scripted key sequence.")]
struct Cli {
    /// INI configuration file (default: ./config.ini, ignored if missing).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the enemy AI; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// One tick per character: w/a/s/d or ^/</v/> move, space casts,
    /// anything else is a non-key tick.
    #[arg(long, default_value = "")]
    keys: String,

    /// Total ticks to run; the key script is padded with non-key ticks.
    #[arg(long)]
    ticks: Option<usize>,

    /// Print the final world snapshot as JSON.
    #[arg(long)]
    json: bool,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = GameConfig::with_path(path);
            if let Err(e) = config.load_from_file() {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            config
        }
        None => {
            let mut config = GameConfig::new();
            if let Err(e) = config.load_from_file() {
                info!("{e}; using default settings");
            }
            config
        }
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    // Early-exit: dump the effective configuration and quit
    if let Some(path) = cli.write_config {
        config.config_path = path;
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    let mut screen = HeadlessScreen::new(config.screen_width, config.screen_height);
    let mut game = Game::new(config);

    let mut events: Vec<InputEvent> = cli.keys.chars().map(InputEvent::from_script_char).collect();
    if let Some(ticks) = cli.ticks {
        events.resize(ticks, InputEvent::Other);
    }

    game.render(&mut screen);
    for event in events {
        let (w, h) = screen.size();
        game.set_screen_size(w, h);
        game.tick(event);
        game.render(&mut screen);

        if !game.player_alive() {
            info!("The mage has fallen on tick {}", game.tick_count());
            break;
        }
    }

    let snapshot = game.snapshot();
    if cli.json {
        match snapshot.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    match &snapshot.player {
        Some(player) => println!(
            "tick {}: player at ({}, {}) health {}/{} mana {}/{}",
            snapshot.tick,
            player.position.x,
            player.position.y,
            player.health,
            player.max_health,
            player.mana,
            player.max_mana
        ),
        None => println!("tick {}: player removed", snapshot.tick),
    }
    println!(
        "{} enemies alive, {} spells in flight, {} images drawn",
        game.enemies_alive(),
        snapshot.spells.len(),
        screen.stats.images
    );
}
