//! Mondo Snake main entry point.
//!
//! Loads `config.ini` (or the file given with `--config`), applies command
//! line overrides, opens a raylib window and runs the game until it closes.
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use mondosnake::Game;
use mondosnake::platform::raylib::RaylibPlatform;
use mondosnake::resources::gameconfig::GameConfig;

#[derive(Parser, Debug)]
#[command(name = "mondosnake", version, about = "Grid snake on a wrap-around board")]
struct Cli {
    /// INI configuration file.
    #[arg(long, default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for apple and snake placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Keep playing when the snake runs into itself.
    #[arg(long)]
    no_reset: bool,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_reset {
        config.reset_on_self_collision = false;
    }

    if let Some(path) = cli.write_config {
        config.config_path = path;
        return match config.save_to_file() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut platform = RaylibPlatform::new(&config);
    let mut game = Game::new(config);
    match game.run(&mut platform) {
        Ok(()) => {
            info!("Bye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Game stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
