//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 480
//! target_fps = 240
//!
//! [grid]
//! cell_size = 20
//! tile_size = 16
//!
//! [snake]
//! speed = 12.0
//! speed_increment = 1.5
//! apples_per_speedup = 5
//! initial_segments = 3
//! spawn_padding = 4
//! reset_on_self_collision = true
//!
//! [apples]
//! max = 1
//! spawn_interval = 8.0
//! spawn_padding = 4
//!
//! [rng]
//! seed = 1234
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::{GameError, GameResult};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 240;
const DEFAULT_CELL_SIZE: i32 = 20;
const DEFAULT_TILE_SIZE: i32 = 16;
const DEFAULT_SNAKE_SPEED: f32 = 12.0;
const DEFAULT_SNAKE_SPEED_INCREMENT: f32 = 1.5;
const DEFAULT_APPLES_PER_SPEEDUP: u32 = 5;
const DEFAULT_INITIAL_SEGMENTS: usize = 3;
const DEFAULT_SPAWN_PADDING: i32 = 4;
const DEFAULT_MAX_APPLES: usize = 1;
const DEFAULT_APPLE_SPAWN_INTERVAL: f32 = 8.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, grid geometry, snake tuning and apple spawning.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Pixel pitch of one grid cell.
    pub cell_size: i32,
    /// Side of the square drawn inside each cell.
    pub tile_size: i32,
    /// Snake ticks per second when spawned.
    pub snake_speed: f32,
    /// Added to the snake speed every `apples_per_speedup` apples.
    pub snake_speed_increment: f32,
    pub apples_per_speedup: u32,
    /// Body segments laid out behind the head on spawn.
    pub initial_segments: usize,
    /// Distance from the edges kept free when the head spawns.
    pub snake_spawn_padding: i32,
    /// `false` keeps playing through self-collisions (debug mode).
    pub reset_on_self_collision: bool,
    /// Apples alive at once.
    pub max_apples: usize,
    /// Seconds between timed apple spawns while below `max_apples`.
    pub apple_spawn_interval: f32,
    pub apple_spawn_padding: i32,
    /// Fixed seed for the grid's random cell picks.
    pub seed: Option<u64>,
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
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            cell_size: DEFAULT_CELL_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
            snake_speed: DEFAULT_SNAKE_SPEED,
            snake_speed_increment: DEFAULT_SNAKE_SPEED_INCREMENT,
            apples_per_speedup: DEFAULT_APPLES_PER_SPEEDUP,
            initial_segments: DEFAULT_INITIAL_SEGMENTS,
            snake_spawn_padding: DEFAULT_SPAWN_PADDING,
            reset_on_self_collision: true,
            max_apples: DEFAULT_MAX_APPLES,
            apple_spawn_interval: DEFAULT_APPLE_SPAWN_INTERVAL,
            apple_spawn_padding: DEFAULT_SPAWN_PADDING,
            seed: None,
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
    pub fn load_from_file(&mut self) -> GameResult<()> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| GameError::Config(format!("Failed to load config file: {}", e)))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [grid] section
        if let Some(size) = config.getint("grid", "cell_size").ok().flatten() {
            self.cell_size = size as i32;
        }
        if let Some(size) = config.getint("grid", "tile_size").ok().flatten() {
            self.tile_size = size as i32;
        }

        // [snake] section
        if let Some(speed) = config.getfloat("snake", "speed").ok().flatten() {
            self.snake_speed = speed as f32;
        }
        if let Some(inc) = config.getfloat("snake", "speed_increment").ok().flatten() {
            self.snake_speed_increment = inc as f32;
        }
        if let Some(n) = config.getuint("snake", "apples_per_speedup").ok().flatten() {
            self.apples_per_speedup = n as u32;
        }
        if let Some(n) = config.getuint("snake", "initial_segments").ok().flatten() {
            self.initial_segments = n as usize;
        }
        if let Some(p) = config.getint("snake", "spawn_padding").ok().flatten() {
            self.snake_spawn_padding = p as i32;
        }
        if let Some(reset) = config
            .getbool("snake", "reset_on_self_collision")
            .ok()
            .flatten()
        {
            self.reset_on_self_collision = reset;
        }

        // [apples] section
        if let Some(max) = config.getuint("apples", "max").ok().flatten() {
            self.max_apples = max as usize;
        }
        if let Some(secs) = config.getfloat("apples", "spawn_interval").ok().flatten() {
            self.apple_spawn_interval = secs as f32;
        }
        if let Some(p) = config.getint("apples", "spawn_padding").ok().flatten() {
            self.apple_spawn_padding = p as i32;
        }

        // [rng] section
        if let Some(seed) = config.getuint("rng", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, cell={}px, snake speed={}, apples max={} every {}s",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.cell_size,
            self.snake_speed,
            self.max_apples,
            self.apple_spawn_interval
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> GameResult<()> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [grid] section
        config.set("grid", "cell_size", Some(self.cell_size.to_string()));
        config.set("grid", "tile_size", Some(self.tile_size.to_string()));

        // [snake] section
        config.set("snake", "speed", Some(self.snake_speed.to_string()));
        config.set(
            "snake",
            "speed_increment",
            Some(self.snake_speed_increment.to_string()),
        );
        config.set(
            "snake",
            "apples_per_speedup",
            Some(self.apples_per_speedup.to_string()),
        );
        config.set(
            "snake",
            "initial_segments",
            Some(self.initial_segments.to_string()),
        );
        config.set(
            "snake",
            "spawn_padding",
            Some(self.snake_spawn_padding.to_string()),
        );
        config.set(
            "snake",
            "reset_on_self_collision",
            Some(self.reset_on_self_collision.to_string()),
        );

        // [apples] section
        config.set("apples", "max", Some(self.max_apples.to_string()));
        config.set(
            "apples",
            "spawn_interval",
            Some(self.apple_spawn_interval.to_string()),
        );
        config.set(
            "apples",
            "spawn_padding",
            Some(self.apple_spawn_padding.to_string()),
        );

        // [rng] section
        if let Some(seed) = self.seed {
            config.set("rng", "seed", Some(seed.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| GameError::Config(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
