//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [movement]
//! accel_rate = 0.75
//! max_speed = 0.1
//! damping = 0.9
//!
//! [assets]
//! player_model = ./assets/fox_dragon.glb
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_ACCEL_RATE: f32 = 0.75;
const DEFAULT_MAX_SPEED: f32 = 0.1;
const DEFAULT_DAMPING: f32 = 0.9;
const DEFAULT_PLAYER_MODEL: &str = "./assets/fox_dragon.glb";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, movement tuning, and asset paths. Values missing
/// from the file keep their defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Acceleration added per second while a movement key is held.
    pub accel_rate: f32,
    /// Component-wise velocity clamp bound.
    pub max_speed: f32,
    /// Per-frame multiplicative velocity decay.
    pub damping: f32,
    /// Path to the controlled character's model.
    pub player_model: PathBuf,
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
            accel_rate: DEFAULT_ACCEL_RATE,
            max_speed: DEFAULT_MAX_SPEED,
            damping: DEFAULT_DAMPING,
            player_model: PathBuf::from(DEFAULT_PLAYER_MODEL),
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

        // [movement] section
        if let Some(rate) = config.getfloat("movement", "accel_rate").ok().flatten() {
            self.accel_rate = rate as f32;
        }
        if let Some(speed) = config.getfloat("movement", "max_speed").ok().flatten() {
            self.max_speed = speed as f32;
        }
        if let Some(damping) = config.getfloat("movement", "damping").ok().flatten() {
            self.damping = damping as f32;
        }

        // [assets] section
        if let Some(model) = config.get("assets", "player_model") {
            self.player_model = PathBuf::from(model);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, accel={}, max_speed={}, damping={}, model={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.accel_rate,
            self.max_speed,
            self.damping,
            self.player_model
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [movement] section
        config.set("movement", "accel_rate", Some(self.accel_rate.to_string()));
        config.set("movement", "max_speed", Some(self.max_speed.to_string()));
        config.set("movement", "damping", Some(self.damping.to_string()));

        // [assets] section
        config.set(
            "assets",
            "player_model",
            Some(self.player_model.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
