//! Game tuning, loadable from a TOML file.
//!
//! Every field has a default, so a file only needs to name what it changes:
//!
//! ```toml
//! auto_play = false
//! pipe_gap = 140.0
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Logical screen size in pixels.
    pub window_width: u32,
    pub window_height: u32,
    /// Height of the playfield above the ground.
    pub viewport_height: u32,
    /// Vertical opening between an upper and a lower pipe.
    pub pipe_gap: f32,
    /// Scroll speed of pipes and ground, pixels per tick.  Must be negative.
    pub pipe_vel_x: f32,
    /// Let the auto-pilot flap for the player.
    pub auto_play: bool,
    /// Play the shrink-into-pipe animation on pipe hits instead of
    /// crashing straight away.
    pub pipe_death_animation: bool,
    pub fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: 288,
            window_height: 512,
            viewport_height: 404,
            pipe_gap: 120.0,
            pipe_vel_x: -5.0,
            auto_play: true,
            pipe_death_animation: true,
            fps: 30,
        }
    }
}

impl GameConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<GameConfig, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        GameConfig::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".into()));
        }
        if self.viewport_height == 0 || self.viewport_height > self.window_height {
            return Err(ConfigError::Invalid(format!(
                "viewport_height must be in 1..={}, got {}",
                self.window_height, self.viewport_height
            )));
        }
        if !(self.pipe_gap > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pipe_gap must be positive, got {}",
                self.pipe_gap
            )));
        }
        if !(self.pipe_vel_x < 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pipe_vel_x must be negative, got {}",
                self.pipe_vel_x
            )));
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be non-zero".into()));
        }
        Ok(())
    }

    pub fn viewport(&self) -> f32 {
        self.viewport_height as f32
    }
}
