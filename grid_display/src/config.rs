// config.rs - Session configuration

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::playback::PlayMode;

pub const DEFAULT_WIDTH: u32 = 64;
pub const DEFAULT_HEIGHT: u32 = 64;
/// Cell edge in canvas pixels.
pub const DEFAULT_CELL_SIZE: u32 = 5;

/// Everything a session needs at start. Changing any of it means starting a
/// new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    /// Catalog name or inline layout text.
    pub pattern: Option<String>,
    pub default_play_mode: PlayMode,
    pub show_grid_lines: bool,
    pub show_fps: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            pattern: None,
            default_play_mode: PlayMode::Pause,
            show_grid_lines: true,
            show_fps: false,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("loading session config from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The grid this configuration describes.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        Grid::new(self.width, self.height, self.cell_size).map_err(|err| {
            warn!("rejected session config: {err}");
            ConfigError::from(err)
        })
    }
}
