use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::grid::Grid;

/// Errors raised while building a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid {width}x{height} exceeds {max} cells", max = GameConfig::MAX_CELLS)]
    GridTooLarge { width: usize, height: usize },
    #[error("speed {0} is outside {min}..={max}", min = Speed::MIN, max = Speed::MAX)]
    SpeedOutOfRange(u8),
    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Tick speed level; higher is faster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Speed(u8);

impl Speed {
    pub const MIN: u8 = 5;
    pub const MAX: u8 = 15;

    pub fn new(level: u8) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ConfigError::SpeedOutOfRange(level))
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// Tick interval: 260 - 12 * level milliseconds
    pub fn interval(&self) -> Duration {
        Duration::from_millis(260 - 12 * u64::from(self.0))
    }

    pub fn faster(&self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    pub fn slower(&self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<u8> for Speed {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Speed> for u8 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial tick speed
    pub speed: Speed,
    /// Seed for food placement, random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            speed: Speed::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Largest grid accepted, in cells
    pub const MAX_CELLS: usize = 1 << 20;

    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file; missing keys take defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        let too_large = match self.grid_width.checked_mul(self.grid_height) {
            Some(cells) => cells > Self::MAX_CELLS,
            None => true,
        };
        if too_large {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }
}
