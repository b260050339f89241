// src/config.rs

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::map::KeyOrder;

/// Smallest room, in tiles, that still has an interior.
pub const MIN_ROOM_SIZE: usize = 3;

/// Where the player enters the dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StartPosition {
    #[default]
    BottomCenter,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl StartPosition {
    /// Grid coordinates of the start room on a `width` x `height` grid.
    pub fn locate(self, width: usize, height: usize) -> (usize, usize) {
        let right = width.saturating_sub(1);
        let bottom = height.saturating_sub(1);
        match self {
            StartPosition::BottomCenter => (width / 2, bottom),
            StartPosition::TopLeft => (0, 0),
            StartPosition::TopRight => (right, 0),
            StartPosition::BottomLeft => (0, bottom),
            StartPosition::BottomRight => (right, bottom),
        }
    }
}

/// Which spanning-tree algorithm lays out the doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Eller's algorithm, row by row.
    #[default]
    Ellers,
    /// Randomized depth-first walk from the start room.
    Backtracker,
}

/// Everything a generation run needs. Missing fields in a config file fall
/// back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    /// Key characters in the order the player collects them.
    pub keys: String,
    /// Fixed seed for reproducible output; a random one is drawn if absent.
    pub seed: Option<u64>,
    pub start: StartPosition,
    pub layout: Layout,
    /// Tiles per room side in RMD output.
    pub room_size: usize,
    /// Open whole walls next to unlocked doors in RMD output.
    pub carve_walls: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            width: 6,
            height: 6,
            keys: "cmx".to_string(),
            seed: None,
            start: StartPosition::default(),
            layout: Layout::default(),
            room_size: 6,
            carve_walls: false,
        }
    }
}

impl GeneratorConfig {
    /// Loads a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Checks every parameter and returns the parsed key order.
    pub fn validate(&self) -> Result<KeyOrder, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.room_size < MIN_ROOM_SIZE {
            return Err(ConfigError::RoomSizeTooSmall {
                size: self.room_size,
                min: MIN_ROOM_SIZE,
            });
        }
        KeyOrder::parse(&self.keys)
    }
}
