// src/error.rs

use crate::map::KeyType;
use thiserror::Error;

/// Problems with the caller's parameters. These are always raised before any
/// generation work starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Dungeon dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("At least one key type is required")]
    NoKeys,
    #[error("Key type '{0}' appears more than once")]
    DuplicateKey(char),
    #[error("Unrecognized key type '{0}'")]
    UnknownKey(char),
    #[error("Room tile size must be at least {min}, got {size}")]
    RoomSizeTooSmall { size: usize, min: usize },
    #[error("Could not read config file '{path}': {reason}")]
    Unreadable { path: String, reason: String },
    #[error("Malformed config: {0}")]
    Malformed(String),
}

/// A generation run that could not produce a valid dungeon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("No unlocked door is left to lock with the {key}")]
    NoLockableDoor { key: KeyType },
    #[error("No room is available to hold the {key}")]
    NoRoomForKey { key: KeyType },
    #[error("Partition {tier} has no room left for the end")]
    NoEndRoom { tier: u8 },
}

/// Failures while writing a finished dungeon somewhere.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Level is {width}x{height} tiles, the RMD format holds at most 255 per side")]
    LevelTooLarge { width: usize, height: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts_into_generation_error() {
        let err: GenerationError = ConfigError::NoKeys.into();
        assert_eq!(err, GenerationError::Config(ConfigError::NoKeys));
        assert_eq!(err.to_string(), "At least one key type is required");
    }

    #[test]
    fn test_generation_error_names_the_key() {
        let err = GenerationError::NoLockableDoor { key: KeyType::Missile };
        assert_eq!(err.to_string(), "No unlocked door is left to lock with the missile");
    }
}
