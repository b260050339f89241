// src/generator/mod.rs

//! Turns a [`GeneratorConfig`] into a finished [`Dungeon`]: a spanning tree of
//! doors, locked partitions, keys, and start/end rooms.

pub mod backtracker;
pub mod ellers;

pub use backtracker::connect_backtracker;
pub use ellers::connect_ellers;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GeneratorConfig, Layout};
use crate::error::{ConfigError, GenerationError};
use crate::graph::{mark_dead_ends, mark_end, place_keys, place_locks, Scratch};
use crate::map::{Dungeon, KeyOrder};
use crate::utils::Dice;

pub struct DungeonGenerator<D: Dice> {
    config: GeneratorConfig,
    keys: KeyOrder,
    dice: D,
    scratch: Scratch,
    seed: Option<u64>,
}

impl DungeonGenerator<StdRng> {
    /// Validates `config` and seeds a `StdRng` from it, or from the thread
    /// RNG when no seed is given. The seed in use is logged either way.
    pub fn from_config(config: GeneratorConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random::<u64>());
        info!("Using seed {}", seed);
        let mut generator = Self::with_dice(config, StdRng::seed_from_u64(seed))?;
        generator.seed = Some(seed);
        Ok(generator)
    }
}

impl<D: Dice> DungeonGenerator<D> {
    pub fn with_dice(config: GeneratorConfig, dice: D) -> Result<Self, ConfigError> {
        let keys = config.validate()?;
        Ok(DungeonGenerator {
            config,
            keys,
            dice,
            scratch: Scratch::new(),
            seed: None,
        })
    }

    /// The seed behind the dice, when they came from one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs every stage once and returns the dungeon. Each call draws fresh
    /// values from the same dice.
    pub fn generate(&mut self) -> Result<Dungeon, GenerationError> {
        let (width, height) = (self.config.width, self.config.height);
        let mut dungeon = Dungeon::new(width, height)?;

        let (sx, sy) = self.config.start.locate(width, height);
        let start = dungeon
            .room_id(sx, sy)
            .ok_or(ConfigError::ZeroDimension { width, height })?;

        match self.config.layout {
            Layout::Ellers => connect_ellers(&mut dungeon, &mut self.dice),
            Layout::Backtracker => connect_backtracker(&mut dungeon, start, &mut self.dice),
        }
        info!(
            "Carved {} doors over {}x{} rooms ({:?})",
            dungeon.open_doors(),
            width,
            height,
            self.config.layout
        );

        dungeon.set_start(start);
        place_locks(&mut dungeon, start, &self.keys, &mut self.scratch)?;
        let dead_ends = mark_dead_ends(&mut dungeon);
        place_keys(&mut dungeon, &self.keys, &mut self.dice)?;
        let end = mark_end(&mut dungeon, start, self.keys.final_tier(), &mut self.scratch)?;

        info!(
            "Placed {} keys; {} dead ends; start {:?}, end {:?}",
            self.keys.len(),
            dead_ends,
            start,
            end
        );
        Ok(dungeon)
    }
}
