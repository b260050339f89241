#![warn(non_snake_case)]
//! # rust_dungeon
//!
//! Command line front end for the lock-and-key dungeon generator. Reads an
//! optional JSON config, applies flag overrides, generates one dungeon and
//! writes it out as a PNG overview, an RMD level and, on request, JSON.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=info` (or `debug`) to see
//! the seed and each generation stage.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use rust_dungeon::config::{GeneratorConfig, Layout, StartPosition};
use rust_dungeon::generator::DungeonGenerator;
use rust_dungeon::output::{ascii, save_json, save_png, RmdWriter};

/// Generate a lock-and-key dungeon
#[derive(Parser, Debug)]
#[command(name = "rust_dungeon")]
#[command(author, version, about = "Generate a lock-and-key dungeon", long_about = None)]
struct Args {
    /// Dungeon width in rooms
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Dungeon height in rooms
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Keys in the order they are collected (c m l i w x 1 2 3)
    #[arg(short = 'k', long)]
    keys: Option<String>,

    /// Seed for a reproducible dungeon
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Tiles per room side in the RMD level
    #[arg(long)]
    room_size: Option<usize>,

    /// Open whole walls next to unlocked doors in the RMD level
    #[arg(long)]
    carve: bool,

    /// Start room position
    #[arg(long, value_enum)]
    start: Option<StartPosition>,

    /// Spanning tree algorithm
    #[arg(long, value_enum)]
    layout: Option<Layout>,

    /// JSON config file; flags override its values
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Where to write the PNG overview
    #[arg(long, default_value = "rooms.png")]
    png: PathBuf,

    /// Where to write the RMD level
    #[arg(long, default_value = "dungeon.rmd")]
    rmd: PathBuf,

    /// Also dump the dungeon as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Do not print the text preview
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Args {
    /// The config file (or defaults) with every given flag applied on top.
    fn into_config(self) -> Result<(GeneratorConfig, Outputs), Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(keys) = self.keys {
            config.keys = keys;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(room_size) = self.room_size {
            config.room_size = room_size;
        }
        if self.carve {
            config.carve_walls = true;
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }

        let outputs = Outputs {
            png: self.png,
            rmd: self.rmd,
            json: self.json,
            quiet: self.quiet,
        };
        Ok((config, outputs))
    }
}

struct Outputs {
    png: PathBuf,
    rmd: PathBuf,
    json: Option<PathBuf>,
    quiet: bool,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let (config, outputs) = args.into_config()?;
    let writer = RmdWriter::new(config.room_size, config.carve_walls);

    let mut generator = DungeonGenerator::from_config(config)?;
    let dungeon = generator.generate()?;

    save_png(&dungeon, &outputs.png)?;
    writer.save(&dungeon, &outputs.rmd)?;
    if let Some(path) = &outputs.json {
        save_json(&dungeon, path)?;
    }

    if !outputs.quiet {
        println!("{}", ascii::render(&dungeon));
        if let Some(seed) = generator.seed() {
            println!("seed: {}", seed);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    info!("rust_dungeon starting...");

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("Generation failed: {}", e);
        return Err(e);
    }
    Ok(())
}
