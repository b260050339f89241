// src/output/mod.rs

//! Writers for finished dungeons: a PNG overview, RMD levels, a JSON dump,
//! and a text preview.

pub mod ascii;
pub mod png;
pub mod rmd;
pub mod tiles;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::OutputError;
use crate::map::Dungeon;

pub use png::save_png;
pub use rmd::RmdWriter;
pub use tiles::Tile;

/// Dumps the whole dungeon, rooms and doors included, as pretty JSON.
pub fn save_json<P: AsRef<Path>>(dungeon: &Dungeon, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, dungeon)?;
    out.flush()?;
    info!("Wrote dungeon JSON to {}", path.display());
    Ok(())
}
