// src/output/rmd.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::WriteBytesExt;
use log::info;

use crate::config::MIN_ROOM_SIZE;
use crate::error::OutputError;
use crate::map::{Direction, Dungeon, Room};
use crate::output::tiles::Tile;

/// Writes a dungeon as an RMD level.
///
/// Layout (all single bytes):
///
/// ```text
/// field          size
/// -------------  ---------------------------------------------
/// width          1    level width in tiles
/// height         1    level height in tiles
/// tiles          ...  row-major; background, object, and an
///                     object id after every non-empty object
/// script count   1    always 0
/// ```
///
/// Every room becomes a `room_size` square of tiles. Its border is wall
/// except for a door tile in the middle of each side with an open door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmdWriter {
    room_size: usize,
    carve_walls: bool,
}

impl Default for RmdWriter {
    fn default() -> Self {
        RmdWriter {
            room_size: 6,
            carve_walls: false,
        }
    }
}

impl RmdWriter {
    /// `room_size` below the minimum is raised to it.
    pub fn new(room_size: usize, carve_walls: bool) -> Self {
        RmdWriter {
            room_size: room_size.max(MIN_ROOM_SIZE),
            carve_walls,
        }
    }

    pub fn write<W: Write>(&self, dungeon: &Dungeon, out: &mut W) -> Result<(), OutputError> {
        let width = dungeon.width() * self.room_size;
        let height = dungeon.height() * self.room_size;
        if width > u8::MAX as usize || height > u8::MAX as usize {
            return Err(OutputError::LevelTooLarge { width, height });
        }

        out.write_u8(width as u8)?;
        out.write_u8(height as u8)?;

        let mut object_id: u8 = 0;
        for y in 0..dungeon.height() {
            for ry in 0..self.room_size {
                for x in 0..dungeon.width() {
                    let Some(id) = dungeon.room_id(x, y) else { continue };
                    let room = dungeon.room(id);
                    for rx in 0..self.room_size {
                        let (background, object) = self.tile(dungeon, room, rx, ry);
                        out.write_u8(background.code())?;
                        out.write_u8(object.code())?;
                        if object != Tile::Empty {
                            out.write_u8(object_id)?;
                            object_id = object_id.wrapping_add(1);
                        }
                    }
                }
            }
        }

        // No scripts.
        out.write_u8(0)?;
        Ok(())
    }

    pub fn to_bytes(&self, dungeon: &Dungeon) -> Result<Vec<u8>, OutputError> {
        let mut bytes = Vec::new();
        self.write(dungeon, &mut bytes)?;
        Ok(bytes)
    }

    pub fn save<P: AsRef<Path>>(&self, dungeon: &Dungeon, path: P) -> Result<(), OutputError> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write(dungeon, &mut out)?;
        out.flush()?;
        info!("Wrote RMD level to {}", path.display());
        Ok(())
    }

    /// Background and object of tile `(rx, ry)` inside `room`.
    fn tile(&self, dungeon: &Dungeon, room: &Room, rx: usize, ry: usize) -> (Tile, Tile) {
        let last = self.room_size - 1;
        let mid = self.room_size / 2;

        if rx == 0 || ry == 0 || rx == last || ry == last {
            return (self.border(dungeon, room, rx, ry), Tile::Empty);
        }
        if rx == mid && ry == mid {
            return (Tile::Floor, centre_object(room));
        }
        (Tile::Floor, Tile::Empty)
    }

    fn border(&self, dungeon: &Dungeon, room: &Room, rx: usize, ry: usize) -> Tile {
        let last = self.room_size - 1;
        let mid = self.room_size / 2;
        let corner = (rx == 0 || rx == last) && (ry == 0 || ry == last);

        // Each side with the tile's position along it.
        let sides = [
            (Direction::Up, ry == 0, rx),
            (Direction::Down, ry == last, rx),
            (Direction::Left, rx == 0, ry),
            (Direction::Right, rx == last, ry),
        ];
        for (dir, on_side, along) in sides {
            if !on_side {
                continue;
            }
            let Some(door) = room.door(dir).map(|id| dungeon.door(id)) else {
                continue;
            };
            if !door.is_door {
                continue;
            }
            if along == mid {
                return Tile::door(door.lock.map(|key| key.kind));
            }
            if self.carve_walls && !corner && !door.is_locked() {
                return Tile::Floor;
            }
        }
        Tile::Wall
    }
}

fn centre_object(room: &Room) -> Tile {
    if let Some(key) = room.treasure {
        Tile::item(key.kind)
    } else if room.is_start {
        Tile::StartPoint
    } else if room.is_end {
        Tile::Artifact
    } else if room.is_dead_end {
        Tile::PickupEnergy
    } else {
        Tile::Empty
    }
}
