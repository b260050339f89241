// src/map/room.rs

use serde::Serialize;

use crate::map::{Direction, DoorId, Key};

/// Index of a room inside `Dungeon::rooms` (row-major, `y * width + x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomId(pub usize);

/// One cell of the dungeon grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub x: usize,
    pub y: usize,

    /// Door slots, indexed by `Direction::index`. `None` at the grid edge.
    pub doors: [Option<DoorId>; 4],

    /// Tier of the key needed to get here; 0 for the start region.
    pub partition: u8,

    /// The key lying in this room, if any.
    pub treasure: Option<Key>,

    pub is_start: bool,
    pub is_end: bool,
    pub is_dead_end: bool,
}

impl Room {
    pub fn new(x: usize, y: usize) -> Self {
        Room {
            x,
            y,
            doors: [None; 4],
            partition: 0,
            treasure: None,
            is_start: false,
            is_end: false,
            is_dead_end: false,
        }
    }

    pub fn door(&self, dir: Direction) -> Option<DoorId> {
        self.doors[dir.index()]
    }

    /// Existing door slots in `Direction::ALL` order, walls included.
    pub fn door_slots(&self) -> impl Iterator<Item = (Direction, DoorId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.door(dir).map(|door| (dir, door)))
    }

    /// Start and end rooms never hold a key.
    pub fn can_hold_key(&self) -> bool {
        !self.is_start && !self.is_end && self.treasure.is_none()
    }
}
