// src/map/door.rs

use serde::Serialize;

use crate::map::{Key, RoomId};

/// Index of a door inside `Dungeon::doors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DoorId(pub usize);

/// The edge between two grid-adjacent rooms. A closed edge (`is_door ==
/// false`) is a wall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Door {
    /// Left or upper room first.
    pub rooms: [RoomId; 2],
    pub is_door: bool,
    pub lock: Option<Key>,
}

impl Door {
    pub fn new(first: RoomId, second: RoomId) -> Self {
        Door {
            rooms: [first, second],
            is_door: false,
            lock: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Whether a walk may cross this edge.
    pub fn is_passable(&self, ignore_locks: bool) -> bool {
        self.is_door && (ignore_locks || self.lock.is_none())
    }

    /// The room on the other side of `from`.
    pub fn other(&self, from: RoomId) -> RoomId {
        if self.rooms[0] == from {
            self.rooms[1]
        } else {
            self.rooms[0]
        }
    }
}
