//! # Graph passes
//!
//! Traversals over a connected dungeon: distances, subtree sizes, lock
//! placement and the final room markings. Every pass keeps its temporary
//! per-room and per-door state in a [`Scratch`] that it resets first, so no
//! pass can observe another pass's leftovers.

pub mod partition;
pub mod placement;
pub mod reach;
pub mod subtree;

use std::collections::VecDeque;

use crate::map::{DoorId, Dungeon, RoomId};

pub use partition::place_locks;
pub use placement::{mark_dead_ends, mark_end, place_keys};
pub use reach::{distances_from, Reach};
pub use subtree::count_beyond_each_door;

/// Temporary state shared by the graph passes.
#[derive(Debug, Default)]
pub struct Scratch {
    visited: Vec<bool>,
    dist: Vec<Option<u32>>,
    room_children: Vec<u32>,
    door_children: Vec<u32>,
    order: Vec<RoomId>,
    stack: Vec<RoomId>,
    queue: VecDeque<RoomId>,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sizes every buffer for `dungeon` and wipes all values.
    fn reset(&mut self, dungeon: &Dungeon) {
        let rooms = dungeon.room_count();
        let doors = dungeon.door_count();

        self.visited.clear();
        self.visited.resize(rooms, false);
        self.dist.clear();
        self.dist.resize(rooms, None);
        self.room_children.clear();
        self.room_children.resize(rooms, 0);
        self.door_children.clear();
        self.door_children.resize(doors, 0);
        self.order.clear();
        self.stack.clear();
        self.queue.clear();
    }

    fn clear_visited(&mut self) {
        self.visited.iter_mut().for_each(|v| *v = false);
    }

    /// Door hops from the last distance pass's source; `None` if unreached.
    pub fn distance(&self, room: RoomId) -> Option<u32> {
        self.dist.get(room.0).copied().flatten()
    }

    /// Rooms strictly beyond `room`, as seen from the last subtree pass's source.
    pub fn room_children(&self, room: RoomId) -> u32 {
        self.room_children.get(room.0).copied().unwrap_or(0)
    }

    /// Rooms on the far side of `door`, as seen from the last subtree pass's source.
    pub fn door_children(&self, door: DoorId) -> u32 {
        self.door_children.get(door.0).copied().unwrap_or(0)
    }

    /// Rooms in the order the last pass discovered them.
    pub fn discovery_order(&self) -> &[RoomId] {
        &self.order
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::map::{Direction, Dungeon, RoomId};

    /// Opens the `dir` edge of room `(x, y)`.
    pub(crate) fn carve(dungeon: &mut Dungeon, x: usize, y: usize, dir: Direction) {
        let room = dungeon.room_id(x, y).unwrap();
        let door = dungeon.room(room).door(dir).unwrap();
        dungeon.door_mut(door).is_door = true;
    }

    /// A 3x3 comb: every column open top to bottom, joined along the bottom
    /// row. The same layout Eller's algorithm builds from all-false coins.
    pub(crate) fn comb() -> Dungeon {
        let mut dungeon = Dungeon::new(3, 3).unwrap();
        for x in 0..3 {
            carve(&mut dungeon, x, 0, Direction::Down);
            carve(&mut dungeon, x, 1, Direction::Down);
        }
        carve(&mut dungeon, 0, 2, Direction::Right);
        carve(&mut dungeon, 1, 2, Direction::Right);
        dungeon
    }

    pub(crate) fn at(dungeon: &Dungeon, x: usize, y: usize) -> RoomId {
        dungeon.room_id(x, y).unwrap()
    }
}
