// src/map/dungeon.rs

use serde::Serialize;

use crate::error::ConfigError;
use crate::map::{Direction, Door, DoorId, Key, Room, RoomId};

/// The room grid and every edge between neighbouring rooms.
///
/// Rooms are stored row-major. Doors are stored with every horizontal
/// (left/right) edge first, row by row, followed by every vertical (up/down)
/// edge, row by row. All cross references are indices into these two arenas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dungeon {
    width: usize,
    height: usize,
    rooms: Vec<Room>,
    doors: Vec<Door>,
    keys: Vec<Key>,
    start: Option<RoomId>,
    end: Option<RoomId>,
}

impl Dungeon {
    /// Allocates a `width` x `height` grid with every edge closed and wires
    /// each room's slots to the doors between it and its neighbours.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }

        let mut rooms = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                rooms.push(Room::new(x, y));
            }
        }

        let door_count = width * (height - 1) + (width - 1) * height;
        let mut doors = Vec::with_capacity(door_count);

        // Left/right doors.
        for y in 0..height {
            for x in 0..width - 1 {
                let left = y * width + x;
                let right = left + 1;
                let id = DoorId(doors.len());
                rooms[left].doors[Direction::Right.index()] = Some(id);
                rooms[right].doors[Direction::Left.index()] = Some(id);
                doors.push(Door::new(RoomId(left), RoomId(right)));
            }
        }

        // Up/down doors.
        for y in 0..height - 1 {
            for x in 0..width {
                let upper = y * width + x;
                let lower = upper + width;
                let id = DoorId(doors.len());
                rooms[upper].doors[Direction::Down.index()] = Some(id);
                rooms[lower].doors[Direction::Up.index()] = Some(id);
                doors.push(Door::new(RoomId(upper), RoomId(lower)));
            }
        }

        debug_assert_eq!(doors.len(), door_count);

        Ok(Dungeon {
            width,
            height,
            rooms,
            doors,
            keys: Vec::new(),
            start: None,
            end: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    pub fn room_id(&self, x: usize, y: usize) -> Option<RoomId> {
        (x < self.width && y < self.height).then(|| RoomId(y * self.width + x))
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn door(&self, id: DoorId) -> &Door {
        &self.doors[id.0]
    }

    pub fn door_mut(&mut self, id: DoorId) -> &mut Door {
        &mut self.doors[id.0]
    }

    /// The room across the `dir` slot, whether or not that edge is open.
    pub fn neighbor(&self, room: RoomId, dir: Direction) -> Option<RoomId> {
        self.room(room)
            .door(dir)
            .map(|door| self.door(door).other(room))
    }

    /// Open edges leaving `room`, in `Direction::ALL` order, paired with the
    /// room on the far side. Locked doors are skipped unless `ignore_locks`.
    pub fn passages(
        &self,
        room: RoomId,
        ignore_locks: bool,
    ) -> impl Iterator<Item = (DoorId, RoomId)> + '_ {
        self.room(room).door_slots().filter_map(move |(_, id)| {
            let door = self.door(id);
            door.is_passable(ignore_locks).then(|| (id, door.other(room)))
        })
    }

    /// Number of open edges around `room`, locked or not.
    pub fn open_door_count(&self, room: RoomId) -> usize {
        self.passages(room, true).count()
    }

    /// Number of open edges in the whole grid.
    pub fn open_doors(&self) -> usize {
        self.doors.iter().filter(|door| door.is_door).count()
    }

    pub fn locked_doors(&self) -> impl Iterator<Item = (DoorId, &Door)> + '_ {
        self.doors
            .iter()
            .enumerate()
            .filter(|(_, door)| door.is_locked())
            .map(|(i, door)| (DoorId(i), door))
    }

    pub fn start(&self) -> Option<RoomId> {
        self.start
    }

    pub fn end(&self) -> Option<RoomId> {
        self.end
    }

    /// Marks `room` as the start, clearing any previous start.
    pub fn set_start(&mut self, room: RoomId) {
        if let Some(old) = self.start.replace(room) {
            self.rooms[old.0].is_start = false;
        }
        self.rooms[room.0].is_start = true;
    }

    /// Marks `room` as the end, clearing any previous end.
    pub fn set_end(&mut self, room: RoomId) {
        if let Some(old) = self.end.replace(room) {
            self.rooms[old.0].is_end = false;
        }
        self.rooms[room.0].is_end = true;
    }

    /// Keys locked into this dungeon, in progression order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn set_keys(&mut self, keys: &[Key]) {
        self.keys = keys.to_vec();
    }

    /// The key that opens partition `tier`, or `None` for the start region.
    pub fn partition_key(&self, tier: u8) -> Option<Key> {
        self.keys.iter().find(|key| key.tier == tier).copied()
    }
}
