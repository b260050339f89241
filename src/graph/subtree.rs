// src/graph/subtree.rs

use crate::graph::Scratch;
use crate::map::{Dungeon, RoomId};

/// Counts, for every room and every unlocked open door reachable from
/// `source`, how many rooms lie strictly beyond it.
///
/// The unlocked part of the dungeon must be a tree. The first pass records
/// rooms in discovery order with an explicit stack; the second walks that
/// order backwards, so every child is totalled before its parent and each
/// room adds `1 + children` of its already-processed neighbours to itself and
/// to the door between them. Results are read with `Scratch::room_children`
/// and `Scratch::door_children`. Returns the number of rooms reached,
/// `source` included.
pub fn count_beyond_each_door(dungeon: &Dungeon, source: RoomId, scratch: &mut Scratch) -> u32 {
    scratch.reset(dungeon);

    scratch.visited[source.0] = true;
    scratch.stack.push(source);
    while let Some(room) = scratch.stack.pop() {
        scratch.order.push(room);
        for (_, next) in dungeon.passages(room, false) {
            if !scratch.visited[next.0] {
                scratch.visited[next.0] = true;
                scratch.stack.push(next);
            }
        }
    }

    scratch.clear_visited();
    for i in (0..scratch.order.len()).rev() {
        let room = scratch.order[i];
        scratch.visited[room.0] = true;
        for (door, next) in dungeon.passages(room, false) {
            if scratch.visited[next.0] {
                let beyond = 1 + scratch.room_children[next.0];
                scratch.door_children[door.0] += beyond;
                scratch.room_children[room.0] += beyond;
            }
        }
    }

    scratch.order.len() as u32
}
