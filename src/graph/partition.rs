// src/graph/partition.rs

use log::{debug, info};

use crate::error::GenerationError;
use crate::graph::{count_beyond_each_door, Scratch};
use crate::map::{DoorId, Dungeon, Key, KeyOrder, RoomId};

/// Splits the dungeon into one region per key with locked doors.
///
/// Keys are locked deepest first: the last key's door is chosen while the
/// whole dungeon is still open, and every later choice only sees what is
/// still reachable from `start`. For each key the subtree sizes are
/// recomputed, the unlocked door whose far side is closest to
/// `(reachable + 1) / (keys_left + 1)` rooms is locked, and the rooms behind
/// it are labelled with the key's tier. Partitions therefore never decrease
/// walking away from `start`, and every locked door leads to a higher one.
pub fn place_locks(
    dungeon: &mut Dungeon,
    start: RoomId,
    keys: &KeyOrder,
    scratch: &mut Scratch,
) -> Result<(), GenerationError> {
    for room in 0..dungeon.room_count() {
        dungeon.room_mut(RoomId(room)).partition = 0;
    }

    let total = keys.len();
    for (step, key) in keys.keys().iter().rev().enumerate() {
        let reachable = count_beyond_each_door(dungeon, start, scratch);
        let target = (reachable + 1) / (total - step + 1) as u32;

        let door = closest_door(dungeon, scratch, target)
            .ok_or(GenerationError::NoLockableDoor { key: key.kind })?;
        dungeon.door_mut(door).lock = Some(*key);

        // The far side is the room with the smaller subtree.
        let [a, b] = dungeon.door(door).rooms;
        let far = if scratch.room_children(a) < scratch.room_children(b) {
            a
        } else {
            b
        };
        let labelled = assign_partition(dungeon, far, key.tier, scratch);

        info!(
            "Locked door {:?} with the {} (target {} of {} rooms, {} behind it)",
            door, key.kind, target, reachable, labelled
        );
    }

    dungeon.set_keys(keys.keys());
    Ok(())
}

/// The unlocked, reachable door whose subtree size is closest to `target`.
/// Ties go to the lowest door index.
fn closest_door(dungeon: &Dungeon, scratch: &Scratch, target: u32) -> Option<DoorId> {
    let mut best: Option<(DoorId, u32)> = None;
    for (i, door) in dungeon.doors().iter().enumerate() {
        let id = DoorId(i);
        let beyond = scratch.door_children(id);
        // Doors behind earlier locks were never reached and count zero.
        if !door.is_passable(false) || beyond == 0 {
            continue;
        }
        let diff = beyond.abs_diff(target);
        if best.map_or(true, |(_, best_diff)| diff < best_diff) {
            best = Some((id, diff));
        }
    }
    if let Some((id, diff)) = best {
        debug!("Best door {:?} misses target {} by {}", id, target, diff);
    }
    best.map(|(id, _)| id)
}

/// Labels every room reachable from `from` over unlocked doors with `tier`.
/// Returns how many rooms were labelled.
fn assign_partition(dungeon: &mut Dungeon, from: RoomId, tier: u8, scratch: &mut Scratch) -> usize {
    scratch.reset(dungeon);
    scratch.visited[from.0] = true;
    scratch.stack.push(from);

    let mut labelled = 0;
    while let Some(room) = scratch.stack.pop() {
        dungeon.room_mut(room).partition = tier;
        labelled += 1;

        for (_, neighbor) in dungeon.passages(room, false) {
            if !scratch.visited[neighbor.0] {
                scratch.visited[neighbor.0] = true;
                scratch.stack.push(neighbor);
            }
        }
    }
    labelled
}
