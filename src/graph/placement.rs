// src/graph/placement.rs

use log::debug;

use crate::error::GenerationError;
use crate::graph::{distances_from, Scratch};
use crate::map::{Dungeon, Key, KeyOrder, Room, RoomId};
use crate::utils::{shuffle, Dice};

/// Flags every room with exactly one open door. Returns how many there are.
pub fn mark_dead_ends(dungeon: &mut Dungeon) -> usize {
    let mut count = 0;
    for i in 0..dungeon.room_count() {
        let id = RoomId(i);
        let dead_end = dungeon.open_door_count(id) == 1;
        dungeon.room_mut(id).is_dead_end = dead_end;
        if dead_end {
            count += 1;
        }
    }
    count
}

/// Puts every key in a room the player can reach before needing it.
///
/// Rooms are scanned in a shuffled order. The first scan only accepts dead
/// ends lying in the partition just before the key's own lock; the second
/// accepts any room in an earlier partition. Start and end rooms never take
/// a key, and no room takes two.
pub fn place_keys<D: Dice + ?Sized>(
    dungeon: &mut Dungeon,
    keys: &KeyOrder,
    dice: &mut D,
) -> Result<(), GenerationError> {
    for i in 0..dungeon.room_count() {
        dungeon.room_mut(RoomId(i)).treasure = None;
    }

    let mut order: Vec<RoomId> = (0..dungeon.room_count()).map(RoomId).collect();
    shuffle(&mut order, dice);

    let mut placed = vec![false; keys.len()];
    fill(dungeon, &order, keys, &mut placed, |room, key| {
        room.is_dead_end && room.partition + 1 == key.tier
    });
    fill(dungeon, &order, keys, &mut placed, |room, key| {
        room.partition < key.tier
    });

    match placed.iter().position(|done| !done) {
        Some(missing) => Err(GenerationError::NoRoomForKey {
            key: keys.keys()[missing].kind,
        }),
        None => Ok(()),
    }
}

fn fill(
    dungeon: &mut Dungeon,
    order: &[RoomId],
    keys: &KeyOrder,
    placed: &mut [bool],
    accepts: impl Fn(&Room, &Key) -> bool,
) {
    for &id in order {
        // Highest tier first.
        for (i, key) in keys.keys().iter().enumerate().rev() {
            if placed[i] {
                continue;
            }
            let room = dungeon.room(id);
            if room.can_hold_key() && accepts(room, key) {
                debug!("Placed the {} in room ({}, {})", key.kind, room.x, room.y);
                dungeon.room_mut(id).treasure = Some(*key);
                placed[i] = true;
                break;
            }
        }
    }
}

/// Marks the room of `final_tier` furthest from `start` (locks ignored) as
/// the end. Among equally distant rooms the first discovered wins.
pub fn mark_end(
    dungeon: &mut Dungeon,
    start: RoomId,
    final_tier: u8,
    scratch: &mut Scratch,
) -> Result<RoomId, GenerationError> {
    distances_from(dungeon, start, true, scratch);

    let mut best: Option<(RoomId, u32)> = None;
    for &id in scratch.discovery_order() {
        if id == start || dungeon.room(id).partition != final_tier {
            continue;
        }
        let dist = scratch.distance(id).unwrap_or(0);
        if best.map_or(true, |(_, furthest)| dist > furthest) {
            best = Some((id, dist));
        }
    }

    let (end, dist) = best.ok_or(GenerationError::NoEndRoom { tier: final_tier })?;
    dungeon.set_end(end);
    debug!("End room {:?} is {} doors from the start", end, dist);
    Ok(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::{at, comb};
    use crate::graph::place_locks;
    use crate::map::{Direction, KeyType};
    use crate::utils::dice::tests::ScriptedDice;

    fn locked_comb(keys: &str) -> (Dungeon, RoomId, KeyOrder) {
        let mut dungeon = comb();
        let start = at(&dungeon, 1, 2);
        dungeon.set_start(start);
        let keys = KeyOrder::parse(keys).unwrap();
        place_locks(&mut dungeon, start, &keys, &mut Scratch::new()).unwrap();
        (dungeon, start, keys)
    }

    #[test]
    fn test_dead_ends_on_comb() {
        let mut dungeon = comb();
        assert_eq!(mark_dead_ends(&mut dungeon), 3);
        for x in 0..3 {
            assert!(dungeon.room(at(&dungeon, x, 0)).is_dead_end);
            assert!(!dungeon.room(at(&dungeon, x, 1)).is_dead_end);
        }
    }

    #[test]
    fn test_key_prefers_dead_end_before_its_lock() {
        let (mut dungeon, _, keys) = locked_comb("m");
        mark_dead_ends(&mut dungeon);
        // Zero draws shuffle the rooms to [1, 2, ..., 8, 0]; room 1 is the
        // dead end (1, 0) in partition 0.
        place_keys(&mut dungeon, &keys, &mut ScriptedDice::constant(false)).unwrap();

        let holders: Vec<_> = dungeon.rooms().iter().filter(|r| r.treasure.is_some()).collect();
        assert_eq!(holders.len(), 1);
        assert_eq!((holders[0].x, holders[0].y), (1, 0));
        assert_eq!(holders[0].treasure, Some(Key { kind: KeyType::Missile, tier: 1 }));
    }

    #[test]
    fn test_falls_back_to_any_earlier_room() {
        let (mut dungeon, start, keys) = locked_comb("m");
        // No dead ends flagged, so only the second scan places anything; it
        // takes the first shuffled room of partition 0.
        place_keys(&mut dungeon, &keys, &mut ScriptedDice::constant(false)).unwrap();
        let holder = dungeon.rooms().iter().position(|r| r.treasure.is_some()).unwrap();
        assert_eq!(RoomId(holder), at(&dungeon, 1, 0));
        assert!(dungeon.room(start).treasure.is_none());
    }

    #[test]
    fn test_every_key_lands_before_its_lock() {
        let (mut dungeon, start, keys) = locked_comb("cx");
        mark_dead_ends(&mut dungeon);
        place_keys(&mut dungeon, &keys, &mut ScriptedDice::constant(true)).unwrap();

        for key in keys.keys() {
            let holders: Vec<&Room> = dungeon
                .rooms()
                .iter()
                .filter(|r| r.treasure.map(|t| t.kind) == Some(key.kind))
                .collect();
            assert_eq!(holders.len(), 1);
            assert!(holders[0].partition < key.tier);
        }
        assert!(dungeon.room(start).treasure.is_none());
    }

    #[test]
    fn test_missing_room_is_reported() {
        // Two rooms, one key: the only room before the lock is the start.
        let mut dungeon = Dungeon::new(2, 1).unwrap();
        let door = dungeon.room(RoomId(0)).door(Direction::Right).unwrap();
        dungeon.door_mut(door).is_door = true;
        dungeon.set_start(RoomId(0));
        let keys = KeyOrder::parse("i").unwrap();
        place_locks(&mut dungeon, RoomId(0), &keys, &mut Scratch::new()).unwrap();

        let result = place_keys(&mut dungeon, &keys, &mut ScriptedDice::constant(false));
        assert_eq!(result, Err(GenerationError::NoRoomForKey { key: KeyType::IceBeam }));
    }

    #[test]
    fn test_end_is_furthest_room_of_final_partition() {
        let (mut dungeon, start, keys) = locked_comb("m");
        let end = mark_end(&mut dungeon, start, keys.final_tier(), &mut Scratch::new()).unwrap();
        assert_eq!(end, at(&dungeon, 0, 0));
        assert!(dungeon.room(end).is_end);
        assert_eq!(dungeon.end(), Some(end));
    }

    #[test]
    fn test_end_needs_a_final_partition_room() {
        let mut dungeon = comb();
        let start = at(&dungeon, 1, 2);
        let result = mark_end(&mut dungeon, start, 1, &mut Scratch::new());
        assert_eq!(result, Err(GenerationError::NoEndRoom { tier: 1 }));
    }
}
