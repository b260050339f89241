// src/generator/ellers.rs

use log::debug;
use union_find::{QuickUnionUf, UnionBySize, UnionFind};

use crate::map::{Direction, Dungeon, RoomId};
use crate::utils::Dice;

/// Carves a spanning tree over the whole grid with Eller's algorithm.
///
/// Rows are processed top to bottom. Set membership is tracked with a
/// union-find over every room; a room nobody connected to from above is
/// simply a singleton set. Edges between rooms of the same set are always
/// left as walls, and every set is given a way down (or joined on the last
/// row), so the result is connected and acyclic for any sequence of draws.
pub fn connect_ellers<D: Dice + ?Sized>(dungeon: &mut Dungeon, dice: &mut D) {
    let width = dungeon.width();
    let height = dungeon.height();
    let mut sets = QuickUnionUf::<UnionBySize>::new(dungeon.room_count());

    for y in 0..height {
        let row: Vec<RoomId> = (0..width)
            .filter_map(|x| dungeon.room_id(x, y))
            .collect();

        // Random left/right doors, never between rooms already joined.
        for pair in row.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            let open = sets.find(left.0) != sets.find(right.0) && dice.coin();
            set_edge(dungeon, left, Direction::Right, open);
            if open {
                sets.union(left.0, right.0);
            }
        }

        if y + 1 < height {
            // Rooms whose set already has a way down.
            let mut descended: Vec<RoomId> = Vec::with_capacity(width);

            for &room in &row {
                let open = dice.coin();
                set_edge(dungeon, room, Direction::Down, open);
                if open {
                    join_below(dungeon, &mut sets, room);
                    descended.push(room);
                }
            }

            // Every set must reach the next row at least once.
            for &room in &row {
                let set = sets.find(room.0);
                let has_way_down = descended.iter().any(|d| sets.find(d.0) == set);
                if !has_way_down {
                    debug!("Row {}: forcing a way down from room {:?}", y, room);
                    set_edge(dungeon, room, Direction::Down, true);
                    join_below(dungeon, &mut sets, room);
                    descended.push(room);
                }
            }
        } else {
            // Last row: join whatever is still apart.
            for pair in row.windows(2) {
                let (left, right) = (pair[0], pair[1]);
                if sets.find(left.0) != sets.find(right.0) {
                    set_edge(dungeon, left, Direction::Right, true);
                    sets.union(left.0, right.0);
                }
            }
        }
    }
}

fn set_edge(dungeon: &mut Dungeon, room: RoomId, dir: Direction, open: bool) {
    if let Some(door) = dungeon.room(room).door(dir) {
        dungeon.door_mut(door).is_door = open;
    }
}

fn join_below(dungeon: &Dungeon, sets: &mut QuickUnionUf<UnionBySize>, room: RoomId) {
    if let Some(below) = dungeon.neighbor(room, Direction::Down) {
        sets.union(room.0, below.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{distances_from, Scratch};
    use crate::utils::dice::tests::ScriptedDice;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn open(dungeon: &Dungeon, x: usize, y: usize, dir: Direction) -> bool {
        let room = dungeon.room_id(x, y).unwrap();
        let door = dungeon.room(room).door(dir).unwrap();
        dungeon.door(door).is_door
    }

    fn assert_spanning_tree(dungeon: &Dungeon) {
        assert_eq!(dungeon.open_doors(), dungeon.room_count() - 1);
        let mut scratch = Scratch::new();
        distances_from(dungeon, RoomId(0), true, &mut scratch);
        for i in 0..dungeon.room_count() {
            assert!(scratch.distance(RoomId(i)).is_some(), "room {} unreachable", i);
        }
    }

    #[test]
    fn test_all_walls_coins_build_a_comb() {
        let mut dungeon = Dungeon::new(3, 3).unwrap();
        let mut dice = ScriptedDice::constant(false);
        connect_ellers(&mut dungeon, &mut dice);

        // Every column is open top to bottom, joined along the last row.
        for x in 0..3 {
            assert!(open(&dungeon, x, 0, Direction::Down));
            assert!(open(&dungeon, x, 1, Direction::Down));
        }
        assert!(!open(&dungeon, 0, 0, Direction::Right));
        assert!(!open(&dungeon, 1, 1, Direction::Right));
        assert!(open(&dungeon, 0, 2, Direction::Right));
        assert!(open(&dungeon, 1, 2, Direction::Right));
        assert_spanning_tree(&dungeon);
        // Two horizontal flips per row plus three vertical flips per upper row.
        assert_eq!(dice.flips, 2 * 3 + 3 * 2);
    }

    #[test]
    fn test_all_doors_coins_skip_flips_inside_a_set() {
        let mut dungeon = Dungeon::new(3, 3).unwrap();
        let mut dice = ScriptedDice::constant(true);
        connect_ellers(&mut dungeon, &mut dice);

        assert!(open(&dungeon, 0, 0, Direction::Right));
        assert!(open(&dungeon, 1, 0, Direction::Right));
        for y in 1..3 {
            assert!(!open(&dungeon, 0, y, Direction::Right));
            assert!(!open(&dungeon, 1, y, Direction::Right));
        }
        for x in 0..3 {
            assert!(open(&dungeon, x, 0, Direction::Down));
            assert!(open(&dungeon, x, 1, Direction::Down));
        }
        assert_spanning_tree(&dungeon);
        // Rows 1 and 2 are a single set, so only row 0 flips horizontally.
        assert_eq!(dice.flips, 2 + 3 + 3);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(1, 6)]
    #[case(6, 1)]
    #[case(2, 2)]
    #[case(5, 4)]
    #[case(12, 9)]
    fn test_spanning_tree_for_many_seeds(#[case] width: usize, #[case] height: usize) {
        for seed in 0..40 {
            let mut dungeon = Dungeon::new(width, height).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            connect_ellers(&mut dungeon, &mut rng);
            assert_spanning_tree(&dungeon);
        }
    }

    #[test]
    fn test_alternating_coins_still_span() {
        for pattern in [[true, false], [false, true]] {
            let mut dungeon = Dungeon::new(7, 5).unwrap();
            let mut dice = ScriptedDice::coins(&pattern);
            connect_ellers(&mut dungeon, &mut dice);
            assert_spanning_tree(&dungeon);
        }
    }
}
