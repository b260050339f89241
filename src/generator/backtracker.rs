// src/generator/backtracker.rs

use crate::map::{Direction, Dungeon, RoomId};
use crate::utils::{shuffle, Dice};

/// Carves a spanning tree with a randomized depth-first walk from `origin`.
///
/// From the room on top of the stack, the four directions are shuffled and
/// the first unvisited neighbour is opened and pushed. A room with no
/// unvisited neighbours is popped. Produces long winding corridors compared
/// to Eller's algorithm.
pub fn connect_backtracker<D: Dice + ?Sized>(dungeon: &mut Dungeon, origin: RoomId, dice: &mut D) {
    let mut visited = vec![false; dungeon.room_count()];
    let mut stack = vec![origin];
    visited[origin.0] = true;

    while let Some(&current) = stack.last() {
        let mut choices = Direction::ALL;
        shuffle(&mut choices, dice);

        let next = choices.into_iter().find_map(|dir| {
            let door = dungeon.room(current).door(dir)?;
            let room = dungeon.door(door).other(current);
            (!visited[room.0]).then_some((door, room))
        });

        match next {
            Some((door, room)) => {
                dungeon.door_mut(door).is_door = true;
                visited[room.0] = true;
                stack.push(room);
            }
            None => {
                stack.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{distances_from, Scratch};
    use crate::utils::dice::tests::ScriptedDice;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spans_every_grid() {
        for (w, h) in [(1, 1), (1, 4), (4, 1), (3, 3), (8, 6)] {
            for seed in 0..20 {
                let mut dungeon = Dungeon::new(w, h).unwrap();
                let mut rng = StdRng::seed_from_u64(seed);
                let origin = dungeon.room_id(w / 2, h - 1).unwrap();
                connect_backtracker(&mut dungeon, origin, &mut rng);

                assert_eq!(dungeon.open_doors(), w * h - 1);
                let mut scratch = Scratch::new();
                distances_from(&dungeon, origin, true, &mut scratch);
                assert!((0..w * h).all(|i| scratch.distance(RoomId(i)).is_some()));
            }
        }
    }

    #[test]
    fn test_zero_draws_snake_through_the_grid() {
        // With index 0 every shuffle of [Up, Down, Left, Right] yields
        // [Down, Left, Right, Up]; from the top-left corner that walks down
        // the first column, then right along the bottom, then back up.
        let mut dungeon = Dungeon::new(2, 2).unwrap();
        let mut dice = ScriptedDice::constant(false);
        connect_backtracker(&mut dungeon, RoomId(0), &mut dice);

        let corner = dungeon.room(RoomId(0));
        assert!(dungeon.door(corner.door(Direction::Down).unwrap()).is_door);
        assert!(!dungeon.door(corner.door(Direction::Right).unwrap()).is_door);
        let bottom_left = dungeon.room(RoomId(2));
        assert!(dungeon.door(bottom_left.door(Direction::Right).unwrap()).is_door);
        let bottom_right = dungeon.room(RoomId(3));
        assert!(dungeon.door(bottom_right.door(Direction::Up).unwrap()).is_door);
    }
}
