// src/graph/reach.rs

use crate::graph::Scratch;
use crate::map::{Dungeon, RoomId};

/// Summary of a distance pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reach {
    /// The first room, in discovery order, found at the greatest distance.
    /// The source itself when nothing else is reachable.
    pub furthest: RoomId,
    pub distance: u32,
    /// Rooms reached, source included.
    pub reached: usize,
}

/// Breadth-first door-hop distances from `source`.
///
/// Only open doors are followed, and locked ones only when `ignore_locks`.
/// Per-room results are left in `scratch` (`Scratch::distance`), unreached
/// rooms read back as `None`. Neighbours are visited in `Direction::ALL`
/// order, which makes the furthest-room tie-break deterministic.
pub fn distances_from(
    dungeon: &Dungeon,
    source: RoomId,
    ignore_locks: bool,
    scratch: &mut Scratch,
) -> Reach {
    scratch.reset(dungeon);
    scratch.dist[source.0] = Some(0);
    scratch.order.push(source);
    scratch.queue.push_back(source);

    let mut reach = Reach {
        furthest: source,
        distance: 0,
        reached: 1,
    };

    while let Some(room) = scratch.queue.pop_front() {
        let next = scratch.dist[room.0].unwrap_or(0) + 1;
        for (_, neighbor) in dungeon.passages(room, ignore_locks) {
            if scratch.dist[neighbor.0].is_some() {
                continue;
            }
            scratch.dist[neighbor.0] = Some(next);
            scratch.order.push(neighbor);
            scratch.queue.push_back(neighbor);

            if next > reach.distance {
                reach.furthest = neighbor;
                reach.distance = next;
            }
        }
    }

    reach.reached = scratch.order.len();
    reach
}
