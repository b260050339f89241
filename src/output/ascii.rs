// src/output/ascii.rs

use crate::map::{Direction, Dungeon, Room};

/// A text drawing of the dungeon, one character per room and one per edge.
///
/// Rooms show `S` (start), `E` (end), the symbol of the key lying there,
/// `.` for a dead end, or a blank. Walls are `|` and `-` between `+` posts;
/// an open door is a blank and a locked one shows its key symbol in upper
/// case.
pub fn render(dungeon: &Dungeon) -> String {
    let mut out = String::with_capacity((2 * dungeon.width() + 2) * (2 * dungeon.height() + 1));

    for y in 0..dungeon.height() {
        // Top wall of the row.
        for x in 0..dungeon.width() {
            out.push('+');
            out.push(edge_glyph(dungeon, x, y, Direction::Up, '-'));
        }
        out.push_str("+\n");

        for x in 0..dungeon.width() {
            out.push(edge_glyph(dungeon, x, y, Direction::Left, '|'));
            if let Some(id) = dungeon.room_id(x, y) {
                out.push(room_glyph(dungeon.room(id)));
            }
        }
        out.push_str("|\n");
    }

    for _ in 0..dungeon.width() {
        out.push_str("+-");
    }
    out.push('+');
    out
}

fn room_glyph(room: &Room) -> char {
    if room.is_start {
        'S'
    } else if room.is_end {
        'E'
    } else if let Some(key) = room.treasure {
        key.kind.symbol()
    } else if room.is_dead_end {
        '.'
    } else {
        ' '
    }
}

fn edge_glyph(dungeon: &Dungeon, x: usize, y: usize, dir: Direction, wall: char) -> char {
    let door = dungeon
        .room_id(x, y)
        .and_then(|id| dungeon.room(id).door(dir))
        .map(|id| dungeon.door(id));
    match door {
        Some(door) if door.is_door => match door.lock {
            Some(key) => key.kind.symbol().to_ascii_uppercase(),
            None => ' ',
        },
        _ => wall,
    }
}
