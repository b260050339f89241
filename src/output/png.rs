// src/output/png.rs

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use log::info;

use crate::error::OutputError;
use crate::map::{Direction, Dungeon, KeyType, Room};

/// Width and height of one room in the overview image.
pub const PIXELS_PER_ROOM: u32 = 5;

const BLACK: u32 = 0xFF00_0000;
const WHITE: u32 = 0xFFFF_FFFF;
const START: u32 = 0xFFFF_0000;
const END: u32 = 0xFF00_00FF;

/// Map colour of a key, as `0xAARRGGBB`.
pub fn key_colour(kind: KeyType) -> u32 {
    match kind {
        KeyType::ChargeBeam => 0xFF77_66EE,
        KeyType::Missile => 0xFF33_8822,
        KeyType::LavaSuit => 0xFFAA_7744,
        KeyType::IceBeam => 0xFF44_BBCC,
        KeyType::WaterSuit => 0xFFEE_CC66,
        KeyType::XRay => 0xFF77_33AA,
        KeyType::KeyA | KeyType::KeyB | KeyType::KeyC => 0xFFBB_BBBB,
    }
}

fn rgba(argb: u32) -> Rgba<u8> {
    let [a, r, g, b] = argb.to_be_bytes();
    Rgba([r, g, b, a])
}

/// Draws a room-level overview of the dungeon.
///
/// Borders are black with a one-pixel gap in the middle of each side that
/// has an open door, white or the lock's colour. Interiors are red for the
/// start, blue for the end, otherwise the colour of the key that opens the
/// room's partition. The centre pixel shows what lies in the room.
pub fn render(dungeon: &Dungeon) -> RgbaImage {
    let size = PIXELS_PER_ROOM;
    let mut image = RgbaImage::from_pixel(
        dungeon.width() as u32 * size,
        dungeon.height() as u32 * size,
        rgba(BLACK),
    );

    for room in dungeon.rooms() {
        let left = room.x as u32 * size;
        let top = room.y as u32 * size;
        let interior = interior_colour(dungeon, room);

        for py in 1..size - 1 {
            for px in 1..size - 1 {
                image.put_pixel(left + px, top + py, rgba(interior));
            }
        }
        if let Some(centre) = centre_colour(room) {
            image.put_pixel(left + size / 2, top + size / 2, rgba(centre));
        }

        for (dir, id) in room.door_slots() {
            let door = dungeon.door(id);
            if !door.is_door {
                continue;
            }
            let colour = door.lock.map_or(WHITE, |key| key_colour(key.kind));
            let (px, py) = match dir {
                Direction::Up => (size / 2, 0),
                Direction::Down => (size / 2, size - 1),
                Direction::Left => (0, size / 2),
                Direction::Right => (size - 1, size / 2),
            };
            image.put_pixel(left + px, top + py, rgba(colour));
        }
    }
    image
}

fn interior_colour(dungeon: &Dungeon, room: &Room) -> u32 {
    if room.is_start {
        START
    } else if room.is_end {
        END
    } else {
        dungeon
            .partition_key(room.partition)
            .map_or(WHITE, |key| key_colour(key.kind))
    }
}

fn centre_colour(room: &Room) -> Option<u32> {
    if room.is_start {
        Some(START)
    } else if room.is_end {
        Some(END)
    } else if let Some(key) = room.treasure {
        Some(key_colour(key.kind))
    } else if room.is_dead_end {
        Some(BLACK)
    } else {
        None
    }
}

pub fn save_png<P: AsRef<Path>>(dungeon: &Dungeon, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    render(dungeon).save_with_format(path, ImageFormat::Png)?;
    info!("Wrote room overview to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Key, RoomId};

    fn pixel(image: &RgbaImage, x: u32, y: u32) -> u32 {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        u32::from_be_bytes([a, r, g, b])
    }

    #[test]
    fn test_image_size() {
        let dungeon = Dungeon::new(4, 3).unwrap();
        assert_eq!(render(&dungeon).dimensions(), (20, 15));
    }

    #[test]
    fn test_rooms_and_doors() {
        let mut dungeon = Dungeon::new(3, 1).unwrap();
        let first = dungeon.room(RoomId(0)).door(Direction::Right).unwrap();
        let second = dungeon.room(RoomId(1)).door(Direction::Right).unwrap();
        dungeon.door_mut(first).is_door = true;
        dungeon.door_mut(second).is_door = true;

        let missile = Key { kind: KeyType::Missile, tier: 1 };
        dungeon.door_mut(second).lock = Some(missile);
        dungeon.set_keys(&[missile]);
        dungeon.room_mut(RoomId(2)).partition = 1;
        dungeon.room_mut(RoomId(2)).is_dead_end = true;
        dungeon.set_start(RoomId(0));
        dungeon.room_mut(RoomId(1)).treasure = Some(missile);

        let image = render(&dungeon);

        assert_eq!(pixel(&image, 0, 0), BLACK);
        assert_eq!(pixel(&image, 1, 1), START);
        assert_eq!(pixel(&image, 2, 2), START);
        // Open door between the first two rooms, drawn from both sides.
        assert_eq!(pixel(&image, 4, 2), WHITE);
        assert_eq!(pixel(&image, 5, 2), WHITE);
        assert_eq!(pixel(&image, 4, 1), BLACK);

        assert_eq!(pixel(&image, 6, 1), WHITE);
        assert_eq!(pixel(&image, 7, 2), key_colour(KeyType::Missile));

        assert_eq!(pixel(&image, 9, 2), key_colour(KeyType::Missile));
        assert_eq!(pixel(&image, 11, 1), key_colour(KeyType::Missile));
        assert_eq!(pixel(&image, 12, 2), BLACK);
        // No door on the far right.
        assert_eq!(pixel(&image, 14, 2), BLACK);
    }

    #[test]
    fn test_colour_channels() {
        assert_eq!(rgba(0xFF11_2233), Rgba([0x11, 0x22, 0x33, 0xFF]));
    }
}
