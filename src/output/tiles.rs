// src/output/tiles.rs

use crate::map::KeyType;

/// One byte of an RMD level, background or object.
///
/// Codes are grouped by their high bits:
///
/// ```text
/// range   group
/// -----   ---------------------------
/// 0x00    empty (no object)
/// 0x2_    floors
/// 0x4_    walls
/// 0x6_    doors
/// 0x8_    items
/// 0xA_    enemies and spawn points
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Tile {
    Empty = 0x00,
    Floor = 0x21,
    FloorWater = 0x22,
    FloorLava = 0x23,
    Wall = 0x41,
    DoorCharge = 0x62,
    DoorMissile = 0x63,
    DoorIce = 0x64,
    DoorXRay = 0x65,
    DoorKeyA = 0x67,
    DoorKeyB = 0x68,
    DoorKeyC = 0x69,
    ChargeBeam = 0x82,
    Missile = 0x83,
    IceBeam = 0x84,
    XRay = 0x85,
    WaterSuit = 0x86,
    LavaSuit = 0x87,
    KeyA = 0x89,
    KeyB = 0x8A,
    KeyC = 0x8B,
    Artifact = 0x8C,
    PickupEnergy = 0x8D,
    StartPoint = 0xA1,
}

impl Tile {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Background of an open door. Suits are not doors at all: the lock is
    /// a stretch of water or lava floor.
    pub fn door(lock: Option<KeyType>) -> Tile {
        match lock {
            None => Tile::Floor,
            Some(KeyType::ChargeBeam) => Tile::DoorCharge,
            Some(KeyType::Missile) => Tile::DoorMissile,
            Some(KeyType::LavaSuit) => Tile::FloorLava,
            Some(KeyType::IceBeam) => Tile::DoorIce,
            Some(KeyType::WaterSuit) => Tile::FloorWater,
            Some(KeyType::XRay) => Tile::DoorXRay,
            Some(KeyType::KeyA) => Tile::DoorKeyA,
            Some(KeyType::KeyB) => Tile::DoorKeyB,
            Some(KeyType::KeyC) => Tile::DoorKeyC,
        }
    }

    /// The pickup that grants `kind`.
    pub fn item(kind: KeyType) -> Tile {
        match kind {
            KeyType::ChargeBeam => Tile::ChargeBeam,
            KeyType::Missile => Tile::Missile,
            KeyType::LavaSuit => Tile::LavaSuit,
            KeyType::IceBeam => Tile::IceBeam,
            KeyType::WaterSuit => Tile::WaterSuit,
            KeyType::XRay => Tile::XRay,
            KeyType::KeyA => Tile::KeyA,
            KeyType::KeyB => Tile::KeyB,
            KeyType::KeyC => Tile::KeyC,
        }
    }
}
