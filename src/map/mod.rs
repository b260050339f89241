// src/map/mod.rs
pub mod direction;
pub mod door;
pub mod dungeon;
pub mod key;
pub mod room;

pub use direction::Direction;
pub use door::{Door, DoorId};
pub use dungeon::Dungeon;
pub use key::{Key, KeyOrder, KeyType};
pub use room::{Room, RoomId};
