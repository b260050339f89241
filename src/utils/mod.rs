// src/utils/mod.rs
pub mod dice;

pub use dice::{shuffle, Dice};
