// src/lib.rs

pub mod config;
pub mod error;
pub mod generator;
pub mod graph;
pub mod map;
pub mod output;
pub mod utils;
