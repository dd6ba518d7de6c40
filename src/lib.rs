//! Bit-packed Conway's Game of Life (B3/S23) split across two compute units.

pub mod duolife;
pub use duolife::{DuoLife, DuoLifeConfig};
