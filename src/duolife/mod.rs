//! DuoLife engine internals and public API.

mod board;
pub mod display;
mod engine;
mod kernel;
pub mod pattern;
pub mod patterns;
pub mod render;
mod rules;
mod scheduler;

pub use board::{Board, BoardPair, MIN_HEIGHT, WORD_BITS};
pub use engine::{DEFAULT_HEIGHT, DEFAULT_SOUP_MARGIN, DEFAULT_WIDTH, DuoLife, DuoLifeConfig};
pub use kernel::{advance_band, advance_interior, advance_row};
pub use pattern::PatternError;
pub use rules::RuleTable;
pub use scheduler::DualUnit;
