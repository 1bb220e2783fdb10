//! Core game state and progression rules.

pub mod constants;
pub mod game;
pub mod stats;

pub use constants::*;
pub use game::*;
pub use stats::*;
