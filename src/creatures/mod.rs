//! Creatures: the player and the monster kinds they fight.

pub mod player;
pub mod types;

pub use player::*;
pub use types::*;
