//! Rooms, the explored-room map, and procedural room generation.

pub mod generation;
pub mod map;
pub mod types;

pub use generation::*;
pub use map::*;
pub use types::*;
