//! Delve - Turn-Based Terminal Dungeon Crawler Library
//!
//! This module exposes the game logic for testing and external use.

pub mod combat;
pub mod core;
pub mod creatures;
pub mod items;
pub mod save;
pub mod ui;
pub mod world;

pub use crate::core::constants;
pub use crate::core::game::Game;
pub use crate::core::stats::Stats;
pub use crate::creatures::player::Player;
pub use crate::creatures::types::{Monster, MonsterKind};
pub use crate::save::{SaveData, SaveError, SaveManager};
pub use crate::world::map::{Map, MapError};
pub use crate::world::types::Room;
