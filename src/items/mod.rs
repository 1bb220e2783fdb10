//! Item system: potion and weapon values, bounded inventory.

pub mod inventory;
pub mod types;

pub use inventory::*;
pub use types::*;
