//! Append-only record of explored rooms with positional navigation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Room;

/// Navigation against an index the map has never issued. Unreachable under
/// correct orchestration; surfacing it loudly beats masking a logic bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("room {index} is not on the map (explored rooms: {count})")]
    RoomNotFound { index: usize, count: usize },
}

/// Explored rooms in visitation order. Rooms are appended, never removed;
/// neighbors are purely positional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Map {
    rooms: Vec<Room>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Appends a room, returning its index.
    pub fn add_room(&mut self, room: Room) -> usize {
        self.rooms.push(room);
        self.rooms.len() - 1
    }

    fn check(&self, index: usize) -> Result<(), MapError> {
        if index < self.rooms.len() {
            Ok(())
        } else {
            Err(MapError::RoomNotFound {
                index,
                count: self.rooms.len(),
            })
        }
    }

    pub fn room(&self, index: usize) -> Result<&Room, MapError> {
        self.check(index)?;
        Ok(&self.rooms[index])
    }

    pub fn room_mut(&mut self, index: usize) -> Result<&mut Room, MapError> {
        self.check(index)?;
        Ok(&mut self.rooms[index])
    }

    /// The room visited before `index`, or `None` for the first room.
    pub fn previous(&self, index: usize) -> Result<Option<usize>, MapError> {
        self.check(index)?;
        Ok(index.checked_sub(1))
    }

    /// The room visited after `index`, or `None` for the newest room.
    pub fn next(&self, index: usize) -> Result<Option<usize>, MapError> {
        self.check(index)?;
        if index + 1 < self.rooms.len() {
            Ok(Some(index + 1))
        } else {
            Ok(None)
        }
    }

    /// Index of the most recently explored room, or `None` when empty.
    pub fn newest(&self) -> Option<usize> {
        self.rooms.len().checked_sub(1)
    }

    /// Marker string in visitation order: `[|]` for the current room,
    /// `[]` for every other.
    pub fn render(&self, current: usize) -> Result<String, MapError> {
        self.check(current)?;
        let mut markers = String::new();
        for index in 0..self.rooms.len() {
            if index == current {
                markers.push_str("[|]");
            } else {
                markers.push_str("[]");
            }
        }
        Ok(markers)
    }
}
