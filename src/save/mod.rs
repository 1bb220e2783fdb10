//! Saving and loading game snapshots with a checksummed binary format.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::core::constants::SAVE_VERSION_MAGIC;
use crate::creatures::player::Player;
use crate::world::map::Map;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not determine a save directory")]
    NoSaveDirectory,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] bincode::Error),
    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] bincode::Error),
    #[error("invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    BadMagic { expected: u64, found: u64 },
    #[error("checksum verification failed")]
    ChecksumMismatch,
}

/// Complete picture of a run: the player, every explored room, and where
/// the player is standing. Loading reconstructs an equivalent game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub player: Player,
    pub map: Map,
    pub current_room: usize,
    pub saved_at: i64,
}

/// Manages the save file.
///
/// File format:
/// - Version magic (8 bytes)
/// - Data length (4 bytes)
/// - Serialized snapshot (variable length)
/// - SHA256 checksum over magic + length + data (32 bytes)
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Sets up the save location at the platform's config directory.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs = ProjectDirs::from("", "", "delve").ok_or(SaveError::NoSaveDirectory)?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// Uses an explicit file path instead of the platform directory.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn save(&self, data: &SaveData) -> Result<(), SaveError> {
        let encoded = bincode::serialize(data).map_err(SaveError::Encode)?;
        let data_len = encoded.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&encoded);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&encoded)?;
        file.write_all(&checksum)?;
        Ok(())
    }

    pub fn load(&self) -> Result<SaveData, SaveError> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(SaveError::BadMagic {
                expected: SAVE_VERSION_MAGIC,
                found: version,
            });
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut encoded = vec![0u8; data_len as usize];
        file.read_exact(&mut encoded)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&encoded);
        let computed_checksum = hasher.finalize();
        if stored_checksum != computed_checksum.as_slice() {
            return Err(SaveError::ChecksumMismatch);
        }

        bincode::deserialize(&encoded).map_err(SaveError::Decode)
    }
}
