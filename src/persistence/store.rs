use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::game::GameState;

use super::codec;

/// The single named file a game is saved to and loaded from.
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SaveFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Create an empty save file if none exists yet. An existing file is
    /// left untouched.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        match OpenOptions::new().write(true).create_new(true).open(&self.path) {
            Ok(_) => {
                tracing::debug!(path = %self.path.display(), "created empty save file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Write the game, replacing any previous save.
    pub fn save(&self, state: &GameState) -> Result<(), StoreError> {
        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, codec::encode(state)).map_err(|e| self.io_error(e))?;
        // Atomic rename
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;

        tracing::info!(path = %self.path.display(), "game saved");
        Ok(())
    }

    /// Read back the last saved game.
    pub fn load(&self) -> Result<GameState, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            // A missing file holds no save, same as an empty one.
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(self.io_error(e)),
        };
        let state = codec::decode(&bytes)?;
        tracing::info!(path = %self.path.display(), "game loaded");
        Ok(state)
    }
}
