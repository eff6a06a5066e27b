use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the preferences file inside the home directory
pub const PREFERENCES_FILE: &str = ".artwork_editor_state.json";

/// Errors that can occur during preference persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize preferences: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write preferences: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("No home directory to store preferences in")]
    NoHomeDirectory,
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Directories remembered between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Preferences {
    pub last_dir: Option<PathBuf>,
    pub last_overlay_dir: Option<PathBuf>,
}

impl Preferences {
    /// `$HOME/.artwork_editor_state.json`
    pub fn default_path() -> PersistenceResult<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(PREFERENCES_FILE))
            .ok_or(PersistenceError::NoHomeDirectory)
    }

    /// Read preferences, falling back to defaults when the file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(prefs) => prefs,
            Err(err) => {
                log::debug!("Using default preferences ({}): {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> PersistenceResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: &Path) -> PersistenceResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Where to start browsing for a header to load.
    pub fn header_dir(&self) -> PathBuf {
        self.last_dir.clone().unwrap_or_else(current_dir)
    }

    /// Where to start browsing for a save target: next to the current file first.
    pub fn save_dir(&self, current_file: Option<&Path>) -> PathBuf {
        current_file
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.header_dir())
    }

    pub fn overlay_dir(&self) -> PathBuf {
        self.last_overlay_dir
            .clone()
            .or_else(|| self.last_dir.clone())
            .unwrap_or_else(current_dir)
    }

    /// Remember the directory of a header that was just loaded or saved.
    pub fn remember_header(&mut self, file: &Path) {
        if let Some(dir) = file.parent() {
            self.last_dir = Some(dir.to_path_buf());
        }
    }

    pub fn remember_overlay(&mut self, file: &Path) {
        if let Some(dir) = file.parent() {
            self.last_overlay_dir = Some(dir.to_path_buf());
        }
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
