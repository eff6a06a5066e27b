use thiserror::Error;

use crate::command::CommandError;
use crate::header::HeaderError;
use crate::image::ImageError;
use crate::properties::PropertyError;
use crate::state::persistence::PersistenceError;

/// Everything the editor can report to the user. None of these are fatal:
/// the document is left as it was before the failed operation.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Header(#[from] HeaderError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error("Overlay: {0}")]
    Image(#[from] ImageError),

    #[error("Preferences: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No shapes to save")]
    NothingToSave,
}

impl EditorError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
