mod commands;
mod history;

use thiserror::Error;

pub use commands::Command;
pub use history::{CommandHistory, HISTORY_CAPACITY};

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The command needs a selection and there is none
    #[error("nothing is selected")]
    NothingSelected,
    /// The command refers to a shape that does not exist
    #[error("no shape at index {0}")]
    InvalidIndex(usize),
}
