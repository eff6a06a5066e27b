use super::{CommandError, CommandResult};
use crate::document::{Document, Selection};
use crate::element::Overlay;
use crate::properties::ShapeProperties;

/// Discrete edits that do not come from a pointer gesture.
///
/// Each one is validated against the document first so that a failing
/// command never leaves a snapshot behind.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Remove the selected shape, or the overlay when it is selected
    DeleteSelection,
    /// Overwrite a shape's fields from the property dialog
    SetProperties {
        index: usize,
        properties: ShapeProperties,
    },
    /// Install a freshly loaded overlay and select it
    SetOverlay(Overlay),
    /// Drop the overlay
    ClearOverlay,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::DeleteSelection => "Delete",
            Command::SetProperties { .. } => "Properties",
            Command::SetOverlay(_) => "Load Overlay",
            Command::ClearOverlay => "Clear Overlay",
        }
    }

    /// Check that the command can run on `document` without touching it.
    pub fn validate(&self, document: &Document) -> CommandResult {
        match self {
            Command::DeleteSelection => match document.selection() {
                Selection::None => Err(CommandError::NothingSelected),
                Selection::Shape(index) if document.shape(index).is_none() => {
                    Err(CommandError::InvalidIndex(index))
                }
                Selection::Overlay if document.overlay().is_none() => {
                    Err(CommandError::NothingSelected)
                }
                _ => Ok(()),
            },
            Command::SetProperties { index, .. } => match document.shape(*index) {
                Some(_) => Ok(()),
                None => Err(CommandError::InvalidIndex(*index)),
            },
            Command::SetOverlay(_) => Ok(()),
            Command::ClearOverlay => match document.overlay() {
                Some(_) => Ok(()),
                None => Err(CommandError::NothingSelected),
            },
        }
    }

    /// Apply the command. Callers run [`Command::validate`] first.
    pub fn execute(&self, document: &mut Document) {
        match self {
            Command::DeleteSelection => match document.selection() {
                Selection::Shape(index) => {
                    document.remove(index);
                    document.clear_selection();
                }
                Selection::Overlay => document.set_overlay(None),
                Selection::None => {}
            },
            Command::SetProperties { index, properties } => {
                if let Some(shape) = document.shape_mut(*index) {
                    properties.apply_to(shape);
                }
            }
            Command::SetOverlay(overlay) => {
                document.set_overlay(Some(overlay.clone()));
                document.select(Selection::Overlay);
            }
            Command::ClearOverlay => document.set_overlay(None),
        }
    }
}
