mod cursor;
mod interaction;

pub use cursor::CursorFeedback;
pub use interaction::{DragMode, InteractionController};

use crate::element::ShapeKind;

/// Enum representing all available tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Filled,
    Outline,
    Zorro,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Select,
        ToolKind::Filled,
        ToolKind::Outline,
        ToolKind::Zorro,
    ];

    /// Return the name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Filled => "Filled",
            ToolKind::Outline => "Outline",
            ToolKind::Zorro => "Zorro",
        }
    }

    /// Keyboard shortcut digit shown next to the tool name.
    pub fn shortcut(&self) -> char {
        match self {
            ToolKind::Select => '1',
            ToolKind::Filled => '2',
            ToolKind::Outline => '3',
            ToolKind::Zorro => '4',
        }
    }

    /// The kind of shape this tool creates, if any.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            ToolKind::Select => None,
            ToolKind::Filled => Some(ShapeKind::Filled),
            ToolKind::Outline => Some(ShapeKind::Outline),
            ToolKind::Zorro => Some(ShapeKind::Zorro),
        }
    }

    /// Tools that create shapes by dragging out a rectangle.
    pub fn draws_rectangles(&self) -> bool {
        matches!(self, ToolKind::Filled | ToolKind::Outline)
    }
}
