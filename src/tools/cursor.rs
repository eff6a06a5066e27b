use egui::CursorIcon;

use crate::widgets::resize_handle::Corner;

/// Pointer affordance derived from the interaction state and hover position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorFeedback {
    Default,
    /// Hovering an unselected shape or overlay
    Selectable,
    /// Hovering the selected body, or moving it
    Move,
    /// Hovering a handle of the selection, or resizing with it
    Resize(Corner),
    /// A creation tool is active
    Draw,
}

impl CursorFeedback {
    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            CursorFeedback::Default => CursorIcon::Default,
            CursorFeedback::Selectable => CursorIcon::PointingHand,
            CursorFeedback::Move => CursorIcon::Move,
            CursorFeedback::Resize(corner) => corner.cursor_icon(),
            CursorFeedback::Draw => CursorIcon::Crosshair,
        }
    }
}
