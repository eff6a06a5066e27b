use egui::{Color32, CursorIcon, Painter, Pos2, Rect, Stroke, Vec2};

/// Visual size of a drawn handle, in view units.
pub const HANDLE_SIZE: f32 = 6.0;

const HANDLE_FILL: Color32 = Color32::from_rgb(0xAA, 0xE1, 0xFF);
const HANDLE_OUTLINE: Color32 = Color32::from_rgb(0x00, 0x77, 0xCC);
const SELECTION_OUTLINE: Color32 = Color32::from_rgb(0x00, 0xAA, 0xFF);

/// Represents a corner of a selection box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Hit-test order for overlapping handles.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "tl",
            Corner::TopRight => "tr",
            Corner::BottomLeft => "bl",
            Corner::BottomRight => "br",
        }
    }

    pub fn opposite(&self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// Position of this corner on `rect`.
    pub fn position(&self, rect: Rect) -> Pos2 {
        match self {
            Corner::TopLeft => rect.left_top(),
            Corner::TopRight => rect.right_top(),
            Corner::BottomLeft => rect.left_bottom(),
            Corner::BottomRight => rect.right_bottom(),
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            Corner::TopLeft => CursorIcon::ResizeNwSe,
            Corner::TopRight => CursorIcon::ResizeNeSw,
            Corner::BottomLeft => CursorIcon::ResizeNeSw,
            Corner::BottomRight => CursorIcon::ResizeNwSe,
        }
    }
}

/// Draw the dashed selection outline and the four corner handles around a view rect.
pub fn draw_selection_handles(painter: &Painter, rect: Rect) {
    super::dashed_rect(painter, rect, Stroke::new(1.0, SELECTION_OUTLINE), 3.0, 2.0);

    for corner in Corner::ALL {
        let handle = Rect::from_center_size(corner.position(rect), Vec2::splat(HANDLE_SIZE));
        painter.rect_filled(handle, 0.0, HANDLE_FILL);
        painter.rect_stroke(handle, 0.0, Stroke::new(1.0, HANDLE_OUTLINE));
    }
}
