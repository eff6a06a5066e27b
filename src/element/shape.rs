use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;

/// What a drawing record renders as. The discriminants are the on-disk `type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Filled,
    Outline,
    Zorro,
    /// Any other `type` value; kept verbatim so it survives a save.
    Unknown(i32),
}

impl ShapeKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => ShapeKind::Filled,
            2 => ShapeKind::Outline,
            3 => ShapeKind::Zorro,
            other => ShapeKind::Unknown(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ShapeKind::Filled => 1,
            ShapeKind::Outline => 2,
            ShapeKind::Zorro => 3,
            ShapeKind::Unknown(code) => *code,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Filled => "filled",
            ShapeKind::Outline => "outline",
            ShapeKind::Zorro => "zorro",
            ShapeKind::Unknown(_) => "unknown",
        }
    }
}

/// Number of entries in the fixed pen palette.
pub const PEN_COUNT: i32 = 4;

/// Colour shown for pens outside the palette.
pub const UNKNOWN_PEN_COLOR: Color32 = Color32::from_rgb(0xFF, 0x00, 0xFF);

/// Display colour for a pen, or `None` when the pen is outside the palette.
pub fn pen_color(pen: i32) -> Option<Color32> {
    match pen {
        0 => Some(Color32::from_rgb(0xB2, 0xB2, 0xB2)), // background / cutout
        1 => Some(Color32::from_rgb(0x00, 0x00, 0x00)), // chips
        2 => Some(Color32::from_rgb(0xFF, 0xFF, 0xFF)), // silver
        3 => Some(Color32::from_rgb(0x66, 0x88, 0xBB)), // board
        _ => None,
    }
}

/// One `struct drawing` record.
///
/// `w` and `h` may be negative while a resize is in flight; [`Shape::normalize`]
/// folds the sign back into `x`/`y`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub pen: i32,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub comment: Option<String>,
}

impl Shape {
    pub fn new(kind: ShapeKind, pen: i32, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            kind,
            pen,
            x,
            y,
            w,
            h,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Ordered bounds. A zero-width or zero-height rectangle still covers one
    /// unit, which is how the boot menu draws it.
    pub fn bounds(&self) -> Bounds {
        let (x1, x2) = span(self.x, self.w);
        let (y1, y2) = span(self.y, self.h);
        Bounds::new(x1, y1, x2, y2)
    }

    /// Make `w` and `h` non-negative without moving the covered area.
    /// Values at the edge of the integer range saturate.
    pub fn normalize(&mut self) {
        if self.w < 0 {
            self.x = self.x.saturating_add(self.w);
            self.w = self.w.saturating_neg();
        }
        if self.h < 0 {
            self.y = self.y.saturating_add(self.h);
            self.h = self.h.saturating_neg();
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn color(&self) -> Option<Color32> {
        pen_color(self.pen)
    }
}

/// Ordered `(low, high)` covered by `start` and `start + len`, at least one
/// unit wide.
fn span(start: i32, len: i32) -> (i32, i32) {
    let end = start.saturating_add(len);
    let (low, high) = if end < start { (end, start) } else { (start, end) };
    match (low == high, high) {
        (false, _) => (low, high),
        (true, i32::MAX) => (low - 1, high),
        (true, _) => (low, high + 1),
    }
}
