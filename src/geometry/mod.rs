pub mod hit_testing;
pub mod transform;

use egui::{Pos2, Rect};

use crate::widgets::resize_handle::Corner;

pub use transform::{VideoMode, ViewTransform};

/// Integer rectangle in model space, always ordered so that `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Bounds {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> i32 {
        self.y2.saturating_sub(self.y1)
    }

    pub fn to_rect(self) -> Rect {
        Rect::from_min_max(
            Pos2::new(self.x1 as f32, self.y1 as f32),
            Pos2::new(self.x2 as f32, self.y2 as f32),
        )
    }
}

/// Model -> view: `(model + offset) * zoom`, truncated to whole view units.
pub fn to_view(model: Pos2, offset: egui::Vec2, zoom: f32) -> Pos2 {
    let view = (model.to_vec2() + offset) * zoom;
    Pos2::new(view.x.trunc(), view.y.trunc())
}

/// View -> model. The result may be fractional; callers round per operation.
pub fn to_model(view: Pos2, offset: egui::Vec2, zoom: f32) -> Pos2 {
    Pos2::new(view.x / zoom - offset.x, view.y / zoom - offset.y)
}

/// The corner diagonally opposite `handle`, which stays put while resizing.
pub fn fixed_corner(bounds: Rect, handle: Corner) -> Pos2 {
    match handle {
        Corner::TopLeft => bounds.right_bottom(),
        Corner::TopRight => bounds.left_bottom(),
        Corner::BottomLeft => bounds.right_top(),
        Corner::BottomRight => bounds.left_top(),
    }
}

/// Adjust `moving` so that the box spanned with `anchor` has a width/height
/// ratio of `aspect`.
///
/// The dominant axis keeps the user's drag extent and the other axis grows to
/// match, so the result is never smaller than the raw drag. Each axis keeps its
/// own sign relative to the anchor.
pub fn constrain_to_aspect(anchor: Pos2, moving: Pos2, aspect: f32) -> Pos2 {
    let aspect = if aspect > 0.0 { aspect } else { 1.0 };
    let dx = moving.x - anchor.x;
    let dy = moving.y - anchor.y;
    let (adx, ady) = (dx.abs(), dy.abs());
    if adx == 0.0 && ady == 0.0 {
        return moving;
    }

    let (width, height) = if ady == 0.0 {
        (adx, (adx / aspect).round().max(1.0))
    } else if adx == 0.0 {
        ((ady * aspect).round().max(1.0), ady)
    } else if adx / ady > aspect {
        // too wide: height follows width
        (adx, (adx / aspect).round())
    } else {
        // too tall: width follows height
        ((ady * aspect).round(), ady)
    };

    let sign_x = if dx >= 0.0 { 1.0 } else { -1.0 };
    let sign_y = if dy >= 0.0 { 1.0 } else { -1.0 };
    Pos2::new(anchor.x + sign_x * width, anchor.y + sign_y * height)
}
