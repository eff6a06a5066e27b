pub mod resize_handle;

use egui::{Painter, Rect, Stroke};

/// Outline `rect` with a dashed line.
pub fn dashed_rect(painter: &Painter, rect: Rect, stroke: Stroke, dash: f32, gap: f32) {
    let outline = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    painter.extend(egui::Shape::dashed_line(&outline, stroke, dash, gap));
}
