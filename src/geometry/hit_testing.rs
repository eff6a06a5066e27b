use egui::{Pos2, Rect};

use super::ViewTransform;
use crate::element::{Overlay, Shape};
use crate::widgets::resize_handle::{Corner, HANDLE_SIZE};

/// How close to a handle (in view units) a press has to land to grab it.
pub fn handle_tolerance(zoom: f32) -> f32 {
    (HANDLE_SIZE * zoom).trunc().max(HANDLE_SIZE)
}

/// A shape's rectangle in view space, including the extra unit on the far
/// edges that the target renders.
pub fn shape_view_rect(shape: &Shape, transform: &ViewTransform) -> Rect {
    let bounds = shape.bounds();
    let min = transform.to_view(Pos2::new(bounds.x1 as f32, bounds.y1 as f32));
    let max = transform.to_view(Pos2::new((bounds.x2 + 1) as f32, (bounds.y2 + 1) as f32));
    Rect::from_min_max(min, max)
}

/// The overlay's rectangle in view space. `transform` is the screen transform.
pub fn overlay_view_rect(overlay: &Overlay, transform: &ViewTransform) -> Rect {
    transform.rect_to_view(overlay.rect())
}

/// Inclusive containment: points on the right and bottom edge count as inside.
pub fn contains_inclusive(rect: Rect, pos: Pos2) -> bool {
    rect.min.x <= pos.x && pos.x <= rect.max.x && rect.min.y <= pos.y && pos.y <= rect.max.y
}

/// First corner of `rect` (in `Corner::ALL` order) within `tolerance` of `pos` on both axes.
pub fn handle_at(rect: Rect, pos: Pos2, tolerance: f32) -> Option<Corner> {
    Corner::ALL.into_iter().find(|corner| {
        let handle = corner.position(rect);
        (pos.x - handle.x).abs() <= tolerance && (pos.y - handle.y).abs() <= tolerance
    })
}

/// Index of the topmost shape under `pos`. Later shapes are drawn on top, so
/// the list is searched from the end.
pub fn shape_at(shapes: &[Shape], pos: Pos2, transform: &ViewTransform) -> Option<usize> {
    shapes
        .iter()
        .rposition(|shape| contains_inclusive(shape_view_rect(shape, transform), pos))
}

pub fn shape_handle_at(shape: &Shape, pos: Pos2, transform: &ViewTransform) -> Option<Corner> {
    handle_at(
        shape_view_rect(shape, transform),
        pos,
        handle_tolerance(transform.zoom),
    )
}

pub fn overlay_handle_at(overlay: &Overlay, pos: Pos2, transform: &ViewTransform) -> Option<Corner> {
    handle_at(
        overlay_view_rect(overlay, transform),
        pos,
        handle_tolerance(transform.zoom),
    )
}

pub fn overlay_contains(overlay: &Overlay, pos: Pos2, transform: &ViewTransform) -> bool {
    contains_inclusive(overlay_view_rect(overlay, transform), pos)
}
