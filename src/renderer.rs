use egui::{Color32, Painter, Pos2, Rect, Stroke, TextureHandle, TextureOptions, Vec2};

use crate::document::{Document, Selection};
use crate::element::{zorro_stripes, Overlay, Shape, ShapeKind, UNKNOWN_PEN_COLOR};
use crate::geometry::hit_testing::{overlay_view_rect, shape_view_rect};
use crate::geometry::{VideoMode, ViewTransform};
use crate::image::load_image;
use crate::tools::InteractionController;
use crate::widgets::dashed_rect;
use crate::widgets::resize_handle::draw_selection_handles;

/// Opacity the overlay is drawn with, so the shapes underneath stay visible.
pub const OVERLAY_OPACITY: f32 = 0.30;

const SCREEN_FILL: Color32 = Color32::from_rgb(0xDD, 0xDD, 0xDD);
const SCREEN_OUTLINE: Color32 = Color32::from_rgb(0xBB, 0xBB, 0xBB);
const CROSSHAIR_COLOR: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);
const PREVIEW_COLOR: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);

/// Texture for the overlay currently on screen, keyed by image path.
struct OverlayTexture {
    path: String,
    handle: TextureHandle,
}

/// Paints the document onto the canvas.
///
/// Everything is computed in view space and shifted by the canvas origin, so
/// the same hit-testing rectangles that drive the interaction are what the
/// user sees.
pub struct Renderer {
    ctx: egui::Context,
    overlay_texture: Option<OverlayTexture>,
    /// Path that failed to load last time; not retried every frame
    failed_overlay: Option<String>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("overlay_texture", &self.overlay_texture.as_ref().map(|t| &t.path))
            .field("failed_overlay", &self.failed_overlay)
            .finish()
    }
}

impl Renderer {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            overlay_texture: None,
            failed_overlay: None,
        }
    }

    /// Size of the virtual screen on the canvas at the current zoom.
    pub fn canvas_size(video_mode: VideoMode, zoom: f32) -> Vec2 {
        video_mode.virtual_size() * zoom
    }

    /// Install already-decoded pixels for `path`, replacing any cached texture.
    pub fn set_overlay_image(&mut self, path: &str, image: egui::ColorImage) {
        let handle = self.ctx.load_texture(format!("overlay:{}", path), image, TextureOptions::LINEAR);
        self.overlay_texture = Some(OverlayTexture {
            path: path.to_owned(),
            handle,
        });
        self.failed_overlay = None;
    }

    pub fn has_overlay_texture(&self, path: &str) -> bool {
        self.overlay_texture.as_ref().is_some_and(|t| t.path == path)
    }

    /// Drop the cached overlay texture.
    pub fn clear_overlay(&mut self) {
        self.overlay_texture = None;
        self.failed_overlay = None;
    }

    /// Paint one frame: screen background, shapes in order, overlay on top,
    /// selection, creation preview and finally the origin crosshair.
    pub fn render(
        &mut self,
        painter: &Painter,
        origin: Pos2,
        document: &Document,
        controller: &InteractionController,
        video_mode: VideoMode,
    ) {
        let transform = controller.transform();
        let shift = origin.to_vec2();

        let screen = Rect::from_min_size(origin, Self::canvas_size(video_mode, transform.zoom).floor());
        painter.rect_filled(screen, 0.0, SCREEN_FILL);
        painter.rect_stroke(screen, 0.0, Stroke::new(1.0, SCREEN_OUTLINE));

        for shape in document.shapes() {
            paint_shape(painter, shift, shape, transform);
        }

        if let Some(overlay) = document.overlay() {
            self.paint_overlay(painter, shift, overlay, &transform.screen());
        }

        match document.selection() {
            Selection::Shape(index) => {
                if let Some(shape) = document.shape(index) {
                    draw_selection_handles(painter, shape_view_rect(shape, transform).translate(shift));
                }
            }
            Selection::Overlay => {
                if let Some(overlay) = document.overlay() {
                    let rect = overlay_view_rect(overlay, &transform.screen());
                    draw_selection_handles(painter, snap(rect).translate(shift));
                }
            }
            Selection::None => {}
        }

        if let Some(preview) = controller.preview() {
            dashed_rect(painter, preview.translate(shift), Stroke::new(1.0, PREVIEW_COLOR), 2.0, 2.0);
        }

        paint_origin_crosshair(painter, shift, transform);
    }

    fn paint_overlay(&mut self, painter: &Painter, shift: Vec2, overlay: &Overlay, screen: &ViewTransform) {
        if !self.has_overlay_texture(&overlay.image_path) {
            self.reload_overlay(&overlay.image_path);
        }
        let Some(texture) = &self.overlay_texture else {
            return;
        };
        if texture.path != overlay.image_path {
            return;
        }

        let rect = snap(overlay_view_rect(overlay, screen)).translate(shift);
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        let alpha = (OVERLAY_OPACITY * 255.0) as u8;
        painter.image(texture.handle.id(), rect, uv, Color32::from_white_alpha(alpha));
    }

    /// Decode the overlay image from disk. Used when the document gained an
    /// overlay the renderer has not seen yet, e.g. after undo.
    fn reload_overlay(&mut self, path: &str) {
        if self.failed_overlay.as_deref() == Some(path) {
            return;
        }
        match load_image(std::path::Path::new(path)) {
            Ok(loaded) => self.set_overlay_image(path, loaded.pixels),
            Err(err) => {
                log::warn!("Failed to load overlay {}: {}", path, err);
                self.overlay_texture = None;
                self.failed_overlay = Some(path.to_owned());
            }
        }
    }
}

/// Whole view units, the way the canvas addresses pixels.
fn snap(rect: Rect) -> Rect {
    Rect::from_min_max(rect.min.floor(), rect.max.floor())
}

/// Paint a shape according to its kind. Unknown pens fall back to magenta;
/// unknown kinds are drawn as a dashed magenta box.
pub fn paint_shape(painter: &Painter, shift: Vec2, shape: &Shape, transform: &ViewTransform) {
    let rect = shape_view_rect(shape, transform).translate(shift);
    let color = shape.color().unwrap_or(UNKNOWN_PEN_COLOR);

    match shape.kind {
        ShapeKind::Filled => {
            painter.rect_filled(rect, 0.0, color);
        }
        ShapeKind::Outline => {
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, color));
        }
        ShapeKind::Zorro => {
            let visible = painter.clip_rect().translate(-shift);
            for stripe in zorro_rects(shape, transform, visible) {
                painter.rect_filled(stripe.translate(shift), 0.0, color);
            }
        }
        ShapeKind::Unknown(_) => {
            dashed_rect(painter, rect, Stroke::new(1.0, UNKNOWN_PEN_COLOR), 2.0, 2.0);
        }
    }
}

/// View-space rectangles of a Zorro shape's stripes that fall inside the
/// view-space `visible` rect. Each stripe is at least one view unit wide,
/// whatever the zoom.
pub fn zorro_rects(shape: &Shape, transform: &ViewTransform, visible: Rect) -> Vec<Rect> {
    let full = shape_view_rect(shape, transform);
    let from = transform.to_model(visible.min).x.floor() as i32;
    let to = (transform.to_model(visible.max).x.ceil() as i32).saturating_add(1);
    zorro_stripes(shape, from, to)
        .map(|x| {
            let left = transform.to_view(Pos2::new(x as f32, 0.0)).x;
            let right = transform.to_view(Pos2::new(x as f32 + 1.0, 0.0)).x;
            Rect::from_min_max(
                Pos2::new(left, full.min.y),
                Pos2::new(right.max(left + 1.0), full.max.y),
            )
        })
        .collect()
}

fn paint_origin_crosshair(painter: &Painter, shift: Vec2, transform: &ViewTransform) {
    let center = transform.to_view(Pos2::ZERO) + shift;
    let size = (8.0 * transform.zoom).trunc().max(4.0);
    let stroke = Stroke::new(1.0, CROSSHAIR_COLOR);
    painter.line_segment([center - Vec2::X * size, center + Vec2::X * size], stroke);
    painter.line_segment([center - Vec2::Y * size, center + Vec2::Y * size], stroke);
}
