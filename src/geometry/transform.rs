use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Where the drawing origin sits inside the virtual screen.
pub const DRAWING_ORIGIN: Vec2 = Vec2::new(103.0, 50.0);

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 5.0;

/// Zoom presets offered by the view menu, in ascending order.
pub const ZOOM_STEPS: [f32; 7] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0, 3.0];

/// Maps between model space and view space for one coordinate system.
///
/// Shapes use [`DRAWING_ORIGIN`] as offset; the overlay lives in
/// virtual-screen space and uses the same zoom with no offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub offset: Vec2,
    pub zoom: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset: DRAWING_ORIGIN,
            zoom: 1.0,
        }
    }
}

impl ViewTransform {
    pub fn new(offset: Vec2, zoom: f32) -> Self {
        Self {
            offset,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// No offset, no scaling. Mostly useful in tests.
    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 1.0)
    }

    /// Same zoom, origin at the virtual screen corner.
    pub fn screen(&self) -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: self.zoom,
        }
    }

    pub fn to_view(&self, model: Pos2) -> Pos2 {
        super::to_view(model, self.offset, self.zoom)
    }

    pub fn to_model(&self, view: Pos2) -> Pos2 {
        super::to_model(view, self.offset, self.zoom)
    }

    /// A model-space delta expressed from a view-space delta.
    pub fn delta_to_model(&self, view_delta: Vec2) -> Vec2 {
        view_delta / self.zoom
    }

    pub fn rect_to_view(&self, rect: Rect) -> Rect {
        Rect::from_min_max(self.to_view(rect.min), self.to_view(rect.max))
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Step to the next larger preset. Returns false when already at the top.
    pub fn zoom_in(&mut self) -> bool {
        match ZOOM_STEPS.iter().find(|&&step| step - self.zoom > 1e-6) {
            Some(&step) => {
                self.set_zoom(step);
                true
            }
            None => false,
        }
    }

    /// Step to the next smaller preset. Returns false when already at the bottom.
    pub fn zoom_out(&mut self) -> bool {
        match ZOOM_STEPS.iter().rev().find(|&&step| self.zoom - step > 1e-6) {
            Some(&step) => {
                self.set_zoom(step);
                true
            }
            None => false,
        }
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}

/// The Amiga screen the drawing is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VideoMode {
    #[default]
    Ntsc,
    Pal,
}

impl VideoMode {
    pub fn virtual_size(&self) -> Vec2 {
        match self {
            VideoMode::Ntsc => Vec2::new(640.0, 400.0),
            VideoMode::Pal => Vec2::new(640.0, 512.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VideoMode::Ntsc => "NTSC",
            VideoMode::Pal => "PAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps() {
        let mut t = ViewTransform::default();
        assert!(t.zoom_in());
        assert_eq!(t.zoom, 1.25);
        assert!(t.zoom_out());
        assert!(t.zoom_out());
        assert_eq!(t.zoom, 0.75);

        t.set_zoom(3.0);
        assert!(!t.zoom_in());
        t.set_zoom(0.5);
        assert!(!t.zoom_out());
    }

    #[test]
    fn test_zoom_is_clamped() {
        let t = ViewTransform::new(Vec2::ZERO, 42.0);
        assert_eq!(t.zoom, MAX_ZOOM);
        let t = ViewTransform::new(Vec2::ZERO, 0.0);
        assert_eq!(t.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_screen_drops_offset() {
        let t = ViewTransform::new(DRAWING_ORIGIN, 2.0).screen();
        assert_eq!(t.to_view(Pos2::new(5.0, 5.0)), Pos2::new(10.0, 10.0));
    }

    #[test]
    fn test_video_modes() {
        assert_eq!(VideoMode::Ntsc.virtual_size(), Vec2::new(640.0, 400.0));
        assert_eq!(VideoMode::Pal.virtual_size(), Vec2::new(640.0, 512.0));
    }
}
