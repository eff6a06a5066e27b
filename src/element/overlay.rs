use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Reference raster shown on top of the drawing while editing.
///
/// Coordinates are in virtual-screen space and may be fractional. A missing
/// `w`/`h` means the image is shown at its native size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub image_path: String,
    pub x: f32,
    pub y: f32,
    pub w: Option<f32>,
    pub h: Option<f32>,
    /// Pixel size reported by the image loader.
    pub native_size: Vec2,
}

impl Overlay {
    pub fn new(image_path: impl Into<String>, native_size: Vec2) -> Self {
        Self {
            image_path: image_path.into(),
            x: 0.0,
            y: 0.0,
            w: None,
            h: None,
            native_size,
        }
    }

    /// Ordered bounds with absent dimensions resolved against `native_size`.
    pub fn bounds(&self, native_size: Vec2) -> Rect {
        let w = self.w.unwrap_or(native_size.x);
        let h = self.h.unwrap_or(native_size.y);
        Rect::from_two_pos(Pos2::new(self.x, self.y), Pos2::new(self.x + w, self.y + h))
    }

    /// Bounds against the image's own native size.
    pub fn rect(&self) -> Rect {
        self.bounds(self.native_size)
    }

    /// Place the overlay inside the virtual screen with a margin, shrinking
    /// (never enlarging) it to fit.
    pub fn fit_to_screen(&mut self, screen: Vec2) {
        let (ow, oh) = (self.native_size.x, self.native_size.y);
        if ow <= 0.0 || oh <= 0.0 {
            return;
        }
        let margin = (screen.x.min(screen.y) / 32.0).floor().max(12.0);
        let max_w = (screen.x - 2.0 * margin).max(1.0);
        let max_h = (screen.y - 2.0 * margin).max(1.0);
        let scale = (max_w / ow).min(max_h / oh).min(1.0);

        self.w = Some((ow * scale).trunc());
        self.h = Some((oh * scale).trunc());
        self.x = margin;
        self.y = margin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_uses_native_size_when_unset() {
        let mut overlay = Overlay::new("board.png", Vec2::new(200.0, 100.0));
        overlay.x = 5.5;
        overlay.y = 2.0;
        let r = overlay.rect();
        assert_eq!(r.min, Pos2::new(5.5, 2.0));
        assert_eq!(r.max, Pos2::new(205.5, 102.0));
    }

    #[test]
    fn test_bounds_normalizes_negative_size() {
        let mut overlay = Overlay::new("board.png", Vec2::new(200.0, 100.0));
        overlay.x = 50.0;
        overlay.y = 50.0;
        overlay.w = Some(-20.0);
        overlay.h = Some(10.0);
        let r = overlay.rect();
        assert_eq!(r.min, Pos2::new(30.0, 50.0));
        assert_eq!(r.max, Pos2::new(50.0, 60.0));
    }

    #[test]
    fn test_fit_to_screen_shrinks_large_images() {
        let mut overlay = Overlay::new("board.png", Vec2::new(1232.0, 752.0));
        overlay.fit_to_screen(Vec2::new(640.0, 400.0));
        assert_eq!((overlay.x, overlay.y), (12.0, 12.0));
        assert_eq!(overlay.w, Some(616.0));
        assert_eq!(overlay.h, Some(376.0));
    }

    #[test]
    fn test_fit_to_screen_keeps_small_images() {
        let mut overlay = Overlay::new("chip.png", Vec2::new(40.0, 30.0));
        overlay.fit_to_screen(Vec2::new(640.0, 512.0));
        assert_eq!(overlay.w, Some(40.0));
        assert_eq!(overlay.h, Some(30.0));
        assert_eq!(overlay.x, 16.0);
    }
}
