mod overlay;
mod shape;

pub use overlay::Overlay;
pub use shape::{pen_color, Shape, ShapeKind, PEN_COUNT, UNKNOWN_PEN_COLOR};

/// Size of a Zorro shape dropped by a single click, in model units.
pub const ZORRO_DEFAULT_WIDTH: i32 = 163;
pub const ZORRO_DEFAULT_HEIGHT: i32 = 10;

/// Distance between the left edges of two Zorro stripes, in model units.
pub const ZORRO_STRIPE_PITCH: i32 = 4;

/// Left edges of the 1-unit stripes a Zorro shape is drawn with, limited to
/// those in `from..to`.
pub fn zorro_stripes(shape: &Shape, from: i32, to: i32) -> impl Iterator<Item = i32> {
    let bounds = shape.bounds();
    let pitch = i64::from(ZORRO_STRIPE_PITCH);
    let start = i64::from(bounds.x1);
    let low = i64::from(from.max(bounds.x1));
    let high = i64::from(to.min(bounds.x2));
    let first = start + (low - start + pitch - 1).div_euclid(pitch) * pitch;
    (first..high.max(first))
        .step_by(ZORRO_STRIPE_PITCH as usize)
        .map(|x| x as i32)
}
