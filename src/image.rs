use std::path::Path;

use egui::{ColorImage, Vec2};
use thiserror::Error;

/// Errors that can occur while loading an overlay image
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read image file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has no pixels")]
    Empty,
}

/// A decoded overlay image, ready to be uploaded as a texture.
pub struct LoadedImage {
    pub pixels: ColorImage,
    pub native_size: Vec2,
}

impl std::fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedImage")
            .field("native_size", &self.native_size)
            .finish_non_exhaustive()
    }
}

/// Check if a path looks like an image we can decode, based on its extension
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "bmp"))
}

pub fn load_image(path: &Path) -> Result<LoadedImage, ImageError> {
    let bytes = std::fs::read(path)?;
    log::info!("Processing image from path: {} ({} bytes)", path.display(), bytes.len());
    decode_image(&bytes)
}

pub fn decode_image(bytes: &[u8]) -> Result<LoadedImage, ImageError> {
    let img = image::load_from_memory(bytes)?;
    log::debug!("Successfully decoded image: {}x{}", img.width(), img.height());
    if img.width() == 0 || img.height() == 0 {
        return Err(ImageError::Empty);
    }

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = ColorImage::from_rgba_unmultiplied(size, rgba.as_flat_samples().as_slice());
    Ok(LoadedImage {
        pixels,
        native_size: Vec2::new(size[0] as f32, size[1] as f32),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions() {
        assert!(is_image_file(Path::new("board.PNG")));
        assert!(is_image_file(Path::new("/tmp/scan.jpeg")));
        assert!(!is_image_file(Path::new("card.h")));
        assert!(!is_image_file(Path::new("noext")));
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        assert!(matches!(decode_image(b"not an image"), Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = load_image(Path::new("/definitely/not/here.png"));
        assert!(matches!(result, Err(ImageError::Read(_))));
    }
}
