use std::path::{Path, PathBuf};

use eframe::egui;

use crate::image::is_image_file;

/// What a file dropped onto the window should be used for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DroppedFile {
    /// A C header holding a drawing array
    Header(PathBuf),
    /// A raster to show as overlay
    Overlay(PathBuf),
}

impl DroppedFile {
    /// Classify by MIME type when the platform gives one, by extension otherwise.
    pub fn classify(path: &Path, mime: &str) -> Self {
        let is_image = if mime.is_empty() {
            is_image_file(path)
        } else {
            mime.starts_with("image/")
        };
        if is_image {
            DroppedFile::Overlay(path.to_path_buf())
        } else {
            DroppedFile::Header(path.to_path_buf())
        }
    }
}

/// Collects files dropped onto the window.
#[derive(Debug, Default)]
pub struct FileHandler;

impl FileHandler {
    pub fn new() -> Self {
        Self
    }

    /// Files dropped this frame. Only files with a filesystem path are
    /// usable, since both headers and overlays are referenced by path.
    pub fn take_dropped_files(&mut self, ctx: &egui::Context) -> Vec<DroppedFile> {
        ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| match &file.path {
                    Some(path) => Some(DroppedFile::classify(path, &file.mime)),
                    None => {
                        log::warn!("Dropped file has no accessible path: {}", file.name);
                        None
                    }
                })
                .collect()
        })
    }

    /// Darken the window and list the files while they are dragged over it.
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        let Some(text) = ctx.input(|i| {
            if i.raw.hovered_files.is_empty() {
                return None;
            }
            let mut text = "Dropping files:\n".to_owned();
            for file in &i.raw.hovered_files {
                match &file.path {
                    Some(path) => text += &format!("\n{}", path.display()),
                    None => text += "\n(Path not available)",
                }
            }
            Some(text)
        }) else {
            return;
        };

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}
