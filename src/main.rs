#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use artwork_editor::EditorApp;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let initial_file = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "A409x Artwork Editor",
        options,
        Box::new(move |cc| Ok(Box::new(EditorApp::new(cc, initial_file)))),
    )
}
