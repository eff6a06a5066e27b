use crate::app::EditorApp;
use crate::document::Selection;
use crate::geometry::transform::ZOOM_STEPS;
use crate::geometry::VideoMode;

pub fn menu_bar(app: &mut EditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Load…").clicked() {
                    app.open_load_dialog();
                    ui.close_menu();
                }
                if ui.button("Save…").clicked() {
                    app.open_save_dialog();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.add_enabled(app.history.can_undo(), egui::Button::new("Undo")).clicked() {
                    app.undo();
                    ui.close_menu();
                }
                if ui.add_enabled(app.history.can_redo(), egui::Button::new("Redo")).clicked() {
                    app.redo();
                    ui.close_menu();
                }
                ui.separator();
                let has_selection = app.document.selection() != Selection::None;
                if ui.add_enabled(has_selection, egui::Button::new("Delete")).clicked() {
                    app.delete_selection();
                    ui.close_menu();
                }
                let has_shape = app.document.selected_index().is_some();
                if ui.add_enabled(has_shape, egui::Button::new("Properties…")).clicked() {
                    app.open_selected_properties();
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                for zoom in ZOOM_STEPS {
                    let label = format!("{}%", (zoom * 100.0).round());
                    let current = (app.controller.transform().zoom - zoom).abs() < 1e-6;
                    if ui.radio(current, label).clicked() {
                        app.set_zoom(zoom);
                        ui.close_menu();
                    }
                }
                ui.separator();
                for mode in [VideoMode::Ntsc, VideoMode::Pal] {
                    if ui.radio_value(&mut app.video_mode, mode, mode.label()).clicked() {
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Overlay", |ui| {
                if ui.button("Load…").clicked() {
                    app.open_overlay_dialog();
                    ui.close_menu();
                }
                let has_overlay = app.document.overlay().is_some();
                if ui.add_enabled(has_overlay, egui::Button::new("Clear")).clicked() {
                    app.clear_overlay();
                    ui.close_menu();
                }
            });
        });
    });
}

pub fn status_bar(app: &mut EditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(app.status.as_str());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{}%", app.controller.transform().zoom_percent()));
                ui.separator();
                let selection = match app.document.selection() {
                    Selection::Shape(index) => match app.document.shape(index) {
                        Some(shape) => format!(
                            "#{} {} pen {} ({}, {}) {}x{}",
                            index,
                            shape.kind.name(),
                            shape.pen,
                            shape.x,
                            shape.y,
                            shape.w,
                            shape.h
                        ),
                        None => String::new(),
                    },
                    Selection::Overlay => "Overlay".to_owned(),
                    Selection::None => format!("{} shapes", app.document.len()),
                };
                ui.label(selection);
            });
        });
    });
}
