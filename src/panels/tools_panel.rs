use crate::app::EditorApp;
use crate::element::{pen_color, PEN_COUNT};
use crate::geometry::VideoMode;
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut EditorApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.controller.tool();
            for tool in ToolKind::ALL {
                let label = format!("{} {}", tool.shortcut(), tool.name());
                if ui.selectable_label(active == tool, label).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    app.set_tool(tool);
                }
            }
            ui.separator();

            ui.label("Pen");
            let mut pen = app.controller.pen();
            egui::ComboBox::from_id_salt("pen_combo")
                .selected_text(pen_label(pen))
                .show_ui(ui, |ui| {
                    for candidate in 0..PEN_COUNT {
                        ui.horizontal(|ui| {
                            pen_swatch(ui, candidate);
                            ui.selectable_value(&mut pen, candidate, pen_label(candidate));
                        });
                    }
                });
            if pen != app.controller.pen() {
                app.controller.set_pen(pen);
            }
            ui.separator();

            ui.label("Overlay");
            ui.horizontal(|ui| {
                if ui.button("Load…").clicked() {
                    app.open_overlay_dialog();
                }
                let has_overlay = app.document.overlay().is_some();
                if ui.add_enabled(has_overlay, egui::Button::new("Clear")).clicked() {
                    app.clear_overlay();
                }
            });
            ui.separator();

            ui.label("View");
            ui.horizontal(|ui| {
                if ui.button("−").clicked() {
                    app.zoom_out();
                }
                ui.label(format!("{}%", app.controller.transform().zoom_percent()));
                if ui.button("+").clicked() {
                    app.zoom_in();
                }
            });
            ui.horizontal(|ui| {
                for mode in [VideoMode::Ntsc, VideoMode::Pal] {
                    ui.radio_value(&mut app.video_mode, mode, mode.label());
                }
            });
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.history.can_undo();
                let can_redo = app.history.can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
            ui.label(format!(
                "Undo: {}  Redo: {}",
                app.history.undo_len(),
                app.history.redo_len()
            ));
        });
}

fn pen_label(pen: i32) -> String {
    format!("Pen {}", pen)
}

fn pen_swatch(ui: &mut egui::Ui, pen: i32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    if let Some(color) = pen_color(pen) {
        ui.painter().rect_filled(rect, 0.0, color);
    }
    ui.painter()
        .rect_stroke(rect, 0.0, egui::Stroke::new(1.0, egui::Color32::DARK_GRAY));
}
