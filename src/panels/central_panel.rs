use egui::{Pos2, Sense};

use crate::app::EditorApp;
use crate::renderer::Renderer;
use crate::tools::ToolKind;

pub fn central_panel(app: &mut EditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let zoom = app.controller.transform().zoom;
                let size = Renderer::canvas_size(app.video_mode, zoom).max(ui.available_size());
                let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
                let origin = response.rect.min;
                let to_view = |pos: Pos2| Pos2::ZERO + (pos - origin);

                // Handle input
                if app.dialog.is_none() {
                    let (pressed, down, released, pointer) = ui.input(|i| {
                        (
                            i.pointer.primary_pressed(),
                            i.pointer.primary_down(),
                            i.pointer.primary_released(),
                            i.pointer.interact_pos(),
                        )
                    });

                    if pressed && response.hovered() {
                        if let Some(pos) = pointer {
                            app.controller
                                .pointer_down(to_view(pos), &mut app.document, &mut app.history);
                        }
                    }
                    if app.controller.is_pressed() {
                        if let (true, Some(pos)) = (down, pointer) {
                            app.controller
                                .pointer_drag(to_view(pos), &mut app.document, &mut app.history);
                        }
                        if released || !down {
                            match pointer {
                                Some(pos) => app.controller.pointer_up(
                                    to_view(pos),
                                    &mut app.document,
                                    &mut app.history,
                                ),
                                None => app.controller.cancel(),
                            }
                        }
                    }

                    if response.double_clicked() && app.controller.tool() == ToolKind::Select {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if let Some(index) = app.controller.shape_at(to_view(pos), &app.document) {
                                app.open_properties(index);
                            }
                        }
                    }

                    if let Some(pos) = response.hover_pos() {
                        let feedback = app.controller.cursor(to_view(pos), &app.document);
                        ui.ctx().set_cursor_icon(feedback.cursor_icon());
                    }
                }

                // Render the canvas
                app.renderer
                    .render(&painter, origin, &app.document, &app.controller, app.video_mode);
            });
    });
}
