use std::path::PathBuf;

use crate::element::PEN_COUNT;
use crate::properties::PropertyForm;

/// Modal dialogs. While one is open the canvas and shortcuts are inactive.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Open { path: String },
    Save { path: String, name: String },
    Overlay { path: String },
    Properties {
        index: usize,
        form: PropertyForm,
        error: Option<String>,
    },
    Message { title: String, text: String },
}

/// What the user confirmed. Cancelling a dialog yields `Close`.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    Close,
    Open(PathBuf),
    Save { path: PathBuf, name: String },
    Overlay(PathBuf),
    Properties { index: usize, form: PropertyForm },
}

/// Draw `dialog`; returns an action once the user closes it.
pub fn show(ctx: &egui::Context, dialog: &mut Dialog) -> Option<DialogAction> {
    let title = match dialog {
        Dialog::Open { .. } => "Load Header".to_owned(),
        Dialog::Save { .. } => "Save Header".to_owned(),
        Dialog::Overlay { .. } => "Load Overlay".to_owned(),
        Dialog::Properties { index, .. } => format!("Shape #{}", index),
        Dialog::Message { title, .. } => title.clone(),
    };

    let mut action = None;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            action = match dialog {
                Dialog::Open { path } => path_dialog(ui, "Header file:", path, DialogAction::Open),
                Dialog::Overlay { path } => path_dialog(ui, "Image file:", path, DialogAction::Overlay),
                Dialog::Save { path, name } => save_dialog(ui, path, name),
                Dialog::Properties { index, form, error } => properties_dialog(ui, *index, form, error),
                Dialog::Message { text, .. } => {
                    ui.label(text.as_str());
                    ui.button("OK").clicked().then_some(DialogAction::Close)
                }
            };
        });

    if action.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = Some(DialogAction::Close);
    }
    action
}

/// Text field for a path with Load/Cancel. Enter in the field confirms.
fn path_dialog(
    ui: &mut egui::Ui,
    label: &str,
    path: &mut String,
    confirm: fn(PathBuf) -> DialogAction,
) -> Option<DialogAction> {
    ui.label(label);
    let response = ui.add(egui::TextEdit::singleline(path).desired_width(360.0));
    let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    let mut action = None;
    ui.horizontal(|ui| {
        if (ui.button("Load").clicked() || entered) && !path.trim().is_empty() {
            action = Some(confirm(PathBuf::from(path.trim())));
        }
        if ui.button("Cancel").clicked() {
            action = Some(DialogAction::Close);
        }
    });
    action
}

fn save_dialog(ui: &mut egui::Ui, path: &mut String, name: &mut String) -> Option<DialogAction> {
    egui::Grid::new("save_dialog_grid").num_columns(2).show(ui, |ui| {
        ui.label("File:");
        ui.add(egui::TextEdit::singleline(path).desired_width(360.0));
        ui.end_row();
        ui.label("Array name:");
        ui.text_edit_singleline(name);
        ui.end_row();
    });

    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() && !path.trim().is_empty() {
            action = Some(DialogAction::Save {
                path: PathBuf::from(path.trim()),
                name: name.clone(),
            });
        }
        if ui.button("Cancel").clicked() {
            action = Some(DialogAction::Close);
        }
    });
    action
}

fn properties_dialog(
    ui: &mut egui::Ui,
    index: usize,
    form: &mut PropertyForm,
    error: &mut Option<String>,
) -> Option<DialogAction> {
    egui::Grid::new("properties_grid").num_columns(2).show(ui, |ui| {
        for (label, value) in [
            ("X", &mut form.x),
            ("Y", &mut form.y),
            ("Width", &mut form.w),
            ("Height", &mut form.h),
        ] {
            ui.label(label);
            ui.text_edit_singleline(value);
            ui.end_row();
        }

        ui.label("Pen");
        egui::ComboBox::from_id_salt("properties_pen")
            .selected_text(form.pen.to_string())
            .show_ui(ui, |ui| {
                for pen in 0..PEN_COUNT {
                    ui.selectable_value(&mut form.pen, pen, pen.to_string());
                }
            });
        ui.end_row();

        ui.label("Comment");
        ui.text_edit_singleline(&mut form.comment);
        ui.end_row();
    });

    if let Some(message) = error {
        ui.colored_label(egui::Color32::RED, message.as_str());
    }

    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("OK").clicked() {
            action = Some(DialogAction::Properties {
                index,
                form: form.clone(),
            });
        }
        if ui.button("Cancel").clicked() {
            action = Some(DialogAction::Close);
        }
    });
    action
}
