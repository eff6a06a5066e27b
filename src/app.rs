use std::path::{Path, PathBuf};

use crate::command::{Command, CommandHistory};
use crate::document::{Document, Selection};
use crate::element::{Overlay, Shape};
use crate::error::EditorError;
use crate::file_handler::{DroppedFile, FileHandler};
use crate::geometry::VideoMode;
use crate::header;
use crate::image::load_image;
use crate::panels::dialogs::{Dialog, DialogAction};
use crate::panels::{central_panel, dialogs, menu_bar, status_bar, tools_panel};
use crate::properties::PropertyForm;
use crate::renderer::Renderer;
use crate::state::Preferences;
use crate::tools::{InteractionController, ToolKind};

const APP_NAME: &str = "A409x Artwork Editor";

/// The editor window: one document, its history and the glue around them.
pub struct EditorApp {
    pub(crate) document: Document,
    pub(crate) history: CommandHistory,
    pub(crate) controller: InteractionController,
    pub(crate) renderer: Renderer,
    pub(crate) video_mode: VideoMode,
    pub(crate) dialog: Option<Dialog>,
    pub(crate) status: String,
    preferences: Preferences,
    preferences_path: Option<PathBuf>,
    file_handler: FileHandler,
    file_path: Option<PathBuf>,
    /// Shapes and name as last loaded or saved
    clean_state: (Vec<Shape>, String),
    last_title: String,
}

impl EditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, initial_file: Option<PathBuf>) -> Self {
        let preferences_path = match Preferences::default_path() {
            Ok(path) => Some(path),
            Err(err) => {
                log::warn!("Preferences will not be saved: {}", err);
                None
            }
        };
        let mut app = Self::with_context(cc.egui_ctx.clone(), preferences_path);
        if let Some(path) = initial_file {
            if let Err(err) = app.load_header(&path) {
                app.report(err);
            }
        }
        app
    }

    /// Editor state without a window. `preferences_path` of `None` keeps
    /// preferences in memory only.
    pub fn with_context(ctx: egui::Context, preferences_path: Option<PathBuf>) -> Self {
        let preferences = preferences_path
            .as_deref()
            .map(Preferences::load)
            .unwrap_or_default();
        let document = Document::default();
        let clean_state = (document.shapes().to_vec(), document.name().to_owned());
        Self {
            document,
            history: CommandHistory::new(),
            controller: InteractionController::default(),
            renderer: Renderer::new(ctx),
            video_mode: VideoMode::default(),
            dialog: None,
            status: "Ready".to_owned(),
            preferences,
            preferences_path,
            file_handler: FileHandler::new(),
            file_path: None,
            clean_state,
            last_title: String::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// True when the shapes or the array name differ from the file on disk.
    pub fn is_dirty(&self) -> bool {
        let (shapes, name) = &self.clean_state;
        self.document.shapes() != shapes.as_slice() || self.document.name() != name
    }

    /// `file [name]` plus a `*` while there are unsaved changes.
    pub fn title(&self) -> String {
        let file = self
            .file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_owned());
        let dirty = if self.is_dirty() { " *" } else { "" };
        format!("{} - {} [{}]{}", APP_NAME, file, self.document.name(), dirty)
    }

    fn mark_clean(&mut self) {
        self.clean_state = (self.document.shapes().to_vec(), self.document.name().to_owned());
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        log::info!("{}", self.status);
    }

    /// Show an error to the user. The document is never touched here.
    pub fn report(&mut self, err: EditorError) {
        log::error!("{}", err);
        self.status = err.to_string();
        self.dialog = Some(Dialog::Message {
            title: "Error".to_owned(),
            text: err.to_string(),
        });
    }

    /// Replace the document with the drawing array in `path`. History is
    /// cleared; on failure nothing changes.
    pub fn load_header(&mut self, path: &Path) -> Result<(), EditorError> {
        let text = std::fs::read_to_string(path).map_err(|err| EditorError::io(path, err))?;
        let parsed = header::parse(&text)?;

        self.document.replace_all(parsed.shapes, parsed.name);
        self.document.clear_selection();
        self.history.clear();
        self.file_path = Some(path.to_path_buf());
        self.mark_clean();
        self.preferences.remember_header(path);
        self.save_preferences();
        self.set_status(format!(
            "Loaded {} shapes from {} ({})",
            self.document.len(),
            path.display(),
            self.document.name()
        ));
        Ok(())
    }

    /// Write the document to `path` as an array called `name`. A blank name
    /// keeps the current one.
    pub fn save_header(&mut self, path: &Path, name: &str) -> Result<(), EditorError> {
        if self.document.is_empty() {
            return Err(EditorError::NothingToSave);
        }
        let name = name.trim();
        let name = if name.is_empty() { self.document.name().to_owned() } else { name.to_owned() };

        let text = header::serialize(&name, self.document.shapes());
        std::fs::write(path, text).map_err(|err| EditorError::io(path, err))?;

        self.document.set_name(name);
        self.file_path = Some(path.to_path_buf());
        self.mark_clean();
        self.preferences.remember_header(path);
        self.save_preferences();
        self.set_status(format!("Saved {} shapes to {}", self.document.len(), path.display()));
        Ok(())
    }

    /// Decode `path`, fit it inside the virtual screen and make it the
    /// selected overlay. A failed load leaves the document alone.
    pub fn load_overlay(&mut self, path: &Path) -> Result<(), EditorError> {
        let loaded = load_image(path)?;
        let image_path = path.display().to_string();
        let mut overlay = Overlay::new(image_path.clone(), loaded.native_size);
        overlay.fit_to_screen(self.video_mode.virtual_size());

        self.history.execute(Command::SetOverlay(overlay), &mut self.document)?;
        self.renderer.set_overlay_image(&image_path, loaded.pixels);
        self.preferences.remember_overlay(path);
        self.save_preferences();
        self.set_status(format!(
            "Overlay {} ({}x{})",
            path.display(),
            loaded.native_size.x,
            loaded.native_size.y
        ));
        Ok(())
    }

    /// Run a discrete edit through the history.
    pub fn execute(&mut self, command: Command) -> Result<(), EditorError> {
        let name = command.name();
        self.history.execute(command, &mut self.document)?;
        self.set_status(name);
        Ok(())
    }

    pub fn undo(&mut self) {
        if self.history.undo(&mut self.document) {
            self.set_status("Undo");
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo(&mut self.document) {
            self.set_status("Redo");
        }
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.controller.set_tool(tool);
        self.set_status(format!("Tool: {}", tool.name()));
    }

    pub fn zoom_in(&mut self) {
        if self.controller.transform_mut().zoom_in() {
            self.set_status(format!("Zoom {}%", self.controller.transform().zoom_percent()));
        }
    }

    pub fn zoom_out(&mut self) {
        if self.controller.transform_mut().zoom_out() {
            self.set_status(format!("Zoom {}%", self.controller.transform().zoom_percent()));
        }
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.controller.transform_mut().set_zoom(zoom);
        self.set_status(format!("Zoom {}%", self.controller.transform().zoom_percent()));
    }

    /// Open the property dialog for the shape at `index`.
    pub fn open_properties(&mut self, index: usize) {
        if let Some(form) = self.document.shape(index).map(PropertyForm::from_shape) {
            self.document.select(Selection::Shape(index));
            self.dialog = Some(Dialog::Properties {
                index,
                form,
                error: None,
            });
        }
    }

    pub fn open_selected_properties(&mut self) {
        match self.document.selected_index() {
            Some(index) => self.open_properties(index),
            None => self.set_status("Select a shape first"),
        }
    }

    pub fn open_load_dialog(&mut self) {
        let dir = self.preferences.header_dir();
        self.dialog = Some(Dialog::Open {
            path: dir.join("").display().to_string(),
        });
    }

    pub fn open_save_dialog(&mut self) {
        if self.document.is_empty() {
            self.report(EditorError::NothingToSave);
            return;
        }
        let path = match &self.file_path {
            Some(path) => path.clone(),
            None => self.preferences.save_dir(None).join("artwork.h"),
        };
        self.dialog = Some(Dialog::Save {
            path: path.display().to_string(),
            name: self.document.name().to_owned(),
        });
    }

    pub fn open_overlay_dialog(&mut self) {
        let dir = self.preferences.overlay_dir();
        self.dialog = Some(Dialog::Overlay {
            path: dir.join("").display().to_string(),
        });
    }

    pub fn clear_overlay(&mut self) {
        if self.document.overlay().is_none() {
            return;
        }
        if let Err(err) = self.execute(Command::ClearOverlay) {
            self.report(err);
        }
    }

    pub fn delete_selection(&mut self) {
        if self.document.selection() == Selection::None {
            self.set_status("Nothing selected");
            return;
        }
        if let Err(err) = self.execute(Command::DeleteSelection) {
            self.report(err);
        }
    }

    /// Carry out what a dialog asked for.
    pub fn apply_dialog_action(&mut self, action: DialogAction) {
        let result = match action {
            DialogAction::Close => Ok(()),
            DialogAction::Open(path) => self.load_header(&path),
            DialogAction::Save { path, name } => self.save_header(&path, &name),
            DialogAction::Overlay(path) => self.load_overlay(&path),
            DialogAction::Properties { index, form } => match form.validate() {
                Ok(properties) => self.execute(Command::SetProperties { index, properties }),
                Err(err) => {
                    self.dialog = Some(Dialog::Properties {
                        index,
                        form,
                        error: Some(err.to_string()),
                    });
                    Ok(())
                }
            },
        };
        if let Err(err) = result {
            self.report(err);
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.file_handler.preview_files_being_dropped(ctx);
        for file in self.file_handler.take_dropped_files(ctx) {
            let result = match &file {
                DroppedFile::Header(path) => self.load_header(path),
                DroppedFile::Overlay(path) => self.load_overlay(path),
            };
            if let Err(err) = result {
                self.report(err);
            }
        }
    }

    /// Keyboard shortcuts. Ignored while typing into a field or while a
    /// dialog is open.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, Modifiers};

        let shift = ctx.input(|i| i.modifiers.shift);
        self.controller.set_aspect_lock(shift);

        if self.dialog.is_some() || ctx.wants_keyboard_input() {
            return;
        }

        let pressed = |modifiers: Modifiers, key: Key| ctx.input_mut(|i| i.consume_key(modifiers, key));

        if pressed(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z) || pressed(Modifiers::CTRL, Key::Y) {
            self.redo();
        } else if pressed(Modifiers::COMMAND, Key::Z) {
            self.undo();
        } else if pressed(Modifiers::COMMAND, Key::O) || pressed(Modifiers::COMMAND, Key::L) {
            self.open_load_dialog();
        } else if pressed(Modifiers::COMMAND, Key::S) {
            self.open_save_dialog();
        } else if pressed(Modifiers::COMMAND, Key::Plus) || pressed(Modifiers::COMMAND, Key::Equals) {
            self.zoom_in();
        } else if pressed(Modifiers::COMMAND, Key::Minus) {
            self.zoom_out();
        } else if pressed(Modifiers::COMMAND, Key::Num0) {
            self.set_zoom(1.0);
        } else if pressed(Modifiers::NONE, Key::Delete) || pressed(Modifiers::NONE, Key::Backspace) {
            self.delete_selection();
        } else if pressed(Modifiers::NONE, Key::E) {
            self.open_selected_properties();
        } else if pressed(Modifiers::NONE, Key::L) {
            self.open_load_dialog();
        } else if pressed(Modifiers::NONE, Key::S) {
            self.open_save_dialog();
        } else if pressed(Modifiers::NONE, Key::O) {
            self.open_overlay_dialog();
        } else if pressed(Modifiers::NONE, Key::C) {
            self.clear_overlay();
        } else {
            let keys = [Key::Num1, Key::Num2, Key::Num3, Key::Num4];
            for (key, tool) in keys.into_iter().zip(ToolKind::ALL) {
                if pressed(Modifiers::NONE, key) {
                    self.set_tool(tool);
                }
            }
        }
    }

    fn save_preferences(&self) {
        let Some(path) = &self.preferences_path else {
            return;
        };
        if let Err(err) = self.preferences.save(path) {
            log::warn!("Failed to save preferences to {}: {}", path.display(), err);
        }
    }
}

impl eframe::App for EditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.save_preferences();
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.handle_dropped_files(ctx);

        menu_bar(self, ctx);
        status_bar(self, ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);

        if let Some(dialog) = &mut self.dialog {
            if let Some(action) = dialogs::show(ctx, dialog) {
                self.dialog = None;
                self.apply_dialog_action(action);
            }
        }

        let title = self.title();
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }
}
