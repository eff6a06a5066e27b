#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod document;
pub mod element;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod header;
pub mod image;
pub mod panels;
pub mod properties;
pub mod renderer;
pub mod state;
pub mod tools;
pub mod widgets;

pub use app::EditorApp;
pub use command::{Command, CommandHistory};
pub use document::{Document, Selection};
pub use element::{Overlay, Shape, ShapeKind};
pub use error::EditorError;
pub use geometry::ViewTransform;
pub use renderer::Renderer;
pub use tools::{InteractionController, ToolKind};
