use crate::element::{Overlay, Shape};

/// Array name used for a drawing that was never loaded or saved.
pub const DEFAULT_ARRAY_NAME: &str = "card_custom";

/// What the user currently has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Shape(usize),
    Overlay,
}

/// Value copy of everything undo/redo restores.
///
/// The array name is deliberately not part of it: renaming happens on save and
/// is not an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    shapes: Vec<Shape>,
    overlay: Option<Overlay>,
    selection: Selection,
}

/// The drawing being edited: ordered shapes (later entries are on top), an
/// optional overlay, the array name and the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    shapes: Vec<Shape>,
    overlay: Option<Overlay>,
    name: String,
    selection: Selection,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_ARRAY_NAME)
    }
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            shapes: Vec::new(),
            overlay: None,
            name: name.into(),
            selection: Selection::None,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut Overlay> {
        self.overlay.as_mut()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Select something. Out-of-range shape indices and a missing overlay select nothing.
    pub fn select(&mut self, selection: Selection) {
        self.selection = match selection {
            Selection::Shape(index) if index < self.shapes.len() => selection,
            Selection::Overlay if self.overlay.is_some() => selection,
            _ => Selection::None,
        };
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self.selection {
            Selection::Shape(index) => Some(index),
            _ => None,
        }
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_index().and_then(|index| self.shapes.get(index))
    }

    pub fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        match self.selection {
            Selection::Shape(index) => self.shapes.get_mut(index),
            _ => None,
        }
    }

    /// Append a shape on top of the others and select it.
    pub fn insert(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        let index = self.shapes.len() - 1;
        self.selection = Selection::Shape(index);
        index
    }

    /// Remove a shape, keeping the selection pointing at the same shape when it survives.
    pub fn remove(&mut self, index: usize) -> Option<Shape> {
        if index >= self.shapes.len() {
            return None;
        }
        let removed = self.shapes.remove(index);
        if let Selection::Shape(selected) = self.selection {
            self.selection = match selected {
                s if s == index => Selection::None,
                s if s > index => Selection::Shape(s - 1),
                s => Selection::Shape(s),
            };
        }
        Some(removed)
    }

    /// Swap in a whole new drawing, as after loading a file.
    pub fn replace_all(&mut self, shapes: Vec<Shape>, name: impl Into<String>) {
        self.shapes = shapes;
        self.name = name.into();
        if matches!(self.selection, Selection::Shape(_)) {
            self.selection = Selection::None;
        }
    }

    pub fn set_overlay(&mut self, overlay: Option<Overlay>) {
        self.overlay = overlay;
        if self.overlay.is_none() && self.selection == Selection::Overlay {
            self.selection = Selection::None;
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            shapes: self.shapes.clone(),
            overlay: self.overlay.clone(),
            selection: self.selection,
        }
    }

    /// Replace shapes, overlay and selection in one step.
    pub fn restore(&mut self, snapshot: Snapshot) {
        let Snapshot {
            shapes,
            overlay,
            selection,
        } = snapshot;
        self.shapes = shapes;
        self.overlay = overlay;
        self.selection = selection;
    }
}
