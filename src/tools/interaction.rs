use egui::{Pos2, Rect, Vec2};
use log::debug;

use super::{CursorFeedback, ToolKind};
use crate::command::CommandHistory;
use crate::document::{Document, Selection, Snapshot};
use crate::element::{Shape, ShapeKind, ZORRO_DEFAULT_HEIGHT, ZORRO_DEFAULT_WIDTH};
use crate::geometry::hit_testing::{overlay_contains, overlay_handle_at, shape_at, shape_handle_at};
use crate::geometry::{constrain_to_aspect, fixed_corner, ViewTransform};
use crate::widgets::resize_handle::Corner;

/// Pen selected when the editor starts.
pub const DEFAULT_PEN: i32 = 3;

/// What the current pointer gesture is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    Idle,
    Moving,
    Resizing,
    Creating,
    OverlayMoving,
    OverlayResizing,
}

/// Turns pointer-down/drag/up on the canvas into edits of a [`Document`].
///
/// All positions passed in are in view space. The document is mutated while
/// the pointer moves; exactly one snapshot is pushed to the history for each
/// gesture that actually changes something.
#[derive(Debug)]
pub struct InteractionController {
    tool: ToolKind,
    pen: i32,
    transform: ViewTransform,
    mode: DragMode,
    /// Where the pointer went down
    press_pos: Option<Pos2>,
    /// Pointer position of the previous drag event
    last_pos: Option<Pos2>,
    resize_handle: Option<Corner>,
    /// Model-space bounds of the target when the resize started
    resize_frame: Option<Rect>,
    /// View-space rectangle shown while creating
    preview: Option<Rect>,
    /// State at pointer-down, pushed once the gesture first mutates
    pending_snapshot: Option<Snapshot>,
    aspect_lock: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(ViewTransform::default())
    }
}

impl InteractionController {
    pub fn new(transform: ViewTransform) -> Self {
        Self {
            tool: ToolKind::Select,
            pen: DEFAULT_PEN,
            transform,
            mode: DragMode::Idle,
            press_pos: None,
            last_pos: None,
            resize_handle: None,
            resize_frame: None,
            preview: None,
            pending_snapshot: None,
            aspect_lock: false,
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Switch tools. Any gesture in flight is dropped.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tool != tool {
            debug!("Tool changed: {} -> {}", self.tool.name(), tool.name());
            self.tool = tool;
            self.reset_gesture();
        }
    }

    pub fn pen(&self) -> i32 {
        self.pen
    }

    pub fn set_pen(&mut self, pen: i32) {
        self.pen = pen;
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut ViewTransform {
        &mut self.transform
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// True while the pointer is held down on the canvas.
    pub fn is_pressed(&self) -> bool {
        self.press_pos.is_some()
    }

    pub fn resize_handle(&self) -> Option<Corner> {
        self.resize_handle
    }

    pub fn preview(&self) -> Option<Rect> {
        self.preview
    }

    pub fn aspect_lock(&self) -> bool {
        self.aspect_lock
    }

    /// Track the aspect-lock modifier. Sampled by whichever drag is active.
    pub fn set_aspect_lock(&mut self, held: bool) {
        self.aspect_lock = held;
    }

    /// Topmost shape under a view position.
    pub fn shape_at(&self, pos: Pos2, document: &Document) -> Option<usize> {
        shape_at(document.shapes(), pos, &self.transform)
    }

    pub fn pointer_down(&mut self, pos: Pos2, document: &mut Document, history: &mut CommandHistory) {
        self.reset_gesture();
        self.press_pos = Some(pos);
        self.last_pos = Some(pos);

        match self.tool {
            ToolKind::Select => self.begin_select(pos, document),
            ToolKind::Zorro => self.drop_zorro(pos, document, history),
            ToolKind::Filled | ToolKind::Outline => {
                self.mode = DragMode::Creating;
                self.preview = Some(Rect::from_two_pos(pos, pos));
            }
        }
        debug!("Pointer down at {:?}: {:?}", pos, self.mode);
    }

    pub fn pointer_drag(&mut self, pos: Pos2, document: &mut Document, history: &mut CommandHistory) {
        let Some(last) = self.last_pos else {
            return;
        };
        if pos == last {
            return;
        }

        match self.mode {
            DragMode::Idle => {}
            DragMode::Moving => self.drag_shape(pos - last, document, history),
            DragMode::Resizing => self.resize_shape(pos, document, history),
            DragMode::Creating => self.update_preview(pos),
            DragMode::OverlayMoving => self.drag_overlay(pos - last, document, history),
            DragMode::OverlayResizing => self.resize_overlay(pos, document, history),
        }
        self.last_pos = Some(pos);
    }

    /// Releasing the pointer always ends the gesture.
    pub fn pointer_up(&mut self, pos: Pos2, document: &mut Document, history: &mut CommandHistory) {
        if self.mode == DragMode::Creating {
            self.finish_create(pos, document, history);
        }
        debug!("Pointer up at {:?}, leaving {:?}", pos, self.mode);
        self.reset_gesture();
    }

    /// Abandon the gesture without finishing it, e.g. when the pointer is
    /// released outside the window. Edits already made stay.
    pub fn cancel(&mut self) {
        self.reset_gesture();
    }

    /// Cursor for the current state and hover position.
    pub fn cursor(&self, pos: Pos2, document: &Document) -> CursorFeedback {
        match self.mode {
            DragMode::Moving | DragMode::OverlayMoving => return CursorFeedback::Move,
            DragMode::Resizing | DragMode::OverlayResizing => {
                return CursorFeedback::Resize(self.resize_handle.unwrap_or(Corner::BottomRight));
            }
            DragMode::Creating => return CursorFeedback::Draw,
            DragMode::Idle => {}
        }

        // handles of the selection win regardless of tool
        let screen = self.transform.screen();
        let handle = match document.selection() {
            Selection::Shape(index) => document
                .shape(index)
                .and_then(|shape| shape_handle_at(shape, pos, &self.transform)),
            Selection::Overlay => document
                .overlay()
                .and_then(|overlay| overlay_handle_at(overlay, pos, &screen)),
            Selection::None => None,
        };
        if let Some(corner) = handle {
            return CursorFeedback::Resize(corner);
        }

        if self.tool != ToolKind::Select {
            return CursorFeedback::Draw;
        }

        if let Some(index) = self.shape_at(pos, document) {
            return if document.selection() == Selection::Shape(index) {
                CursorFeedback::Move
            } else {
                CursorFeedback::Selectable
            };
        }
        match document.overlay() {
            Some(overlay) if overlay_contains(overlay, pos, &screen) => {
                if document.selection() == Selection::Overlay {
                    CursorFeedback::Move
                } else {
                    CursorFeedback::Selectable
                }
            }
            _ => CursorFeedback::Default,
        }
    }

    fn begin_select(&mut self, pos: Pos2, document: &mut Document) {
        if let Some(index) = self.shape_at(pos, document) {
            document.select(Selection::Shape(index));
            let Some(shape) = document.shape(index) else {
                return;
            };
            match shape_handle_at(shape, pos, &self.transform) {
                Some(corner) => {
                    self.mode = DragMode::Resizing;
                    self.resize_handle = Some(corner);
                    self.resize_frame = Some(shape.bounds().to_rect());
                }
                None => self.mode = DragMode::Moving,
            }
            self.pending_snapshot = Some(document.snapshot());
            return;
        }

        let screen = self.transform.screen();
        let overlay_hit = document.overlay().and_then(|overlay| {
            match overlay_handle_at(overlay, pos, &screen) {
                Some(corner) => Some((DragMode::OverlayResizing, Some(corner), overlay.rect())),
                None if overlay_contains(overlay, pos, &screen) => {
                    Some((DragMode::OverlayMoving, None, overlay.rect()))
                }
                None => None,
            }
        });

        match overlay_hit {
            Some((mode, handle, frame)) => {
                document.select(Selection::Overlay);
                self.mode = mode;
                self.resize_handle = handle;
                self.resize_frame = handle.map(|_| frame);
                self.pending_snapshot = Some(document.snapshot());
            }
            None => document.clear_selection(),
        }
    }

    /// A Zorro click drops a default-sized shape centred on the pointer and
    /// keeps moving it for the rest of the gesture.
    fn drop_zorro(&mut self, pos: Pos2, document: &mut Document, history: &mut CommandHistory) {
        let center = self.transform.to_model(pos);
        let x = (center.x - (ZORRO_DEFAULT_WIDTH / 2) as f32).max(0.0) as i32;
        let y = (center.y - (ZORRO_DEFAULT_HEIGHT / 2) as f32).max(0.0) as i32;

        history.record(document);
        let shape = Shape::new(
            ShapeKind::Zorro,
            self.pen,
            x,
            y,
            ZORRO_DEFAULT_WIDTH,
            ZORRO_DEFAULT_HEIGHT,
        );
        let index = document.insert(shape.normalized());
        debug!("Dropped zorro #{} at ({}, {})", index, x, y);
        self.mode = DragMode::Moving;
    }

    fn commit_pending(&mut self, history: &mut CommandHistory) {
        if let Some(snapshot) = self.pending_snapshot.take() {
            history.push(snapshot);
        }
    }

    fn drag_shape(&mut self, view_delta: Vec2, document: &mut Document, history: &mut CommandHistory) {
        let Some(index) = document.selected_index() else {
            return;
        };
        let delta = self.transform.delta_to_model(view_delta);
        let Some(shape) = document.shape(index) else {
            return;
        };
        let x = ((shape.x as f32 + delta.x).round() as i32).max(0);
        let y = ((shape.y as f32 + delta.y).round() as i32).max(0);
        if (x, y) == (shape.x, shape.y) {
            return;
        }
        self.commit_pending(history);
        if let Some(shape) = document.shape_mut(index) {
            shape.x = x;
            shape.y = y;
        }
    }

    fn drag_overlay(&mut self, view_delta: Vec2, document: &mut Document, history: &mut CommandHistory) {
        let delta = self.transform.delta_to_model(view_delta);
        let Some(overlay) = document.overlay() else {
            return;
        };
        let x = (overlay.x + delta.x).max(0.0);
        let y = (overlay.y + delta.y).max(0.0);
        if (x, y) == (overlay.x, overlay.y) {
            return;
        }
        self.commit_pending(history);
        if let Some(overlay) = document.overlay_mut() {
            overlay.x = x;
            overlay.y = y;
        }
    }

    /// New rectangle spanned by the fixed corner of the starting frame and the
    /// pointer, with the low corner clamped at zero and at least one unit of size.
    fn resized_rect(&self, pointer: Pos2) -> Option<Rect> {
        let (handle, frame) = (self.resize_handle?, self.resize_frame?);
        let anchor = fixed_corner(frame, handle);
        let mut moving = pointer;
        if self.aspect_lock {
            let aspect = frame.width().max(1.0) / frame.height().max(1.0);
            moving = constrain_to_aspect(anchor, moving, aspect);
        }
        let low = anchor.min(moving).max(Pos2::ZERO);
        let high = anchor.max(moving);
        Some(Rect::from_min_size(
            low,
            Vec2::new((high.x - low.x).max(1.0), (high.y - low.y).max(1.0)),
        ))
    }

    fn resize_shape(&mut self, pos: Pos2, document: &mut Document, history: &mut CommandHistory) {
        let Some(index) = document.selected_index() else {
            return;
        };
        let Some(rect) = self.resized_rect(self.transform.to_model(pos)) else {
            return;
        };
        let Some(shape) = document.shape(index) else {
            return;
        };
        let resized = (
            rect.min.x.round() as i32,
            rect.min.y.round() as i32,
            rect.width().round() as i32,
            rect.height().round() as i32,
        );
        if resized == (shape.x, shape.y, shape.w, shape.h) {
            return;
        }
        self.commit_pending(history);
        if let Some(shape) = document.shape_mut(index) {
            (shape.x, shape.y, shape.w, shape.h) = resized;
        }
    }

    fn resize_overlay(&mut self, pos: Pos2, document: &mut Document, history: &mut CommandHistory) {
        let Some(rect) = self.resized_rect(self.transform.screen().to_model(pos)) else {
            return;
        };
        let resized = (rect.min.x, rect.min.y, Some(rect.width()), Some(rect.height()));
        let Some(overlay) = document.overlay() else {
            return;
        };
        if resized == (overlay.x, overlay.y, overlay.w, overlay.h) {
            return;
        }
        self.commit_pending(history);
        if let Some(overlay) = document.overlay_mut() {
            (overlay.x, overlay.y, overlay.w, overlay.h) = resized;
        }
    }

    fn update_preview(&mut self, pos: Pos2) {
        let Some(start) = self.press_pos else {
            return;
        };
        let mut end = pos;
        if self.aspect_lock {
            let delta = pos - start;
            let side = delta.x.abs().max(delta.y.abs());
            end = Pos2::new(
                start.x + side.copysign(delta.x),
                start.y + side.copysign(delta.y),
            );
        }
        self.preview = Some(Rect::from_two_pos(start, end));
    }

    fn finish_create(&mut self, pos: Pos2, document: &mut Document, history: &mut CommandHistory) {
        let (Some(start), Some(kind)) = (self.press_pos, self.tool.shape_kind()) else {
            return;
        };
        if start.round() == pos.round() {
            debug!("Click without drag, nothing created");
            return;
        }

        let a = self.transform.to_model(start);
        let b = self.transform.to_model(pos);
        let low = a.min(b).max(Pos2::ZERO);
        let high = a.max(b);
        let w = (high.x - low.x).max(1.0);
        let h = (high.y - low.y).max(1.0);

        history.record(document);
        let shape = Shape::new(
            kind,
            self.pen,
            low.x.round() as i32,
            low.y.round() as i32,
            w.round() as i32,
            h.round() as i32,
        );
        let index = document.insert(shape.normalized());
        debug!("Created {} shape #{}", kind.name(), index);
    }

    fn reset_gesture(&mut self) {
        self.mode = DragMode::Idle;
        self.press_pos = None;
        self.last_pos = None;
        self.resize_handle = None;
        self.resize_frame = None;
        self.preview = None;
        self.pending_snapshot = None;
    }
}
