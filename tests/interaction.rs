use artwork_editor::command::CommandHistory;
use artwork_editor::document::{Document, Selection};
use artwork_editor::element::{Overlay, Shape, ShapeKind};
use artwork_editor::geometry::ViewTransform;
use artwork_editor::tools::{CursorFeedback, DragMode, InteractionController, ToolKind};
use artwork_editor::widgets::resize_handle::Corner;
use egui::{Pos2, Rect, Vec2};

/// Controller whose view space equals model space.
fn setup(tool: ToolKind) -> (InteractionController, Document, CommandHistory) {
    let mut controller = InteractionController::new(ViewTransform::identity());
    controller.set_tool(tool);
    (controller, Document::default(), CommandHistory::new())
}

fn drag(
    controller: &mut InteractionController,
    document: &mut Document,
    history: &mut CommandHistory,
    path: &[(f32, f32)],
) {
    let points: Vec<Pos2> = path.iter().map(|&(x, y)| Pos2::new(x, y)).collect();
    let (first, rest) = points.split_first().unwrap();
    controller.pointer_down(*first, document, history);
    for point in rest {
        controller.pointer_drag(*point, document, history);
    }
    controller.pointer_up(*points.last().unwrap(), document, history);
}

#[test]
fn test_drag_creates_filled_shape_with_pen() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Filled);
    controller.set_pen(3);
    drag(&mut controller, &mut document, &mut history, &[(10.0, 10.0), (30.0, 25.0), (50.0, 40.0)]);

    assert_eq!(document.shapes(), &[Shape::new(ShapeKind::Filled, 3, 10, 10, 40, 30)]);
    assert_eq!(document.selection(), Selection::Shape(0));
    assert_eq!(history.undo_len(), 1);
    assert_eq!(controller.mode(), DragMode::Idle);
}

#[test]
fn test_drag_up_and_left_is_normalized() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Outline);
    controller.set_pen(1);
    drag(&mut controller, &mut document, &mut history, &[(50.0, 40.0), (10.0, 10.0)]);
    assert_eq!(document.shapes(), &[Shape::new(ShapeKind::Outline, 1, 10, 10, 40, 30)]);
}

#[test]
fn test_click_without_drag_creates_nothing() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Filled);
    drag(&mut controller, &mut document, &mut history, &[(10.0, 10.0)]);
    assert!(document.is_empty());
    assert!(!history.can_undo());
}

#[test]
fn test_creation_only_previews_until_release() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Filled);
    controller.pointer_down(Pos2::new(0.0, 0.0), &mut document, &mut history);
    controller.set_aspect_lock(true);
    controller.pointer_drag(Pos2::new(30.0, 10.0), &mut document, &mut history);

    assert_eq!(controller.mode(), DragMode::Creating);
    assert_eq!(
        controller.preview(),
        Some(Rect::from_min_max(Pos2::ZERO, Pos2::new(30.0, 30.0)))
    );
    assert!(document.is_empty());
    assert!(!history.can_undo());
}

#[test]
fn test_creation_respects_view_offset() {
    let mut controller = InteractionController::default();
    let mut document = Document::default();
    let mut history = CommandHistory::new();
    controller.set_tool(ToolKind::Filled);
    // default view puts the drawing origin at (103, 50)
    drag(&mut controller, &mut document, &mut history, &[(113.0, 60.0), (153.0, 90.0)]);
    assert_eq!(document.shapes()[0].x, 10);
    assert_eq!(document.shapes()[0].y, 10);
    assert_eq!(document.shapes()[0].w, 40);
    assert_eq!(document.shapes()[0].h, 30);
}

#[test]
fn test_zorro_click_drops_default_shape() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Zorro);
    controller.set_pen(1);
    controller.pointer_down(Pos2::new(200.0, 100.0), &mut document, &mut history);

    assert_eq!(controller.mode(), DragMode::Moving);
    assert_eq!(document.shapes(), &[Shape::new(ShapeKind::Zorro, 1, 119, 95, 163, 10)]);
    assert_eq!(history.undo_len(), 1);

    // the same gesture keeps moving it
    controller.pointer_drag(Pos2::new(210.0, 105.0), &mut document, &mut history);
    controller.pointer_up(Pos2::new(210.0, 105.0), &mut document, &mut history);
    assert_eq!((document.shapes()[0].x, document.shapes()[0].y), (129, 100));
    assert_eq!(history.undo_len(), 1);
}

#[test]
fn test_zorro_near_origin_is_clamped() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Zorro);
    controller.pointer_down(Pos2::new(5.0, 2.0), &mut document, &mut history);
    assert_eq!((document.shapes()[0].x, document.shapes()[0].y), (0, 0));
}

#[test]
fn test_topmost_shape_wins() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Select);
    document.insert(Shape::new(ShapeKind::Filled, 0, 0, 0, 50, 50));
    document.insert(Shape::new(ShapeKind::Filled, 1, 20, 20, 50, 50));
    document.clear_selection();

    drag(&mut controller, &mut document, &mut history, &[(30.0, 30.0)]);
    assert_eq!(document.selection(), Selection::Shape(1));

    drag(&mut controller, &mut document, &mut history, &[(10.0, 10.0)]);
    assert_eq!(document.selection(), Selection::Shape(0));

    // selecting is not an edit
    assert!(!history.can_undo());
}

#[test]
fn test_far_edge_is_inclusive() {
    let (controller, mut document, _) = setup(ToolKind::Select);
    document.insert(Shape::new(ShapeKind::Filled, 0, 0, 0, 10, 10));
    assert_eq!(controller.shape_at(Pos2::new(11.0, 11.0), &document), Some(0));
    assert_eq!(controller.shape_at(Pos2::new(11.5, 5.0), &document), None);
}

#[test]
fn test_click_on_empty_space_clears_selection() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Select);
    document.insert(Shape::new(ShapeKind::Filled, 0, 0, 0, 10, 10));
    drag(&mut controller, &mut document, &mut history, &[(300.0, 300.0), (320.0, 320.0)]);
    assert_eq!(document.selection(), Selection::None);
    assert_eq!(document.shapes()[0].x, 0);
    assert!(!history.can_undo());
}

#[test]
fn test_move_is_one_undo_step_and_clamps_at_zero() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Select);
    document.insert(Shape::new(ShapeKind::Filled, 0, 5, 5, 20, 20));
    let before = document.shapes().to_vec();

    drag(
        &mut controller,
        &mut document,
        &mut history,
        &[(15.0, 15.0), (10.0, 15.0), (-20.0, 18.0)],
    );
    assert_eq!((document.shapes()[0].x, document.shapes()[0].y), (0, 8));
    assert_eq!(history.undo_len(), 1);

    history.undo(&mut document);
    assert_eq!(document.shapes(), before.as_slice());
}

#[test]
fn test_move_at_zoom_uses_model_units() {
    let mut controller = InteractionController::new(ViewTransform::new(Vec2::ZERO, 2.0));
    let mut document = Document::default();
    let mut history = CommandHistory::new();
    document.insert(Shape::new(ShapeKind::Filled, 0, 10, 10, 20, 20));

    drag(&mut controller, &mut document, &mut history, &[(40.0, 40.0), (60.0, 50.0)]);
    assert_eq!((document.shapes()[0].x, document.shapes()[0].y), (20, 15));
}

#[test]
fn test_resize_from_corner_handle() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Select);
    document.insert(Shape::new(ShapeKind::Outline, 0, 0, 0, 20, 10));

    controller.pointer_down(Pos2::new(21.0, 11.0), &mut document, &mut history);
    assert_eq!(controller.mode(), DragMode::Resizing);
    assert_eq!(controller.resize_handle(), Some(Corner::BottomRight));

    controller.pointer_drag(Pos2::new(40.0, 25.0), &mut document, &mut history);
    controller.pointer_up(Pos2::new(40.0, 25.0), &mut document, &mut history);
    assert_eq!(document.shapes()[0], Shape::new(ShapeKind::Outline, 0, 0, 0, 40, 25));
    assert_eq!(history.undo_len(), 1);
}

#[test]
fn test_resize_with_aspect_lock_keeps_ratio() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Select);
    document.insert(Shape::new(ShapeKind::Filled, 0, 0, 0, 20, 10));

    controller.pointer_down(Pos2::new(21.0, 11.0), &mut document, &mut history);
    controller.set_aspect_lock(true);
    controller.pointer_drag(Pos2::new(100.0, 30.0), &mut document, &mut history);
    controller.pointer_up(Pos2::new(100.0, 30.0), &mut document, &mut history);

    let shape = &document.shapes()[0];
    assert_eq!((shape.x, shape.y, shape.w, shape.h), (0, 0, 100, 50));
}

#[test]
fn test_resize_past_anchor_clamps_low_corner() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Select);
    document.insert(Shape::new(ShapeKind::Filled, 0, 10, 10, 20, 20));

    // grab top-left, drag beyond the origin
    controller.pointer_down(Pos2::new(10.0, 10.0), &mut document, &mut history);
    assert_eq!(controller.resize_handle(), Some(Corner::TopLeft));
    controller.pointer_drag(Pos2::new(-5.0, -5.0), &mut document, &mut history);

    let shape = &document.shapes()[0];
    assert_eq!((shape.x, shape.y, shape.w, shape.h), (0, 0, 30, 30));
}

#[test]
fn test_resize_to_a_line_keeps_one_unit() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Select);
    document.insert(Shape::new(ShapeKind::Filled, 0, 10, 10, 20, 20));

    controller.pointer_down(Pos2::new(31.0, 31.0), &mut document, &mut history);
    controller.pointer_drag(Pos2::new(10.0, 10.0), &mut document, &mut history);
    let shape = &document.shapes()[0];
    assert_eq!((shape.w, shape.h), (1, 1));
}

/// History with one redoable step, leaving `shape` as the only shape.
fn with_redo(shape: Shape) -> (Document, CommandHistory) {
    let mut document = Document::default();
    let mut history = CommandHistory::new();
    document.insert(shape);
    history.record(&document);
    document.insert(Shape::new(ShapeKind::Outline, 0, 300, 300, 5, 5));
    history.undo(&mut document);
    (document, history)
}

#[test]
fn test_sub_unit_move_records_nothing() {
    let mut controller = InteractionController::new(ViewTransform::new(Vec2::ZERO, 5.0));
    let (mut document, mut history) = with_redo(Shape::new(ShapeKind::Filled, 0, 10, 10, 40, 40));

    drag(&mut controller, &mut document, &mut history, &[(150.0, 150.0), (152.0, 151.0)]);
    assert_eq!((document.shapes()[0].x, document.shapes()[0].y), (10, 10));
    assert!(history.can_redo());
    assert_eq!(history.undo_len(), 0);
}

#[test]
fn test_resize_to_same_rect_records_nothing() {
    let mut controller = InteractionController::new(ViewTransform::identity());
    let (mut document, mut history) = with_redo(Shape::new(ShapeKind::Filled, 0, 10, 10, 20, 20));

    controller.pointer_down(Pos2::new(31.0, 31.0), &mut document, &mut history);
    assert_eq!(controller.mode(), DragMode::Resizing);
    controller.pointer_drag(Pos2::new(30.2, 29.9), &mut document, &mut history);
    controller.pointer_up(Pos2::new(30.2, 29.9), &mut document, &mut history);

    let shape = &document.shapes()[0];
    assert_eq!((shape.x, shape.y, shape.w, shape.h), (10, 10, 20, 20));
    assert!(history.can_redo());
}

fn overlay_document() -> Document {
    let mut document = Document::default();
    let mut overlay = Overlay::new("board.png", Vec2::new(100.0, 50.0));
    overlay.x = 10.0;
    overlay.y = 10.0;
    document.set_overlay(Some(overlay));
    document
}

#[test]
fn test_overlay_move() {
    let (mut controller, _, mut history) = setup(ToolKind::Select);
    let mut document = overlay_document();

    controller.pointer_down(Pos2::new(50.0, 30.0), &mut document, &mut history);
    assert_eq!(controller.mode(), DragMode::OverlayMoving);
    assert_eq!(document.selection(), Selection::Overlay);

    controller.pointer_drag(Pos2::new(45.0, 35.0), &mut document, &mut history);
    controller.pointer_drag(Pos2::new(20.0, 35.0), &mut document, &mut history);
    controller.pointer_up(Pos2::new(20.0, 35.0), &mut document, &mut history);

    let overlay = document.overlay().unwrap();
    assert_eq!((overlay.x, overlay.y), (0.0, 15.0));
    assert_eq!(history.undo_len(), 1);
}

#[test]
fn test_overlay_resize_sets_explicit_size() {
    let (mut controller, _, mut history) = setup(ToolKind::Select);
    let mut document = overlay_document();

    controller.pointer_down(Pos2::new(110.0, 60.0), &mut document, &mut history);
    assert_eq!(controller.mode(), DragMode::OverlayResizing);
    controller.pointer_drag(Pos2::new(210.0, 110.0), &mut document, &mut history);
    controller.pointer_up(Pos2::new(210.0, 110.0), &mut document, &mut history);

    let overlay = document.overlay().unwrap();
    assert_eq!((overlay.x, overlay.y), (10.0, 10.0));
    assert_eq!((overlay.w, overlay.h), (Some(200.0), Some(100.0)));
}

#[test]
fn test_shapes_take_priority_over_overlay() {
    let (mut controller, _, mut history) = setup(ToolKind::Select);
    let mut document = overlay_document();
    document.insert(Shape::new(ShapeKind::Filled, 0, 40, 20, 20, 20));

    controller.pointer_down(Pos2::new(50.0, 30.0), &mut document, &mut history);
    assert_eq!(document.selection(), Selection::Shape(0));
    assert_eq!(controller.mode(), DragMode::Moving);
}

#[test]
fn test_cursor_feedback() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Select);
    document.insert(Shape::new(ShapeKind::Filled, 0, 10, 10, 20, 20));
    document.clear_selection();

    assert_eq!(controller.cursor(Pos2::new(15.0, 15.0), &document), CursorFeedback::Selectable);
    assert_eq!(controller.cursor(Pos2::new(200.0, 200.0), &document), CursorFeedback::Default);

    document.select(Selection::Shape(0));
    assert_eq!(controller.cursor(Pos2::new(20.0, 20.0), &document), CursorFeedback::Move);
    assert_eq!(
        controller.cursor(Pos2::new(31.0, 31.0), &document),
        CursorFeedback::Resize(Corner::BottomRight)
    );

    controller.set_tool(ToolKind::Outline);
    assert_eq!(controller.cursor(Pos2::new(200.0, 200.0), &document), CursorFeedback::Draw);
    // handles of the selection still win under a creation tool
    assert_eq!(
        controller.cursor(Pos2::new(10.0, 10.0), &document),
        CursorFeedback::Resize(Corner::TopLeft)
    );

    controller.set_tool(ToolKind::Select);
    controller.pointer_down(Pos2::new(20.0, 20.0), &mut document, &mut history);
    assert_eq!(controller.cursor(Pos2::new(500.0, 500.0), &document), CursorFeedback::Move);
}

#[test]
fn test_switching_tools_drops_gesture() {
    let (mut controller, mut document, mut history) = setup(ToolKind::Filled);
    controller.pointer_down(Pos2::new(0.0, 0.0), &mut document, &mut history);
    controller.pointer_drag(Pos2::new(20.0, 20.0), &mut document, &mut history);
    controller.set_tool(ToolKind::Select);
    assert_eq!(controller.mode(), DragMode::Idle);
    assert_eq!(controller.preview(), None);
    assert!(!controller.is_pressed());
}
