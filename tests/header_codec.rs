use artwork_editor::element::{Shape, ShapeKind};
use artwork_editor::header::{self, HeaderError};

#[test]
fn test_parse_demo_array() {
    let text = "const struct drawing demo[] = { {1,3,0,0,10,10}, {2,0,5,5,20,8}, // note\n };";
    let parsed = header::parse(text).unwrap();
    assert_eq!(parsed.name, "demo");
    assert_eq!(
        parsed.shapes,
        vec![
            Shape::new(ShapeKind::Filled, 3, 0, 0, 10, 10),
            Shape::new(ShapeKind::Outline, 0, 5, 5, 20, 8).with_comment("note"),
        ]
    );
}

#[test]
fn test_parse_one_entry_per_line_with_noise() {
    let text = r#"
#include "drawing.h"

/* generated */
static const struct drawing card_a4091[] = {
    { 1, 0,    0,    0,  402,  300 }, // board

    { 3, 1,  120,   80,  163,   10 },
    not an entry
    { 2, 2,   10,   10,   -4,   -6 }
};

const int unrelated[] = { 1, 2, 3 };
"#;
    let parsed = header::parse(text).unwrap();
    assert_eq!(parsed.name, "card_a4091");
    assert_eq!(parsed.shapes.len(), 3);
    assert_eq!(parsed.shapes[0].comment.as_deref(), Some("board"));
    assert_eq!(parsed.shapes[1].kind, ShapeKind::Zorro);
    assert_eq!(parsed.shapes[1].comment, None);
    // normalized on the way in
    assert_eq!(parsed.shapes[2], Shape::new(ShapeKind::Outline, 2, 6, 4, 4, 6));
}

#[test]
fn test_body_stops_at_matching_brace() {
    let text = "const struct drawing first[] = {\n { 1, 1, 1, 1, 1, 1 }\n};\n{ 2, 2, 2, 2, 2, 2 }\n";
    let parsed = header::parse(text).unwrap();
    assert_eq!(parsed.shapes.len(), 1);
}

#[test]
fn test_braces_in_comments_round_trip() {
    let shapes = vec![
        Shape::new(ShapeKind::Filled, 1, 0, 0, 10, 10).with_comment("see } below"),
        Shape::new(ShapeKind::Outline, 2, 5, 5, 20, 8).with_comment("{ nested } };"),
        Shape::new(ShapeKind::Zorro, 3, 40, 60, 163, 10).with_comment("/* not a block"),
        Shape::new(ShapeKind::Filled, 0, 1, 1, 1, 1),
    ];
    let parsed = header::parse(&header::serialize("foo", &shapes)).unwrap();
    assert_eq!(parsed.shapes, shapes);
}

#[test]
fn test_block_comment_inside_array() {
    let text = "const struct drawing a[] = {\n /* old: { 1, 0, 0, 0, 1, 1 } }; */\n { 2, 1, 3, 4, 5, 6 }\n};";
    let parsed = header::parse(text).unwrap();
    assert_eq!(parsed.shapes, vec![Shape::new(ShapeKind::Outline, 1, 3, 4, 5, 6)]);
}

#[test]
fn test_integer_limits_load_without_panicking() {
    let text = "const struct drawing a[] = {\n { 1, 0, -2147483648, 0, -1, 1 },\n { 2, 0, 2147483647, 2147483647, 0, 0 }\n};";
    let parsed = header::parse(text).unwrap();
    assert_eq!(parsed.shapes[0], Shape::new(ShapeKind::Filled, 0, i32::MIN, 0, 1, 1));
    assert_eq!(parsed.shapes[1].bounds().width(), 1);

    let reparsed = header::parse(&header::serialize("a", &parsed.shapes)).unwrap();
    assert_eq!(reparsed.shapes, parsed.shapes);
}

#[test]
fn test_missing_declaration() {
    let err = header::parse("int main(void) { return 0; }").unwrap_err();
    assert_eq!(err, HeaderError::MissingDeclaration);
    assert!(err.to_string().contains("no shapes found"));
}

#[test]
fn test_declaration_without_entries() {
    let err = header::parse("const struct drawing empty[] = {\n  // nothing yet\n};").unwrap_err();
    assert_eq!(
        err,
        HeaderError::NoEntries {
            name: "empty".to_owned()
        }
    );
    assert!(err.to_string().contains("no shapes found"));
}

#[test]
fn test_serialize_layout() {
    let shapes = vec![
        Shape::new(ShapeKind::Filled, 3, 0, 0, 10, 10),
        Shape::new(ShapeKind::Outline, 0, 5, 5, 20, 8).with_comment("note"),
    ];
    let text = header::serialize("demo", &shapes);
    assert_eq!(
        text,
        "static const struct drawing demo[] = {\n\
         \x20   { 1, 3,    0,    0,   10,   10 },\n\
         \x20   { 2, 0,    5,    5,   20,    8 } // note\n\
         };\n"
    );
}

#[test]
fn test_round_trip_mixed_comments() {
    let shapes = vec![
        Shape::new(ShapeKind::Filled, 0, 0, 0, 640, 400).with_comment("background"),
        Shape::new(ShapeKind::Zorro, 3, 120, 80, 163, 10),
        Shape::new(ShapeKind::Outline, 1, 7, 9, 1, 1).with_comment("chip, pin 1"),
        Shape::new(ShapeKind::Unknown(5), 9, 1, 2, 3, 4),
        Shape::new(ShapeKind::Filled, 2, 1000, 2000, 0, 0),
    ];
    let parsed = header::parse(&header::serialize("foo", &shapes)).unwrap();
    assert_eq!(parsed.name, "foo");
    assert_eq!(parsed.shapes, shapes);
}

#[test]
fn test_reserialize_is_stable() {
    let text = "const struct drawing demo[] = { {1,3,0,0,10,10}, {2,0,5,5,20,8}, // note\n };";
    let once = header::parse(text).unwrap();
    let written = header::serialize(&once.name, &once.shapes);
    let twice = header::parse(&written).unwrap();
    assert_eq!(header::serialize(&twice.name, &twice.shapes), written);
}
