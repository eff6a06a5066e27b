//! Reading and writing `struct drawing` arrays in C header text.
//!
//! ```text
//! static const struct drawing card_custom[] = {
//!     { 1, 3,    0,    0,  640,  400 },
//!     { 3, 1,  120,   80,  163,   10 } // zorro slot
//! };
//! ```

use thiserror::Error;

use crate::element::{Shape, ShapeKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("no shapes found: no `const struct drawing <name>[] = {{` declaration")]
    MissingDeclaration,
    #[error("no shapes found in `{name}`: expected entries like {{ type, pen, x, y, w, h }}")]
    NoEntries { name: String },
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub name: String,
    pub shapes: Vec<Shape>,
}

/// Parse the first drawing array in `text`. Entry lines that don't look like
/// six-integer records are skipped; every shape comes back normalized.
pub fn parse(text: &str) -> Result<ParsedHeader, HeaderError> {
    let (name, body_start) = find_declaration(text).ok_or(HeaderError::MissingDeclaration)?;
    let body = array_body(&text[body_start..]);

    let shapes: Vec<Shape> = body.lines().flat_map(parse_entry_line).collect();
    if shapes.is_empty() {
        log::warn!("Drawing array `{}` has no entries", name);
        return Err(HeaderError::NoEntries { name });
    }
    log::info!("Parsed {} shapes from `{}`", shapes.len(), name);
    Ok(ParsedHeader { name, shapes })
}

/// Print `shapes` as a drawing array called `name`.
pub fn serialize(name: &str, shapes: &[Shape]) -> String {
    let mut lines = Vec::with_capacity(shapes.len() + 2);
    lines.push(format!("static const struct drawing {}[] = {{", name));
    for (i, shape) in shapes.iter().enumerate() {
        let mut entry = format!(
            "    {{ {}, {}, {:4}, {:4}, {:4}, {:4} }}",
            shape.kind.code(),
            shape.pen,
            shape.x,
            shape.y,
            shape.w,
            shape.h
        );
        if i + 1 < shapes.len() {
            entry.push(',');
        }
        if let Some(comment) = &shape.comment {
            entry.push_str(" // ");
            entry.push_str(comment);
        }
        lines.push(entry);
    }
    lines.push("};\n".to_owned());
    lines.join("\n")
}

/// Small cursor over the source text.
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    /// A keyword must not run straight into more identifier characters.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let start = self.pos;
        if self.eat(keyword) && !self.rest().starts_with(is_ident_char) {
            return true;
        }
        self.pos = start;
        false
    }

    fn identifier(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let rest = self.rest();
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
            return None;
        }
        let len = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
        self.pos += len;
        Some(&rest[..len])
    }

    fn integer(&mut self) -> Option<i32> {
        self.skip_ws();
        let rest = self.rest();
        let sign = usize::from(rest.starts_with(['+', '-']));
        let digits = rest[sign..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len() - sign);
        if digits == 0 {
            return None;
        }
        let value = rest[..sign + digits].parse().ok()?;
        self.pos += sign + digits;
        Some(value)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Find `[static] const struct drawing <name>[] = {` and return the name and
/// the byte offset just past the opening brace.
fn find_declaration(text: &str) -> Option<(String, usize)> {
    let mut search_from = 0;
    while let Some(found) = text[search_from..].find("const") {
        let start = search_from + found;
        search_from = start + "const".len();

        let preceded_by_ident = text[..start].chars().next_back().is_some_and(is_ident_char);
        if preceded_by_ident {
            continue;
        }

        let mut scanner = Scanner::new(text);
        scanner.pos = start;
        if !(scanner.eat_keyword("const")
            && scanner.eat_keyword("struct")
            && scanner.eat_keyword("drawing"))
        {
            continue;
        }
        let Some(name) = scanner.identifier() else {
            continue;
        };
        if scanner.eat("[") && scanner.eat("]") && scanner.eat("=") && scanner.eat("{") {
            return Some((name.to_owned(), scanner.pos));
        }
    }
    None
}

/// Text between an opening brace (already consumed) and its matching closing
/// brace. Entries are brace-delimited themselves, so depth has to be tracked.
/// Braces inside comments and literals do not count. An unterminated array
/// yields the rest of the text.
fn array_body(after_open: &str) -> &str {
    let bytes = after_open.as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = after_open[i..].find('\n').map_or(bytes.len(), |n| i + n);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = after_open[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |n| i + 2 + n + 2);
                continue;
            }
            b'"' | b'\'' => {
                i = skip_literal(bytes, i);
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return &after_open[..i];
                }
            }
            _ => {}
        }
        i += 1;
    }
    after_open
}

/// Index just past the string or character literal opening at `start`. An
/// unterminated literal stops at the end of its line.
fn skip_literal(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// One `{ t, p, x, y, w, h }` record.
fn parse_record(scanner: &mut Scanner<'_>) -> Option<Shape> {
    if !scanner.eat("{") {
        return None;
    }
    let mut fields = [0i32; 6];
    for (i, field) in fields.iter_mut().enumerate() {
        if i > 0 && !scanner.eat(",") {
            return None;
        }
        *field = scanner.integer()?;
    }
    if !scanner.eat("}") {
        return None;
    }
    let [kind, pen, x, y, w, h] = fields;
    Some(Shape::new(ShapeKind::from_code(kind), pen, x, y, w, h))
}

/// All records on one line. A trailing `// comment` belongs to the last record
/// on the line. Lines with anything else on them yield nothing.
fn parse_entry_line(line: &str) -> Vec<Shape> {
    let mut scanner = Scanner::new(line.trim());
    let mut shapes = Vec::new();

    while let Some(shape) = parse_record(&mut scanner) {
        shapes.push(shape);
        scanner.eat(",");
        scanner.skip_ws();
        if !scanner.rest().starts_with('{') {
            break;
        }
    }
    if shapes.is_empty() {
        return shapes;
    }

    scanner.skip_ws();
    let rest = scanner.rest();
    if let Some(comment) = rest.strip_prefix("//") {
        let comment = comment.trim();
        if let Some(last) = shapes.last_mut() {
            last.comment = (!comment.is_empty()).then(|| comment.to_owned());
        }
    } else if !rest.is_empty() {
        return Vec::new();
    }

    for shape in &mut shapes {
        shape.normalize();
    }
    shapes
}
