use thiserror::Error;

use crate::element::Shape;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("{field} must be an integer, got {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}

/// Validated field values coming out of the property dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeProperties {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub pen: i32,
    pub comment: Option<String>,
}

impl ShapeProperties {
    /// Overwrite the shape's editable fields. Position is floored at zero and
    /// size at one; an empty comment clears it.
    pub fn apply_to(&self, shape: &mut Shape) {
        shape.x = self.x.max(0);
        shape.y = self.y.max(0);
        shape.w = self.w.max(1);
        shape.h = self.h.max(1);
        shape.pen = self.pen;
        shape.comment = self
            .comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_owned);
        shape.normalize();
    }
}

/// Raw text state of the property dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyForm {
    pub x: String,
    pub y: String,
    pub w: String,
    pub h: String,
    pub pen: i32,
    pub comment: String,
}

impl PropertyForm {
    pub fn from_shape(shape: &Shape) -> Self {
        Self {
            x: shape.x.max(0).to_string(),
            y: shape.y.max(0).to_string(),
            w: shape.w.max(1).to_string(),
            h: shape.h.max(1).to_string(),
            pen: shape.pen,
            comment: shape.comment.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ShapeProperties, PropertyError> {
        Ok(ShapeProperties {
            x: parse_field("X", &self.x)?,
            y: parse_field("Y", &self.y)?,
            w: parse_field("Width", &self.w)?,
            h: parse_field("Height", &self.h)?,
            pen: self.pen,
            comment: Some(self.comment.trim().to_owned()).filter(|c| !c.is_empty()),
        })
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<i32, PropertyError> {
    value
        .trim()
        .parse()
        .map_err(|_| PropertyError::InvalidInteger {
            field,
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ShapeKind;

    #[test]
    fn test_form_roundtrips_shape_fields() {
        let shape = Shape::new(ShapeKind::Filled, 2, 4, 5, 6, 7).with_comment("chip");
        let props = PropertyForm::from_shape(&shape).validate().unwrap();
        assert_eq!(props.x, 4);
        assert_eq!(props.h, 7);
        assert_eq!(props.pen, 2);
        assert_eq!(props.comment.as_deref(), Some("chip"));
    }

    #[test]
    fn test_non_integer_is_rejected() {
        let shape = Shape::new(ShapeKind::Filled, 2, 4, 5, 6, 7);
        let mut form = PropertyForm::from_shape(&shape);
        form.w = "wide".into();
        assert_eq!(
            form.validate(),
            Err(PropertyError::InvalidInteger {
                field: "Width",
                value: "wide".into()
            })
        );
    }

    #[test]
    fn test_apply_clamps_and_clears_comment() {
        let mut shape = Shape::new(ShapeKind::Outline, 1, 4, 5, 6, 7).with_comment("old");
        let props = ShapeProperties {
            x: -3,
            y: 2,
            w: 0,
            h: 9,
            pen: 3,
            comment: Some("   ".into()),
        };
        props.apply_to(&mut shape);
        assert_eq!((shape.x, shape.y, shape.w, shape.h, shape.pen), (0, 2, 1, 9, 3));
        assert_eq!(shape.comment, None);
    }
}
