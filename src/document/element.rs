//! Design element model
//!
//! A [`DesignElement`] is one positioned, styled visual unit on the canvas.
//! The `kind` tag set is closed; rendering logic matches on it exhaustively
//! rather than inspecting fields at runtime.

use serde::{Deserialize, Serialize};

use crate::document::binding::FieldBinding;
use crate::geometry::{Point, Rect, Size};

/// The closed set of element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Container,
    Field,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// Optional presentation attributes for an element
///
/// Every field is optional; unset attributes fall back to the documented
/// defaults at render time via [`ElementStyle::resolve`]. Wire keys are
/// camelCase to match the persisted document shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
}

/// Style attributes with every default applied, ready for rendering
///
/// Both the live canvas and the read-only preview resolve styles through this
/// one path, which is what keeps their layouts identical.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    pub background_color: Option<String>,
    pub border_radius: f64,
    pub padding: f64,
    pub text_align: TextAlign,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
}

impl ElementStyle {
    /// Apply the documented render-time defaults to every unset attribute.
    ///
    /// Defaults: font size 16, family "Inter", color black, transparent
    /// background, radius 0, padding 8, align left, weight/style normal.
    pub fn resolve(&self) -> ResolvedStyle {
        ResolvedStyle {
            font_size: self.font_size.unwrap_or(16.0),
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| "Inter".to_string()),
            color: self.color.clone().unwrap_or_else(|| "#000000".to_string()),
            background_color: self.background_color.clone(),
            border_radius: self.border_radius.unwrap_or(0.0),
            padding: self.padding.unwrap_or(8.0),
            text_align: self.text_align.unwrap_or(TextAlign::Left),
            font_weight: self.font_weight.unwrap_or(FontWeight::Normal),
            font_style: self.font_style.unwrap_or(FontStyle::Normal),
        }
    }

    /// Merge another style set, with `other` taking precedence
    pub fn merge(&self, other: &ElementStyle) -> ElementStyle {
        ElementStyle {
            font_size: other.font_size.or(self.font_size),
            font_family: other.font_family.clone().or_else(|| self.font_family.clone()),
            color: other.color.clone().or_else(|| self.color.clone()),
            background_color: other
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            border_radius: other.border_radius.or(self.border_radius),
            padding: other.padding.or(self.padding),
            text_align: other.text_align.or(self.text_align),
            font_weight: other.font_weight.or(self.font_weight),
            font_style: other.font_style.or(self.font_style),
        }
    }
}

/// One positioned, styled visual unit on the canvas
///
/// Wire shape: `{ id, type, x, y, width, height, content?, fieldType?,
/// styles: { ... } }`. Position and size flatten into the top-level keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignElement {
    /// Unique within a document, assigned at creation, never changed
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(flatten)]
    pub position: Point,
    #[serde(flatten)]
    pub size: Size,
    /// Literal text; meaningful for `text` and `container` kinds,
    /// an image URL for `image`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Which record attribute a `field` element displays
    #[serde(rename = "fieldType", skip_serializing_if = "Option::is_none")]
    pub field_binding: Option<FieldBinding>,
    #[serde(rename = "styles", default)]
    pub style: ElementStyle,
}

impl DesignElement {
    /// The element's bounds as a rectangle in canvas space
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_defaults() {
        let resolved = ElementStyle::default().resolve();
        assert_eq!(resolved.font_size, 16.0);
        assert_eq!(resolved.font_family, "Inter");
        assert_eq!(resolved.color, "#000000");
        assert_eq!(resolved.background_color, None);
        assert_eq!(resolved.border_radius, 0.0);
        assert_eq!(resolved.padding, 8.0);
        assert_eq!(resolved.text_align, TextAlign::Left);
        assert_eq!(resolved.font_weight, FontWeight::Normal);
        assert_eq!(resolved.font_style, FontStyle::Normal);
    }

    #[test]
    fn test_style_resolve_keeps_set_values() {
        let style = ElementStyle {
            font_size: Some(24.0),
            color: Some("#8b1e3f".to_string()),
            text_align: Some(TextAlign::Center),
            ..Default::default()
        };
        let resolved = style.resolve();
        assert_eq!(resolved.font_size, 24.0);
        assert_eq!(resolved.color, "#8b1e3f");
        assert_eq!(resolved.text_align, TextAlign::Center);
        // Unset attributes still default
        assert_eq!(resolved.padding, 8.0);
    }

    #[test]
    fn test_style_merge_precedence() {
        let base = ElementStyle {
            font_size: Some(16.0),
            color: Some("#000000".to_string()),
            ..Default::default()
        };
        let patch = ElementStyle {
            font_size: Some(32.0),
            ..Default::default()
        };
        let merged = base.merge(&patch);
        assert_eq!(merged.font_size, Some(32.0));
        assert_eq!(merged.color, Some("#000000".to_string()));
    }

    #[test]
    fn test_element_bounds() {
        let element = DesignElement {
            id: "el-1".to_string(),
            kind: ElementKind::Text,
            position: Point::new(50.0, 50.0),
            size: Size::new(200.0, 40.0),
            content: Some("Your text here".to_string()),
            field_binding: None,
            style: ElementStyle::default(),
        };
        let bounds = element.bounds();
        assert_eq!(bounds.right(), 250.0);
        assert_eq!(bounds.bottom(), 90.0);
    }
}
