//! Library catalog of element templates
//!
//! The catalog is the static registry of templates offered to the operator,
//! grouped into basic shapes and data-bound fields. Instantiation is a pure
//! factory apart from id generation: template defaults merged with the drop
//! position.

use crate::document::{DesignElement, ElementKind, ElementStyle, FieldBinding};
use crate::geometry::{Point, Size};

/// Catalog grouping shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateGroup {
    /// Static text, images, containers
    Basic,
    /// One entry per recognized field binding
    Fields,
}

/// A template the operator can instantiate onto the canvas
#[derive(Debug, Clone)]
pub struct ElementTemplate {
    pub label: String,
    pub group: TemplateGroup,
    pub kind: ElementKind,
    pub default_size: Size,
    pub default_content: Option<String>,
    pub default_binding: Option<FieldBinding>,
    pub default_style: ElementStyle,
}

/// Assigns fresh element ids for one editing session
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce an id no existing element uses
    pub fn fresh(&mut self) -> String {
        self.next += 1;
        format!("el-{}", self.next)
    }

    /// Advance past ids already present in a loaded document, so fresh ids
    /// never collide with them.
    pub fn resume_after(&mut self, elements: &[DesignElement]) {
        for element in elements {
            if let Some(n) = element
                .id
                .strip_prefix("el-")
                .and_then(|s| s.parse::<u64>().ok())
            {
                self.next = self.next.max(n);
            }
        }
    }
}

/// The ordered, static list of templates
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<ElementTemplate>,
}

impl Catalog {
    /// The standard catalog: three basic templates followed by one field
    /// template per recognized binding.
    pub fn standard() -> Self {
        let mut templates = vec![
            ElementTemplate {
                label: "Text".to_string(),
                group: TemplateGroup::Basic,
                kind: ElementKind::Text,
                default_size: Size::new(200.0, 40.0),
                default_content: Some("Your text here".to_string()),
                default_binding: None,
                default_style: ElementStyle::default(),
            },
            ElementTemplate {
                label: "Image".to_string(),
                group: TemplateGroup::Basic,
                kind: ElementKind::Image,
                default_size: Size::new(150.0, 150.0),
                default_content: None,
                default_binding: None,
                default_style: ElementStyle::default(),
            },
            ElementTemplate {
                label: "Container".to_string(),
                group: TemplateGroup::Basic,
                kind: ElementKind::Container,
                default_size: Size::new(250.0, 150.0),
                default_content: None,
                default_binding: None,
                default_style: ElementStyle {
                    background_color: Some("#f3f4f6".to_string()),
                    border_radius: Some(8.0),
                    ..Default::default()
                },
            },
        ];

        for binding in FieldBinding::RECOGNIZED {
            templates.push(ElementTemplate {
                label: binding.label().to_string(),
                group: TemplateGroup::Fields,
                kind: ElementKind::Field,
                default_size: Size::new(200.0, 40.0),
                default_content: None,
                default_binding: Some(binding),
                default_style: ElementStyle::default(),
            });
        }

        Self { templates }
    }

    /// All templates in catalog order
    pub fn templates(&self) -> &[ElementTemplate] {
        &self.templates
    }

    /// Templates in one group, preserving order
    pub fn group(&self, group: TemplateGroup) -> impl Iterator<Item = &ElementTemplate> {
        self.templates.iter().filter(move |t| t.group == group)
    }

    /// Find a template by its label
    pub fn by_label(&self, label: &str) -> Option<&ElementTemplate> {
        self.templates.iter().find(|t| t.label == label)
    }
}

/// Instantiate a template at a position, assigning a fresh unique id.
///
/// No side effects beyond id generation; the caller clamps the position and
/// commits the result.
pub fn instantiate(
    template: &ElementTemplate,
    position: Point,
    ids: &mut IdGenerator,
) -> DesignElement {
    DesignElement {
        id: ids.fresh(),
        kind: template.kind,
        position,
        size: template.default_size,
        content: template.default_content.clone(),
        field_binding: template.default_binding.clone(),
        style: template.default_style.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_grouping() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.group(TemplateGroup::Basic).count(), 3);
        assert_eq!(
            catalog.group(TemplateGroup::Fields).count(),
            FieldBinding::RECOGNIZED.len()
        );
        // Basic group comes first
        assert_eq!(catalog.templates()[0].label, "Text");
    }

    #[test]
    fn test_instantiate_text_template() {
        let catalog = Catalog::standard();
        let template = catalog.by_label("Text").unwrap();
        let mut ids = IdGenerator::new();

        let element = instantiate(template, Point::new(50.0, 50.0), &mut ids);
        assert_eq!(element.position, Point::new(50.0, 50.0));
        assert_eq!(element.size, Size::new(200.0, 40.0));
        assert_eq!(element.content.as_deref(), Some("Your text here"));
        assert_eq!(element.kind, ElementKind::Text);
    }

    #[test]
    fn test_instantiate_assigns_unique_ids() {
        let catalog = Catalog::standard();
        let template = catalog.by_label("Text").unwrap();
        let mut ids = IdGenerator::new();

        let a = instantiate(template, Point::new(0.0, 0.0), &mut ids);
        let b = instantiate(template, Point::new(0.0, 0.0), &mut ids);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_field_template_carries_binding() {
        let catalog = Catalog::standard();
        let template = catalog.by_label("Wedding Date").unwrap();
        let mut ids = IdGenerator::new();

        let element = instantiate(template, Point::new(0.0, 0.0), &mut ids);
        assert_eq!(element.kind, ElementKind::Field);
        assert_eq!(element.field_binding, Some(FieldBinding::WeddingDate));
    }

    #[test]
    fn test_id_generator_resumes_after_loaded_ids() {
        let catalog = Catalog::standard();
        let template = catalog.by_label("Text").unwrap();
        let mut ids = IdGenerator::new();
        let existing = vec![
            instantiate(template, Point::new(0.0, 0.0), &mut ids),
            instantiate(template, Point::new(0.0, 0.0), &mut ids),
        ];

        let mut resumed = IdGenerator::new();
        resumed.resume_after(&existing);
        let fresh = resumed.fresh();
        assert!(!existing.iter().any(|e| e.id == fresh));
    }
}
