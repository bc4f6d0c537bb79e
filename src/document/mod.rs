//! Design documents
//!
//! A [`Document`] is the persisted unit: a display name, canvas dimensions,
//! and an ordered list of elements. The JSON wire shape is fixed and shared
//! with the other clients of the storage backend.

pub mod binding;
pub mod element;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use binding::{display_content, EventRecord, FieldBinding};
pub use element::{
    DesignElement, ElementKind, ElementStyle, FontStyle, FontWeight, ResolvedStyle, TextAlign,
};

use crate::geometry::{Size, MIN_ELEMENT_SIZE};

/// Default canvas dimensions for a new untitled document
pub const DEFAULT_CANVAS_SIZE: Size = Size {
    width: 400.0,
    height: 600.0,
};

/// Validation failures for a design document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Two elements share an id
    #[error("duplicate element id '{id}'")]
    DuplicateId { id: String },

    /// An element is smaller than the minimum size
    #[error("element '{id}' is smaller than the 20x20 minimum")]
    Undersized { id: String },

    /// An element extends past the canvas or has a negative position
    #[error("element '{id}' extends outside the canvas")]
    OutOfBounds { id: String },

    /// A field element has no binding
    #[error("field element '{id}' has no field binding")]
    MissingBinding { id: String },
}

/// The persisted design document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "design_name")]
    pub name: String,
    pub canvas_size: Size,
    pub elements: Vec<DesignElement>,
}

impl Document {
    /// Create an empty untitled document with the default canvas
    pub fn untitled() -> Self {
        Self {
            name: "Untitled Design".to_string(),
            canvas_size: DEFAULT_CANVAS_SIZE,
            elements: vec![],
        }
    }

    /// Create an empty named document with the given canvas
    pub fn new(name: impl Into<String>, canvas_size: Size) -> Self {
        Self {
            name: name.into(),
            canvas_size,
            elements: vec![],
        }
    }

    /// Look up an element by id
    pub fn element(&self, id: &str) -> Option<&DesignElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Look up an element by id, mutably
    pub fn element_mut(&mut self, id: &str) -> Option<&mut DesignElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Check every document invariant: unique ids, minimum sizes, canvas
    /// bounds, and bindings on field elements.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut seen = std::collections::HashSet::new();
        for element in &self.elements {
            if !seen.insert(element.id.as_str()) {
                return Err(DocumentError::DuplicateId {
                    id: element.id.clone(),
                });
            }
            if element.size.width < MIN_ELEMENT_SIZE || element.size.height < MIN_ELEMENT_SIZE {
                return Err(DocumentError::Undersized {
                    id: element.id.clone(),
                });
            }
            let bounds = element.bounds();
            if bounds.x < 0.0
                || bounds.y < 0.0
                || bounds.right() > self.canvas_size.width
                || bounds.bottom() > self.canvas_size.height
            {
                return Err(DocumentError::OutOfBounds {
                    id: element.id.clone(),
                });
            }
            if element.kind == ElementKind::Field && element.field_binding.is_none() {
                return Err(DocumentError::MissingBinding {
                    id: element.id.clone(),
                });
            }
        }
        Ok(())
    }
}
