//! Invite Studio - invitation layout editing and preview rendering
//!
//! This library provides the core of a digital invitation designer: a
//! document model of positioned, styled elements, an editing session with
//! linear undo/redo, pointer-gesture handling for a drag-and-drop canvas,
//! and a read-only SVG preview renderer.
//!
//! # Example
//!
//! ```rust
//! use invite_studio::render_document;
//!
//! let json = r#"{
//!     "design_name": "Save the Date",
//!     "canvas_size": { "width": 400, "height": 600 },
//!     "elements": [
//!         { "id": "el-1", "type": "text", "x": 50, "y": 50,
//!           "width": 200, "height": 40,
//!           "content": "Emma & Jack", "styles": {} }
//!     ]
//! }"#;
//!
//! let svg = render_document(json).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Emma &amp; Jack"));
//! ```

pub mod canvas;
pub mod catalog;
pub mod document;
pub mod geometry;
pub mod history;
pub mod properties;
pub mod render;
pub mod session;
pub mod store;
pub mod theme;

pub use canvas::{CanvasSurface, ClickTarget, Interaction, ResizeHandle};
pub use catalog::{instantiate, Catalog, ElementTemplate, IdGenerator, TemplateGroup};
pub use document::{
    display_content, DesignElement, Document, DocumentError, ElementKind, ElementStyle,
    EventRecord, FieldBinding,
};
pub use geometry::{Point, Rect, Size, MIN_ELEMENT_SIZE};
pub use history::History;
pub use properties::{apply_patch, controls_for, PropertyControl, PropertyPatch};
pub use render::{render_preview, render_share, SvgConfig};
pub use session::EditorSession;
pub use store::{DocumentStore, DocumentSummary, FsStore, StoreError};
pub use theme::{Theme, ThemeError};

use thiserror::Error;

/// Errors that can occur in the document-to-preview pipeline
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The document JSON is malformed
    #[error("malformed design document: {0}")]
    Document(#[from] serde_json::Error),

    /// The document violates a structural invariant
    #[error(transparent)]
    Invalid(#[from] DocumentError),
}

/// Configuration for the complete preview pipeline
#[derive(Debug, Clone, Default)]
pub struct PreviewConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Theme for palette and font resolution
    pub theme: Theme,
    /// Live record; `None` renders design-time placeholders
    pub record: Option<EventRecord>,
}

impl PreviewConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, svg: SvgConfig) -> Self {
        self.svg = svg;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Supply a live record for field substitution
    pub fn with_record(mut self, record: EventRecord) -> Self {
        self.record = Some(record);
        self
    }
}

/// Render a design document JSON string to an SVG preview with defaults.
///
/// This is the main entry point for the library: parse, validate, render.
pub fn render_document(json: &str) -> Result<String, PreviewError> {
    render_document_with_config(json, PreviewConfig::default())
}

/// Render a design document JSON string with custom configuration
pub fn render_document_with_config(
    json: &str,
    config: PreviewConfig,
) -> Result<String, PreviewError> {
    let document: Document = serde_json::from_str(json)?;
    document.validate()?;
    Ok(render_preview(
        &document,
        config.record.as_ref(),
        &config.svg,
        &config.theme,
    ))
}
