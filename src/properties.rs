//! Properties editor: immediate-apply attribute edits
//!
//! The editor presents the selected element's mutable attributes as form
//! controls and applies each edit immediately through the session; there is
//! no separate apply step. Every applied patch captures exactly one history
//! snapshot. With no selection there are no controls.

use crate::document::{ElementKind, ElementStyle, FieldBinding};
use crate::geometry::{Point, Size};
use crate::session::EditorSession;

/// A form control the editor can show for an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyControl {
    Position,
    Dimensions,
    Content,
    Binding,
    FontSize,
    FontFamily,
    TextColor,
    TextAlign,
    FontWeight,
    FontStyle,
    BackgroundColor,
    BorderRadius,
    Padding,
}

/// Controls meaningful for a given element kind.
///
/// Text-only controls are hidden for images; the binding selector appears
/// only for fields.
pub fn controls_for(kind: ElementKind) -> &'static [PropertyControl] {
    use PropertyControl::*;
    match kind {
        ElementKind::Text => &[
            Position,
            Dimensions,
            Content,
            FontSize,
            FontFamily,
            TextColor,
            TextAlign,
            FontWeight,
            FontStyle,
            BackgroundColor,
            BorderRadius,
            Padding,
        ],
        ElementKind::Image => &[Position, Dimensions, Content, BorderRadius],
        ElementKind::Container => &[
            Position,
            Dimensions,
            Content,
            FontSize,
            FontFamily,
            TextColor,
            TextAlign,
            BackgroundColor,
            BorderRadius,
            Padding,
        ],
        ElementKind::Field => &[
            Position,
            Dimensions,
            Binding,
            FontSize,
            FontFamily,
            TextColor,
            TextAlign,
            FontWeight,
            FontStyle,
            BackgroundColor,
            BorderRadius,
            Padding,
        ],
    }
}

/// Controls for the session's current selection; empty when nothing is
/// selected.
pub fn controls_for_selection(session: &EditorSession) -> &'static [PropertyControl] {
    match session.selected_element() {
        Some(element) => controls_for(element.kind),
        None => &[],
    }
}

/// One immediate edit from the properties form. Unset fields are untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPatch {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub content: Option<String>,
    pub binding: Option<FieldBinding>,
    pub style: ElementStyle,
}

/// Apply a patch to the selected element and capture one history snapshot.
///
/// Position and size go through the same clamping as canvas gestures, so
/// manual entry cannot violate the bounds invariants. Returns false when
/// nothing is selected.
pub fn apply_patch(session: &mut EditorSession, patch: &PropertyPatch) -> bool {
    let Some(id) = session.selection().map(str::to_string) else {
        return false;
    };

    if patch.position.is_some() || patch.size.is_some() {
        let current = session
            .document()
            .element(&id)
            .map(|e| (e.position, e.size));
        if let Some((position, size)) = current {
            session.set_bounds(
                &id,
                patch.position.unwrap_or(position),
                patch.size.unwrap_or(size),
            );
        }
    }

    if let Some(element) = session.document_mut().element_mut(&id) {
        if let Some(content) = &patch.content {
            element.content = Some(content.clone());
        }
        if let Some(binding) = &patch.binding {
            if element.kind == ElementKind::Field {
                element.field_binding = Some(binding.clone());
            }
        }
        element.style = element.style.merge(&patch.style);
    }

    session.commit();
    true
}
