//! Editing session state
//!
//! One [`EditorSession`] is constructed per editing session and owns the
//! mutable state the sub-components share: the current document, the single
//! selection, the undo/redo history, and the id generator. It is torn down on
//! navigation; nothing here outlives the session or crosses into another one.

use crate::catalog::IdGenerator;
use crate::document::{DesignElement, Document};
use crate::geometry::{clamp_position, clamp_size, Point, Size};
use crate::history::History;
use crate::store::{DocumentStore, StoreError};

/// Exclusive owner of one editing session's mutable state
#[derive(Debug)]
pub struct EditorSession {
    document: Document,
    history: History,
    selection: Option<String>,
    ids: IdGenerator,
}

impl EditorSession {
    /// Start a session over an existing document
    pub fn new(document: Document) -> Self {
        let history = History::new(&document.elements);
        let mut ids = IdGenerator::new();
        ids.resume_after(&document.elements);
        Self {
            document,
            history,
            selection: None,
            ids,
        }
    }

    /// Start a session over an empty untitled document
    pub fn untitled() -> Self {
        Self::new(Document::untitled())
    }

    /// Load a document from the store and open a session over it
    pub fn open(store: &dyn DocumentStore, id: &str) -> Result<Self, StoreError> {
        Ok(Self::new(store.load(id)?))
    }

    /// Load a document, falling back to an empty untitled session when the
    /// load fails. The error comes back as a notice so the caller can surface
    /// it; the session is editable either way.
    pub fn open_or_untitled(store: &dyn DocumentStore, id: &str) -> (Self, Option<StoreError>) {
        match Self::open(store, id) {
            Ok(session) => (session, None),
            Err(err) => (Self::untitled(), Some(err)),
        }
    }

    /// Save the document. A failed save leaves the in-memory state untouched
    /// so the operator can retry.
    pub fn save(&self, store: &dyn DocumentStore, id: Option<&str>) -> Result<String, StoreError> {
        store.save(id, &self.document)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn elements(&self) -> &[DesignElement] {
        &self.document.elements
    }

    /// Canvas dimensions of the open document
    pub fn canvas_size(&self) -> Size {
        self.document.canvas_size
    }

    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// The id of the selected element, if any
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// The selected element itself, if any
    pub fn selected_element(&self) -> Option<&DesignElement> {
        let id = self.selection.as_deref()?;
        self.document.element(id)
    }

    /// Select an element by id. Returns false when no such element exists.
    pub fn select(&mut self, id: &str) -> bool {
        if self.document.element(id).is_some() {
            self.selection = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Append an element and capture one history snapshot
    pub fn insert_element(&mut self, element: DesignElement) {
        self.document.elements.push(element);
        self.commit();
    }

    /// Remove the selected element, clear the selection, and capture one
    /// history snapshot. No-op without a selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.take() else {
            return false;
        };
        let before = self.document.elements.len();
        self.document.elements.retain(|e| e.id != id);
        if self.document.elements.len() != before {
            self.commit();
            true
        } else {
            false
        }
    }

    /// Move an element, clamped so it stays inside the canvas. Does not
    /// commit; gestures commit once at their end.
    pub fn set_position(&mut self, id: &str, position: Point) {
        let canvas = self.document.canvas_size;
        if let Some(element) = self.document.element_mut(id) {
            element.position = clamp_position(position, element.size, canvas);
        }
    }

    /// Resize an element, clamped to the minimum size and the canvas edges.
    /// Does not commit; gestures commit once at their end.
    pub fn set_size(&mut self, id: &str, size: Size) {
        let canvas = self.document.canvas_size;
        if let Some(element) = self.document.element_mut(id) {
            element.size = clamp_size(size, element.position, canvas);
        }
    }

    /// Move and resize an element in one step. The size is clamped at the
    /// requested position and the position is then clamped against the new
    /// size, so an anchor-moving shrink never re-clamps against stale
    /// geometry. Does not commit.
    pub fn set_bounds(&mut self, id: &str, position: Point, size: Size) {
        let canvas = self.document.canvas_size;
        if let Some(element) = self.document.element_mut(id) {
            element.size = clamp_size(size, position, canvas);
            element.position = clamp_position(position, element.size, canvas);
        }
    }

    /// Capture a history snapshot of the current element list
    pub fn commit(&mut self) {
        self.history.commit(&self.document.elements);
    }

    /// Step the element list back one snapshot. Clears the selection if the
    /// selected element no longer exists afterwards.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.document.elements = snapshot.to_vec();
        self.drop_stale_selection();
        true
    }

    /// Step the element list forward one snapshot
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.document.elements = snapshot.to_vec();
        self.drop_stale_selection();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selection.as_deref() {
            if self.document.element(id).is_none() {
                self.selection = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{instantiate, Catalog};

    fn session_with_text_element() -> (EditorSession, String) {
        let mut session = EditorSession::untitled();
        let catalog = Catalog::standard();
        let template = catalog.by_label("Text").unwrap();
        let element = instantiate(template, Point::new(50.0, 50.0), session.ids_mut());
        let id = element.id.clone();
        session.insert_element(element);
        (session, id)
    }

    #[test]
    fn test_insert_then_undo_restores_empty_list() {
        let (mut session, _) = session_with_text_element();
        assert_eq!(session.elements().len(), 1);
        assert!(session.undo());
        assert!(session.elements().is_empty());
        assert!(session.redo());
        assert_eq!(session.elements().len(), 1);
    }

    #[test]
    fn test_delete_selected_commits_and_clears_selection() {
        let (mut session, id) = session_with_text_element();
        assert!(session.select(&id));
        assert!(session.delete_selected());
        assert!(session.elements().is_empty());
        assert_eq!(session.selection(), None);

        // The deletion is its own history entry
        assert!(session.undo());
        assert_eq!(session.elements().len(), 1);
    }

    #[test]
    fn test_undo_clears_selection_of_vanished_element() {
        let (mut session, id) = session_with_text_element();
        session.select(&id);
        session.undo();
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_select_unknown_id_fails() {
        let (mut session, _) = session_with_text_element();
        assert!(!session.select("el-999"));
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_set_position_clamps_to_canvas() {
        let (mut session, id) = session_with_text_element();
        session.set_position(&id, Point::new(5000.0, -20.0));
        let element = session.document().element(&id).unwrap();
        assert_eq!(element.position, Point::new(200.0, 0.0));
    }

    #[test]
    fn test_set_size_clamps_to_canvas_edge() {
        let (mut session, id) = session_with_text_element();
        session.set_size(&id, Size::new(5000.0, 10.0));
        let element = session.document().element(&id).unwrap();
        assert_eq!(element.size, Size::new(350.0, 20.0));
    }

    #[test]
    fn test_set_bounds_clamps_against_new_size() {
        let (mut session, id) = session_with_text_element();
        // A 100-wide element fits at x=300 on a 400-wide canvas even though
        // the current 200-wide one would not
        session.set_bounds(&id, Point::new(300.0, 50.0), Size::new(100.0, 40.0));
        let element = session.document().element(&id).unwrap();
        assert_eq!(element.position, Point::new(300.0, 50.0));
        assert_eq!(element.size, Size::new(100.0, 40.0));
    }

    #[test]
    fn test_failed_delete_without_selection() {
        let (mut session, _) = session_with_text_element();
        assert!(!session.delete_selected());
        assert_eq!(session.elements().len(), 1);
    }
}
