//! Canvas surface: pointer gestures over the element list
//!
//! The surface resolves pointer interactions into element mutations on the
//! session. Each element moves through `idle -> dragging -> idle` or
//! `idle -> resizing(handle) -> idle`; both paths always terminate in `idle`
//! with one committed snapshot. There is no cancel transition: releasing the
//! pointer anywhere finalizes the clamped geometry.

use crate::catalog::{instantiate, ElementTemplate};
use crate::geometry::{clamp_position, Point, Size, MIN_ELEMENT_SIZE};
use crate::session::EditorSession;

/// The four corner resize handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

/// Interaction state for the surface
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Idle,
    Dragging {
        id: String,
        /// Pointer offset from the element origin at grab time
        grab_offset: Point,
    },
    Resizing {
        id: String,
        handle: ResizeHandle,
    },
}

/// Outcome of a pointer-down on the surface
#[derive(Debug, Clone, PartialEq)]
pub enum ClickTarget {
    /// An element was hit and selected; the click must not fall through to
    /// the background deselection handler
    Element(String),
    /// Empty canvas: selection cleared
    Background,
}

/// Translates pointer gestures into session mutations
#[derive(Debug)]
pub struct CanvasSurface {
    interaction: Interaction,
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasSurface {
    pub fn new() -> Self {
        Self {
            interaction: Interaction::Idle,
        }
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Drop a catalog template at a screen coordinate.
    ///
    /// Converts to canvas space by subtracting the canvas's own screen
    /// origin, clamps so the new element lies fully inside the canvas,
    /// instantiates, selects, and commits once. Returns the new element id.
    pub fn drop_from_catalog(
        &mut self,
        session: &mut EditorSession,
        template: &ElementTemplate,
        screen_point: Point,
        canvas_origin: Point,
    ) -> String {
        let canvas = session.canvas_size();
        let local = Point::new(
            screen_point.x - canvas_origin.x,
            screen_point.y - canvas_origin.y,
        );
        let position = clamp_position(local, template.default_size, canvas);
        let element = instantiate(template, position, session.ids_mut());
        let id = element.id.clone();
        session.insert_element(element);
        session.select(&id);
        id
    }

    /// Pointer-down hit test. The topmost element under the pointer wins;
    /// hitting one selects it and consumes the click, hitting nothing clears
    /// the selection.
    pub fn pointer_down(&mut self, session: &mut EditorSession, point: Point) -> ClickTarget {
        let hit = session
            .elements()
            .iter()
            .rev()
            .find(|e| e.bounds().contains(point))
            .map(|e| e.id.clone());

        match hit {
            Some(id) => {
                session.select(&id);
                ClickTarget::Element(id)
            }
            None => {
                session.clear_selection();
                ClickTarget::Background
            }
        }
    }

    /// Begin dragging an element. Returns false if the element does not
    /// exist or another gesture is in flight.
    pub fn begin_drag(
        &mut self,
        session: &mut EditorSession,
        id: &str,
        pointer: Point,
    ) -> bool {
        if self.interaction != Interaction::Idle {
            return false;
        }
        let Some(element) = session.document().element(id) else {
            return false;
        };
        let grab_offset = Point::new(
            pointer.x - element.position.x,
            pointer.y - element.position.y,
        );
        session.select(id);
        self.interaction = Interaction::Dragging {
            id: id.to_string(),
            grab_offset,
        };
        true
    }

    /// Continuous position update during a drag. Clamped every step; no
    /// history snapshot until the gesture ends.
    pub fn drag_to(&mut self, session: &mut EditorSession, pointer: Point) {
        if let Interaction::Dragging { id, grab_offset } = &self.interaction {
            let target = Point::new(pointer.x - grab_offset.x, pointer.y - grab_offset.y);
            let id = id.clone();
            session.set_position(&id, target);
        }
    }

    /// Finish a drag: one commit, back to idle. Releasing off-canvas still
    /// finalizes the clamped position.
    pub fn end_drag(&mut self, session: &mut EditorSession) {
        if matches!(self.interaction, Interaction::Dragging { .. }) {
            self.interaction = Interaction::Idle;
            session.commit();
        }
    }

    /// Begin resizing from one of the four corner handles
    pub fn begin_resize(
        &mut self,
        session: &mut EditorSession,
        id: &str,
        handle: ResizeHandle,
    ) -> bool {
        if self.interaction != Interaction::Idle {
            return false;
        }
        if session.document().element(id).is_none() {
            return false;
        }
        session.select(id);
        self.interaction = Interaction::Resizing {
            id: id.to_string(),
            handle,
        };
        true
    }

    /// Continuous size update during a resize. The dragged corner follows
    /// the pointer while the opposite corner stays fixed; the minimum size
    /// and the canvas edges are enforced at every intermediate step.
    pub fn resize_to(&mut self, session: &mut EditorSession, pointer: Point) {
        let Interaction::Resizing { id, handle } = &self.interaction else {
            return;
        };
        let id = id.clone();
        let handle = *handle;

        let canvas = session.canvas_size();
        let Some(element) = session.document().element(&id) else {
            return;
        };
        let bounds = element.bounds();

        let (position, size) = match handle {
            ResizeHandle::SouthEast => {
                let width = pointer.x - bounds.x;
                let height = pointer.y - bounds.y;
                (Point::new(bounds.x, bounds.y), Size::new(width, height))
            }
            ResizeHandle::SouthWest => {
                // Right edge fixed
                let x = pointer
                    .x
                    .clamp(0.0, bounds.right() - MIN_ELEMENT_SIZE);
                let width = bounds.right() - x;
                let height = pointer.y - bounds.y;
                (Point::new(x, bounds.y), Size::new(width, height))
            }
            ResizeHandle::NorthEast => {
                // Bottom edge fixed
                let y = pointer
                    .y
                    .clamp(0.0, bounds.bottom() - MIN_ELEMENT_SIZE);
                let width = pointer.x - bounds.x;
                let height = bounds.bottom() - y;
                (Point::new(bounds.x, y), Size::new(width, height))
            }
            ResizeHandle::NorthWest => {
                // Bottom-right corner fixed
                let x = pointer
                    .x
                    .clamp(0.0, bounds.right() - MIN_ELEMENT_SIZE);
                let y = pointer
                    .y
                    .clamp(0.0, bounds.bottom() - MIN_ELEMENT_SIZE);
                let width = bounds.right() - x;
                let height = bounds.bottom() - y;
                (Point::new(x, y), Size::new(width, height))
            }
        };

        session.set_bounds(&id, position, size);
    }

    /// Finish a resize: one commit, back to idle
    pub fn end_resize(&mut self, session: &mut EditorSession) {
        if matches!(self.interaction, Interaction::Resizing { .. }) {
            self.interaction = Interaction::Idle;
            session.commit();
        }
    }

    /// Delete-key handler: removes the selected element and commits
    pub fn delete_pressed(&mut self, session: &mut EditorSession) -> bool {
        if self.interaction != Interaction::Idle {
            return false;
        }
        session.delete_selected()
    }
}
