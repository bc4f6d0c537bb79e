//! Linear undo/redo history over element-list snapshots
//!
//! The history is a sequence of full snapshots plus a current index. Undo and
//! redo are pure index moves over already-captured snapshots; committing
//! while not at the tip truncates the redo branch. Snapshots are owned deep
//! copies, so no history entry can alias the live element list.

use crate::document::DesignElement;

/// Maximum number of retained snapshots. Committing past the cap drops the
/// oldest entry and shifts the index down.
pub const MAX_HISTORY_DEPTH: usize = 100;

/// Undo/redo history for one editing session
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Vec<DesignElement>>,
    index: usize,
}

impl History {
    /// Start a history with the initial element list as its only entry
    pub fn new(initial: &[DesignElement]) -> Self {
        Self {
            entries: vec![initial.to_vec()],
            index: 0,
        }
    }

    /// Capture a snapshot of the element list.
    ///
    /// Truncates any entries after the current index, appends a deep copy,
    /// and advances the index to the new end. Identical consecutive content
    /// still pushes a new entry; there is no de-duplication.
    pub fn commit(&mut self, elements: &[DesignElement]) {
        self.entries.truncate(self.index + 1);
        self.entries.push(elements.to_vec());
        if self.entries.len() > MAX_HISTORY_DEPTH {
            self.entries.remove(0);
        } else {
            self.index += 1;
        }
    }

    /// Step back one entry. No-op at the oldest entry.
    pub fn undo(&mut self) -> Option<&[DesignElement]> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Step forward one entry. No-op at the newest entry.
    pub fn redo(&mut self) -> Option<&[DesignElement]> {
        if self.index + 1 == self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    /// The snapshot at the current index
    pub fn current(&self) -> &[DesignElement] {
        &self.entries[self.index]
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether a redo step is available
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of retained snapshots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A history always holds at least the initial snapshot
    pub fn is_empty(&self) -> bool {
        false
    }
}
