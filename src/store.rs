//! Document persistence
//!
//! The editor core needs three operations from its storage collaborator:
//! load, save, and list. [`DocumentStore`] captures that surface plus slug
//! resolution for the public share route; [`FsStore`] implements it over a
//! directory of `<id>.json` files. A failed save never touches in-memory
//! state; the operator just retries.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::Document;
use crate::geometry::Size;

/// Errors that can occur against the document store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document with this id
    #[error("design not found: {id}")]
    NotFound { id: String },

    /// No document matches this share slug
    #[error("no design matches '{slug}'")]
    SlugNotFound { slug: String },

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed design document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A row in the document list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub name: String,
    pub canvas_size: Size,
    pub element_count: usize,
}

/// The storage surface the editor core depends on
pub trait DocumentStore {
    /// Load a document by id
    fn load(&self, id: &str) -> Result<Document, StoreError>;

    /// Save a document, returning its id. With `None` a fresh id is derived
    /// from the document name; with `Some` the existing document is
    /// overwritten.
    fn save(&self, id: Option<&str>, document: &Document) -> Result<String, StoreError>;

    /// Summaries of all stored documents
    fn list(&self) -> Result<Vec<DocumentSummary>, StoreError>;

    /// Resolve a human-readable share slug to a document id
    fn resolve_slug(&self, slug: &str) -> Result<String, StoreError>;
}

/// File-backed store: one pretty-printed JSON file per document
#[derive(Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Open a store rooted at a directory, creating it if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    /// Derive an id from the document name, suffixing until it is free
    fn fresh_id(&self, name: &str) -> String {
        let base = slugify(name);
        if !self.path_for(&base).exists() {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.path_for(&candidate).exists() {
                return candidate;
            }
            n += 1;
        }
    }
}

impl DocumentStore for FsStore {
    fn load(&self, id: &str) -> Result<Document, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, id: Option<&str>, document: &Document) -> Result<String, StoreError> {
        let id = match id {
            Some(id) => id.to_string(),
            None => self.fresh_id(&document.name),
        };
        let json = serde_json::to_string_pretty(document)?;
        fs::write(self.path_for(&id), json)?;
        Ok(id)
    }

    fn list(&self) -> Result<Vec<DocumentSummary>, StoreError> {
        let mut summaries = vec![];
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            // Unreadable or foreign files are skipped, not fatal to listing
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            let Ok(document) = serde_json::from_str::<Document>(&content) else {
                continue;
            };
            summaries.push(DocumentSummary {
                id: id.to_string(),
                name: document.name,
                canvas_size: document.canvas_size,
                element_count: document.elements.len(),
            });
        }
        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }

    fn resolve_slug(&self, slug: &str) -> Result<String, StoreError> {
        for summary in self.list()? {
            if summary.id == slug || slugify(&summary.name) == slug {
                return Ok(summary.id);
            }
        }
        Err(StoreError::SlugNotFound {
            slug: slug.to_string(),
        })
    }
}

/// Lowercase, alphanumeric-and-dash form of a name, for ids and share links
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}
