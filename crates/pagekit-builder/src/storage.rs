//! Storage collaborators for persisting layouts.
//!
//! The core hands the storage collaborator the full ordered item list and
//! gets the full list back; there are no partial saves or merges. A failed
//! call must leave whatever the backend already held untouched — atomicity
//! inside the backend is the backend's problem.

use pagekit_core::StorageError;
use std::path::PathBuf;

use crate::layout::{LayoutFile, LayoutItem};

/// External storage collaborator for page layouts.
pub trait LayoutStore {
    /// Persists the full ordered item list, replacing any previous layout.
    fn save_layout(&mut self, items: &[LayoutItem]) -> Result<(), StorageError>;

    /// Fetches the full layout.
    fn load_layout(&self) -> Result<Vec<LayoutItem>, StorageError>;
}

/// JSON file-backed layout store.
///
/// Writes a versioned `LayoutFile` envelope. Repeated saves preserve the
/// original `created` timestamp and bump `modified`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    layout_name: String,
}

impl JsonFileStore {
    /// Creates a store writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            layout_name: "Untitled".to_string(),
        }
    }

    /// Sets the layout name written into the file metadata.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.layout_name = name.into();
        self
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LayoutStore for JsonFileStore {
    fn save_layout(&mut self, items: &[LayoutItem]) -> Result<(), StorageError> {
        let mut file = LayoutFile::new(&self.layout_name);
        if let Ok(existing) = LayoutFile::load_from_file(&self.path) {
            file.metadata.created = existing.metadata.created;
        }
        file.metadata.modified = chrono::Utc::now();
        file.items = items.to_vec();
        file.save_to_file(&self.path)
    }

    fn load_layout(&self) -> Result<Vec<LayoutItem>, StorageError> {
        Ok(LayoutFile::load_from_file(&self.path)?.items)
    }
}

/// In-memory layout store, mainly for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Vec<LayoutItem>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently stored items.
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }
}

impl LayoutStore for MemoryStore {
    fn save_layout(&mut self, items: &[LayoutItem]) -> Result<(), StorageError> {
        self.items = items.to_vec();
        Ok(())
    }

    fn load_layout(&self) -> Result<Vec<LayoutItem>, StorageError> {
        Ok(self.items.clone())
    }
}
