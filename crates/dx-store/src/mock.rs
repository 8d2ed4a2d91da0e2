//! In-memory store implementation for testing.
//!
//! Provides [`MemoryStore`] for unit testing without filesystem access.

use crate::store::{ContentStore, SourceFile, StoreError, StoreErrorKind};

/// In-memory store for testing.
///
/// Stores content files in memory in insertion order. Use the builder
/// methods to configure the store with test data.
///
/// # Example
///
/// ```ignore
/// use dx_store::{ContentStore, MemoryStore};
///
/// let store = MemoryStore::new()
///     .with_file("guide.md", "# User Guide\n\nContent.");
///
/// let files = store.scan().unwrap();
/// let text = store.read("guide.md").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Vec<SourceFile>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a content file with the given path and text.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.files.push(SourceFile {
            path: path.into(),
            text: text.into(),
        });
        self
    }
}

impl ContentStore for MemoryStore {
    fn scan(&self) -> Result<Vec<SourceFile>, StoreError> {
        Ok(self.files.clone())
    }

    fn read(&self, path: &str) -> Result<String, StoreError> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.text.clone())
            .ok_or_else(|| {
                StoreError::new(StoreErrorKind::NotFound)
                    .with_path(path)
                    .with_backend("Memory")
            })
    }

    fn exists(&self, path: &str) -> bool {
        self.files.iter().any(|f| f.path == path)
    }
}
