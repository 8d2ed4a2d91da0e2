//! Filesystem store implementation.
//!
//! Provides [`FsStore`] for reading content files from a local source
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{ContentStore, SourceFile, StoreError, StoreErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// File extensions recognized as content.
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx", "markdown"];

/// Filesystem store implementation.
///
/// Scans a source directory recursively for content files. Hidden and
/// underscore-prefixed entries are skipped, as are common non-content
/// directories (`node_modules`, `target`, build output).
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use dx_store::{ContentStore, FsStore};
///
/// let store = FsStore::new(PathBuf::from("content"));
/// let files = store.scan()?;
/// ```
pub struct FsStore {
    /// Root directory for content storage.
    source_dir: PathBuf,
}

impl FsStore {
    /// Create a new filesystem store rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Validate that a path doesn't escape the source directory.
    ///
    /// Rejects paths containing parent directory components (`..`) to
    /// prevent path traversal (e.g., `../../../etc/passwd`).
    fn validate_path(path: &Path) -> Result<(), StoreError> {
        let has_parent_dir = path
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir));

        if has_parent_dir {
            return Err(StoreError::new(StoreErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Scan a directory recursively and collect content files.
    fn scan_directory(
        &self,
        dir_path: &Path,
        prefix: &str,
        files: &mut Vec<SourceFile>,
    ) -> Result<(), StoreError> {
        let Ok(entries) = fs::read_dir(dir_path) else {
            tracing::warn!(dir = %dir_path.display(), "skipping unreadable directory");
            return Ok(());
        };

        // Collect entries with cached file_type to avoid repeated stat calls in sort.
        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                let name = e.file_name().to_string_lossy().into_owned();
                (e, is_dir, name)
            })
            .collect();

        // Sort: directories first, then alphabetical by name
        entries.sort_by(|(_, a_is_dir, a_name), (_, b_is_dir, b_name)| {
            b_is_dir.cmp(a_is_dir).then_with(|| a_name.cmp(b_name))
        });

        for (entry, is_dir, name) in entries {
            // Skip hidden and underscore-prefixed files/dirs
            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            // Skip common non-content directories
            if is_dir
                && matches!(
                    name.as_str(),
                    "node_modules" | "target" | "dist" | "build" | "vendor" | "__pycache__"
                )
            {
                continue;
            }

            let path = entry.path();
            let rel = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };

            if is_dir {
                self.scan_directory(&path, &rel, files)?;
            } else if is_content_file(&path) {
                let text = fs::read_to_string(&path)
                    .map_err(|e| StoreError::io(e, Some(path.clone())).with_backend(BACKEND))?;
                files.push(SourceFile { path: rel, text });
            }
        }

        Ok(())
    }
}

/// Check whether a path carries a recognized content extension.
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| CONTENT_EXTENSIONS.contains(&e))
}

impl ContentStore for FsStore {
    fn scan(&self) -> Result<Vec<SourceFile>, StoreError> {
        if !self.source_dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        self.scan_directory(&self.source_dir, "", &mut files)?;
        Ok(files)
    }

    fn read(&self, path: &str) -> Result<String, StoreError> {
        Self::validate_path(Path::new(path))?;
        let full_path = self.source_dir.join(path);
        fs::read_to_string(&full_path)
            .map_err(|e| StoreError::io(e, Some(full_path.clone())).with_backend(BACKEND))
    }

    fn exists(&self, path: &str) -> bool {
        Self::validate_path(Path::new(path)).is_ok() && self.source_dir.join(path).is_file()
    }
}
