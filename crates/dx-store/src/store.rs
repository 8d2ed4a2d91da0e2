//! Store trait and error types.
//!
//! Provides the core [`ContentStore`] trait for abstracting content
//! discovery and retrieval, along with [`StoreError`] for unified error
//! handling across backends.
//!
//! # Path Convention
//!
//! All path parameters are **content-relative paths** with forward
//! slashes, never absolute filesystem paths:
//! - `"guide.md"` - file at the content root
//! - `"guides/setup.md"` - nested file
//!
//! Store implementations handle the mapping to their internal layout.

use std::path::PathBuf;

/// A raw content file yielded by a store scan.
///
/// Contains the content-relative path and the full file text. All
/// metadata derivation (frontmatter, titles, ordering) happens
/// downstream; the store only moves bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Content-relative path with forward slashes (e.g., "guides/setup.md").
    pub path: String,
    /// Full file text, unparsed.
    pub text: String,
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path or identifier.
    InvalidPath,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Operation timed out.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Retry guidance.
#[derive(Debug, PartialEq, Eq, Default)]
pub enum ErrorStatus {
    /// Don't retry (config error, not found, invalid path).
    #[default]
    Permanent,
    /// Retry immediately (timeout, connection reset).
    Temporary,
    /// Retry with backoff (service unavailable).
    Persistent,
}

/// Store error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StoreError {
    kind: StoreErrorKind,
    status: ErrorStatus,
    path: Option<PathBuf>,
    backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new store error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            status: ErrorStatus::Permanent,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set retry status.
    #[must_use]
    pub fn with_status(mut self, status: ErrorStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> &StoreErrorKind {
        &self.kind
    }

    /// Retry guidance.
    #[must_use]
    pub fn status(&self) -> &ErrorStatus {
        &self.status
    }

    /// Path context, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    /// Backend identifier, if any.
    #[must_use]
    pub fn backend(&self) -> Option<&'static str> {
        self.backend
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StoreErrorKind::NotFound).with_path(path)
    }

    /// Create a store error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StoreErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StoreErrorKind::PermissionDenied,
            std::io::ErrorKind::TimedOut => StoreErrorKind::Timeout,
            _ => StoreErrorKind::Other,
        };
        let status = match err.kind() {
            std::io::ErrorKind::TimedOut => ErrorStatus::Temporary,
            _ => ErrorStatus::Permanent,
        };
        let mut error = Self::new(kind).with_status(status).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StoreErrorKind::NotFound => "Not found",
            StoreErrorKind::PermissionDenied => "Permission denied",
            StoreErrorKind::InvalidPath => "Invalid path",
            StoreErrorKind::Unavailable => "Unavailable",
            StoreErrorKind::Timeout => "Timeout",
            StoreErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Content store abstraction for discovery and retrieval.
///
/// Provides a unified interface for reading content regardless of
/// backend. A scan yields every content file with its full text; all
/// interpretation of that text happens in downstream crates.
pub trait ContentStore: Send + Sync {
    /// Scan and return all content files.
    ///
    /// Returns files in a deterministic walk order (directories first,
    /// names ascending). A missing content root yields an empty list,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a discovered file cannot be read
    /// (e.g., permission denied, backend unavailable).
    fn scan(&self) -> Result<Vec<SourceFile>, StoreError>;

    /// Read the full text of a single content file.
    ///
    /// # Arguments
    ///
    /// * `path` - Content-relative path (e.g., "guides/setup.md")
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file doesn't exist or can't be read.
    fn read(&self, path: &str) -> Result<String, StoreError>;

    /// Check if a content file exists at the given path.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, path: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_source_file_stores_values() {
        let file = SourceFile {
            path: "guides/setup.md".to_owned(),
            text: "# Setup".to_owned(),
        };

        assert_eq!(file.path, "guides/setup.md");
        assert_eq!(file.text, "# Setup");
    }

    #[test]
    fn test_store_error_new() {
        let err = StoreError::new(StoreErrorKind::NotFound);

        assert_eq!(err.kind(), &StoreErrorKind::NotFound);
        assert_eq!(err.status(), &ErrorStatus::Permanent);
        assert!(err.path().is_none());
        assert!(err.backend().is_none());
    }

    #[test]
    fn test_store_error_with_path() {
        let err = StoreError::new(StoreErrorKind::NotFound).with_path("guides/setup.md");

        assert_eq!(err.path(), Some(Path::new("guides/setup.md")));
    }

    #[test]
    fn test_store_error_with_backend() {
        let err = StoreError::new(StoreErrorKind::NotFound).with_backend("Fs");

        assert_eq!(err.backend(), Some("Fs"));
    }

    #[test]
    fn test_store_error_with_status() {
        let err = StoreError::new(StoreErrorKind::Timeout).with_status(ErrorStatus::Temporary);

        assert_eq!(err.status(), &ErrorStatus::Temporary);
    }

    #[test]
    fn test_store_error_not_found() {
        let err = StoreError::not_found("missing.md");

        assert_eq!(err.kind(), &StoreErrorKind::NotFound);
        assert_eq!(err.path(), Some(Path::new("missing.md")));
    }

    #[test]
    fn test_store_error_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StoreError::io(io_err, Some(PathBuf::from("missing.md")));

        assert_eq!(err.kind(), &StoreErrorKind::NotFound);
        assert_eq!(err.status(), &ErrorStatus::Permanent);
        assert_eq!(err.path(), Some(Path::new("missing.md")));
    }

    #[test]
    fn test_store_error_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = StoreError::io(io_err, None);

        assert_eq!(err.kind(), &StoreErrorKind::PermissionDenied);
    }

    #[test]
    fn test_store_error_io_timeout_is_temporary() {
        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = StoreError::io(io_err, None);

        assert_eq!(err.kind(), &StoreErrorKind::Timeout);
        assert_eq!(err.status(), &ErrorStatus::Temporary);
    }

    #[test]
    fn test_store_error_display_simple() {
        let err = StoreError::new(StoreErrorKind::NotFound);

        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_store_error_display_with_backend() {
        let err = StoreError::new(StoreErrorKind::NotFound).with_backend("Fs");

        assert_eq!(err.to_string(), "[Fs] Not found");
    }

    #[test]
    fn test_store_error_display_full() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StoreError::new(StoreErrorKind::NotFound)
            .with_backend("Fs")
            .with_path("guides/setup.md")
            .with_source(io_err);

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: file not found (path: guides/setup.md)"
        );
    }

    #[test]
    fn test_store_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
    }

    #[test]
    fn test_error_status_default() {
        assert_eq!(ErrorStatus::default(), ErrorStatus::Permanent);
    }
}
