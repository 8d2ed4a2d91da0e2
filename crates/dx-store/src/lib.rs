//! Content source abstraction for the dx documentation engine.
//!
//! This crate provides a [`ContentStore`] trait for abstracting content
//! discovery and retrieval from the underlying backend. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (filesystem today, anything else tomorrow)
//! - **Clean separation** between indexing logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ContentStore`] trait with `scan()`, `read()`, and `exists()` methods
//! - [`FsStore`] implementation for a local content directory
//! - [`MemoryStore`] for testing (behind the `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use dx_store::{ContentStore, FsStore};
//!
//! let store = FsStore::new(PathBuf::from("content"));
//! for file in store.scan()? {
//!     println!("{}: {} bytes", file.path, file.text.len());
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod store;

pub use fs::FsStore;
#[cfg(feature = "mock")]
pub use mock::MemoryStore;
pub use store::{ContentStore, ErrorStatus, SourceFile, StoreError, StoreErrorKind};
