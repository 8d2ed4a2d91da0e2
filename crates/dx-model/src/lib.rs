//! Frontmatter parsing and document model for the dx documentation engine.
//!
//! This crate turns raw content files into normalized [`Document`]
//! records:
//!
//! - [`frontmatter::parse`] extracts the optional `---`-delimited
//!   metadata block from the head of a file
//! - [`Document::from_source`] resolves slug, title, description, order,
//!   and body for a single `(path, text)` pair
//! - [`Page`] describes hand-authored non-content pages that join
//!   documents in navigation and search
//!
//! Every input yields a document; missing or malformed metadata degrades
//! to defaults (filename-derived title, unordered sort position) rather
//! than failing.

pub mod document;
pub mod frontmatter;

pub use document::{Document, Page, collate, humanize_stem, order_from_value, slug_from_path};
pub use frontmatter::FrontMatter;
