//! Full-text search index for the dx documentation engine.
//!
//! Builds a read-only index over the [`SearchDocument`] projection of
//! every document and page, and answers ranked queries with highlighted
//! snippets:
//!
//! - [`text::strip_markdown`] reduces a document body to plain words
//! - [`SearchIndex::search`] matches by token *and* by lowercase
//!   substring, so scripts without whitespace word boundaries (CJK)
//!   match without special handling
//! - [`snippet::snippet`] extracts a bounded window around the first
//!   case-insensitive occurrence of the query
//!
//! An index miss is not an error; empty and whitespace-only queries
//! return an empty result list.

pub mod index;
pub mod snippet;
pub mod text;

pub use index::{DEFAULT_LIMIT, Hit, SearchDocument, SearchIndex};
pub use snippet::snippet;
pub use text::{strip_markdown, tokenize};
