//! Content index assembly for the dx documentation engine.
//!
//! [`ContentIndex`] is the single value the presentational layer reads:
//! the normalized document set, the navigation tree, and the search
//! index, built once from a [`ContentStore`] plus a static list of
//! hand-authored [`Page`]s and immutable afterward.
//!
//! There is no hidden global state: the application's startup path
//! builds the index explicitly and passes it by reference to any
//! consumer. Rebuilding (e.g., on content change during development) is
//! a full atomic replace - build a fresh index and swap the reference.
//!
//! # Example
//!
//! ```ignore
//! use dx_index::{ContentIndex, IndexConfig};
//! use dx_model::Page;
//! use dx_store::FsStore;
//!
//! let config = IndexConfig::default();
//! let store = FsStore::new(config.source_dir.clone());
//! let pages = vec![Page::new("tools", "json-formatter", "JSON Formatter", 1.0)];
//!
//! let index = ContentIndex::build(&store, &pages, &config)?;
//! let hits = index.search("getting started", None);
//! ```

mod config;

use std::collections::HashMap;

use dx_model::collate;
use dx_nav::{build_nav, href_for};
use dx_search::{SearchDocument, SearchIndex, strip_markdown};
use dx_store::{ContentStore, StoreError};

pub use config::{ConfigError, IndexConfig};
pub use dx_model::{Document, Page};
pub use dx_nav::{Folder, Leaf, LeafSource, NavNode, flatten};
pub use dx_search::Hit;

/// Error returned when index construction fails.
///
/// The core itself cannot fail - metadata problems degrade to defaults.
/// The only hard failure is the content store's.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The content store failed to scan or read.
    #[error("content store error: {0}")]
    Store(#[from] StoreError),
}

/// The immutable content index: documents, navigation tree, and search.
///
/// Built once per content set; read-only thereafter. All accessors are
/// lock-free because nothing is mutated after construction.
pub struct ContentIndex {
    documents: Vec<Document>,
    by_slug: HashMap<String, usize>,
    nav: Folder,
    search: SearchIndex,
    search_limit: usize,
}

impl ContentIndex {
    /// Build the index from a content store and a static page list.
    ///
    /// Documents are constructed per file, sorted by case-folded slug
    /// for a stable base ordering, then projected into the navigation
    /// tree and the search index. Duplicate slugs keep the last-loaded
    /// document and log a warning.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Store`] if the store fails to scan or read.
    pub fn build(
        store: &dyn ContentStore,
        pages: &[Page],
        config: &IndexConfig,
    ) -> Result<Self, BuildError> {
        let sources = store.scan()?;

        let mut documents: Vec<Document> = sources
            .iter()
            .map(|file| Document::from_source(&file.path, &file.text))
            .collect();
        // Stable sort keeps duplicate slugs in discovery order, so the
        // lookup below resolves to the last-loaded document.
        documents.sort_by(|a, b| collate(&a.slug, &b.slug));

        let mut by_slug = HashMap::with_capacity(documents.len());
        for (idx, doc) in documents.iter().enumerate() {
            if by_slug.insert(doc.slug.clone(), idx).is_some() {
                tracing::warn!(slug = %doc.slug, "duplicate document slug; keeping the last loaded");
            }
        }

        let nav = build_nav(&documents, pages, &config.base_path);
        let search = SearchIndex::build(search_documents(&documents, pages, &config.base_path));

        Ok(Self {
            documents,
            by_slug,
            nav,
            search,
            search_limit: config.search_limit,
        })
    }

    /// All documents, sorted by case-folded slug.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Look up a document by slug.
    #[must_use]
    pub fn document(&self, slug: &str) -> Option<&Document> {
        self.by_slug.get(slug).map(|&idx| &self.documents[idx])
    }

    /// The navigation tree root (`id == ""`).
    #[must_use]
    pub fn nav(&self) -> &Folder {
        &self.nav
    }

    /// Answer a search query with ranked hits.
    ///
    /// `limit` defaults to the configured `search_limit`. Empty and
    /// whitespace-only queries return an empty list.
    #[must_use]
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<Hit> {
        self.search
            .search(query, Some(limit.unwrap_or(self.search_limit)))
    }
}

/// Project documents and pages into their search-only form.
fn search_documents(
    documents: &[Document],
    pages: &[Page],
    base_path: &str,
) -> Vec<SearchDocument> {
    let mut out = Vec::with_capacity(documents.len() + pages.len());

    for doc in documents {
        out.push(SearchDocument {
            id: doc.slug.clone(),
            title: doc.title.clone(),
            href: href_for(base_path, &doc.slug),
            description: doc.description.clone(),
            section: section_of(&doc.slug),
            text: strip_markdown(&doc.body),
        });
    }
    for page in pages {
        let path = page.path();
        out.push(SearchDocument {
            id: path.clone(),
            title: page.title.clone(),
            href: href_for(base_path, &path),
            description: page.description.clone(),
            section: section_of(&path),
            text: String::new(),
        });
    }

    out
}

/// Top-level path segment of a nested path, `None` at the top level.
fn section_of(path: &str) -> Option<String> {
    path.rsplit_once('/')
        .and_then(|(parents, _)| parents.split('/').next())
        .map(ToOwned::to_owned)
}
