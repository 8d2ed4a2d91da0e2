//! Navigation tree construction.
//!
//! # Architecture
//!
//! Construction runs in two phases:
//!
//! 1. **Insertion** - folders are created on demand in a flat arena
//!    (`Vec<ProtoFolder>`) memoized by cumulative path id, so repeated
//!    segments reuse the same folder. Pages are inserted first, then
//!    documents; a document at `a/b/c` nests under folder `a/b`.
//! 2. **Finalization** - a pure recursive pass returns each folder with
//!    its children sorted and its order derived as the minimum over all
//!    descendant leaves. No in-place order mutation.
//!
//! The result is deterministic: identical input (including insertion
//! order) produces an identical tree.

use std::cmp::Ordering;
use std::collections::HashMap;

use dx_model::{Document, Page, collate};

use crate::href::href_for;
use crate::node::{Folder, Leaf, LeafSource, NavNode};

/// Mutable folder state during insertion.
struct ProtoFolder {
    id: String,
    title: String,
    subfolders: Vec<usize>,
    leaves: Vec<Leaf>,
}

/// Folder arena keyed by cumulative path id.
struct TreeBuilder {
    arena: Vec<ProtoFolder>,
    by_id: HashMap<String, usize>,
}

impl TreeBuilder {
    fn new() -> Self {
        let root = ProtoFolder {
            id: String::new(),
            title: String::new(),
            subfolders: Vec::new(),
            leaves: Vec::new(),
        };
        let mut by_id = HashMap::new();
        by_id.insert(String::new(), 0);
        Self {
            arena: vec![root],
            by_id,
        }
    }

    /// Walk (creating as needed) the folder chain for a segment path,
    /// returning the arena index of the final folder.
    fn folder_for(&mut self, segments: &[&str]) -> usize {
        let mut current = 0;
        let mut id = String::new();

        for segment in segments {
            if segment.is_empty() {
                continue;
            }
            if id.is_empty() {
                id.push_str(segment);
            } else {
                id = format!("{id}/{segment}");
            }

            current = match self.by_id.get(&id).copied() {
                Some(idx) => idx,
                None => {
                    let idx = self.arena.len();
                    self.arena.push(ProtoFolder {
                        id: id.clone(),
                        title: (*segment).to_owned(),
                        subfolders: Vec::new(),
                        leaves: Vec::new(),
                    });
                    self.arena[current].subfolders.push(idx);
                    self.by_id.insert(id.clone(), idx);
                    idx
                }
            };
        }

        current
    }

    /// Finalize a folder: sorted children plus its derived minimum order.
    fn finish(&self, idx: usize) -> (Folder, f64) {
        let proto = &self.arena[idx];
        let mut children: Vec<NavNode> = Vec::new();
        let mut min_order = f64::INFINITY;

        for &sub in &proto.subfolders {
            let (folder, sub_min) = self.finish(sub);
            min_order = min_order.min(sub_min);
            children.push(NavNode::Folder(folder));
        }
        for leaf in &proto.leaves {
            min_order = min_order.min(leaf.order);
            children.push(NavNode::Leaf(leaf.clone()));
        }

        children.sort_by(node_cmp);

        (
            Folder {
                id: proto.id.clone(),
                title: proto.title.clone(),
                order: min_order,
                children,
            },
            min_order,
        )
    }
}

/// Child ordering: folders before leaves; within each group ascending
/// order (infinite last), ties by case-folded title.
fn node_cmp(a: &NavNode, b: &NavNode) -> Ordering {
    b.is_folder()
        .cmp(&a.is_folder())
        .then_with(|| a.order().total_cmp(&b.order()))
        .then_with(|| collate(a.title(), b.title()))
}

/// Build the navigation tree from the full document and page sets.
///
/// Pages are inserted first under their explicit category paths, then
/// documents under their slug paths (all segments except the last form
/// the folder chain). Unresolvable category segments simply create new
/// folders titled by the raw segment string.
///
/// Returns the distinguished root folder (`id == ""`).
#[must_use]
pub fn build_nav(documents: &[Document], pages: &[Page], base_path: &str) -> Folder {
    let mut builder = TreeBuilder::new();

    for page in pages {
        let segments: Vec<&str> = page.category.split('/').collect();
        let folder = builder.folder_for(&segments);
        let path = page.path();
        builder.arena[folder].leaves.push(Leaf {
            id: path.clone(),
            title: page.title.clone(),
            description: page.description.clone(),
            order: page.order,
            href: href_for(base_path, &path),
            source: LeafSource::Page,
        });
    }

    for doc in documents {
        let segments: Vec<&str> = doc.slug.split('/').collect();
        let (_, parents) = segments.split_last().unwrap_or((&"", &[]));
        let folder = builder.folder_for(parents);
        builder.arena[folder].leaves.push(Leaf {
            id: doc.slug.clone(),
            title: doc.title.clone(),
            description: doc.description.clone(),
            order: doc.order,
            href: href_for(base_path, &doc.slug),
            source: LeafSource::Doc {
                slug: doc.slug.clone(),
            },
        });
    }

    let (root, _) = builder.finish(0);
    root
}
