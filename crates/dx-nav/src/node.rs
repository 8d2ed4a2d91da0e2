//! Navigation tree node types.
//!
//! The tree is a strict hierarchy: a distinguished root [`Folder`]
//! (`id == ""`) contains folders and leaves, folders contain children,
//! leaves are addressable pages. No back-edges, no shared children.

use serde::Serialize;

/// A navigation tree node.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavNode {
    /// Grouping node with children and a derived sort order.
    Folder(Folder),
    /// Addressable page (document or hand-authored).
    Leaf(Leaf),
}

impl NavNode {
    /// Whether this node is a folder.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// Node id (cumulative segment path).
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.id,
            Self::Leaf(leaf) => &leaf.id,
        }
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.title,
            Self::Leaf(leaf) => &leaf.title,
        }
    }

    /// Sort order (derived for folders, authored for leaves).
    #[must_use]
    pub fn order(&self) -> f64 {
        match self {
            Self::Folder(folder) => folder.order,
            Self::Leaf(leaf) => leaf.order,
        }
    }
}

/// A grouping node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Folder {
    /// Path-segment-joined id (e.g., "guides/setup"); "" for the root.
    pub id: String,
    /// Display title (the raw path segment unless a better title exists).
    pub title: String,
    /// Minimum order among all descendant leaves; infinite when the
    /// folder has no descendant leaves.
    pub order: f64,
    /// Sorted children: folders first, then leaves.
    pub children: Vec<NavNode>,
}

/// An addressable page node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Leaf {
    /// Path-segment-joined id, unique within the tree.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Authored sort order; infinite when unordered.
    pub order: f64,
    /// Canonical browser path (percent-encoded per segment).
    pub href: String,
    /// What this leaf represents.
    pub source: LeafSource,
}

/// The origin of a leaf node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LeafSource {
    /// A content document, referenced by slug.
    Doc {
        /// Slug of the backing document.
        slug: String,
    },
    /// A hand-authored page with no content document.
    Page,
}

/// Collect all leaves under a folder in tree order.
///
/// This is the navigation interface consumers (sidebar, table of
/// contents, overview map) use to enumerate addressable pages.
#[must_use]
pub fn flatten(folder: &Folder) -> Vec<&Leaf> {
    let mut out = Vec::new();
    collect(folder, &mut out);
    out
}

fn collect<'a>(folder: &'a Folder, out: &mut Vec<&'a Leaf>) {
    for child in &folder.children {
        match child {
            NavNode::Folder(sub) => collect(sub, out),
            NavNode::Leaf(leaf) => out.push(leaf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, order: f64) -> Leaf {
        Leaf {
            id: id.to_owned(),
            title: id.to_owned(),
            description: None,
            order,
            href: format!("/docs/{id}"),
            source: LeafSource::Page,
        }
    }

    #[test]
    fn test_flatten_tree_order() {
        let root = Folder {
            id: String::new(),
            title: String::new(),
            order: 1.0,
            children: vec![
                NavNode::Folder(Folder {
                    id: "a".to_owned(),
                    title: "a".to_owned(),
                    order: 1.0,
                    children: vec![NavNode::Leaf(leaf("a/x", 1.0))],
                }),
                NavNode::Leaf(leaf("y", 2.0)),
            ],
        };

        let ids: Vec<_> = flatten(&root).iter().map(|l| l.id.as_str()).collect();

        assert_eq!(ids, vec!["a/x", "y"]);
    }

    #[test]
    fn test_flatten_empty_folder() {
        let root = Folder {
            id: String::new(),
            title: String::new(),
            order: f64::INFINITY,
            children: Vec::new(),
        };

        assert!(flatten(&root).is_empty());
    }

    #[test]
    fn test_node_accessors() {
        let node = NavNode::Leaf(leaf("x", 3.0));

        assert!(!node.is_folder());
        assert_eq!(node.id(), "x");
        assert_eq!(node.title(), "x");
        assert_eq!(node.order(), 3.0);
    }

    #[test]
    fn test_serialization_tags_kind() {
        let node = NavNode::Leaf(leaf("x", 1.0));

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["kind"], "leaf");
        assert_eq!(json["id"], "x");
        assert_eq!(json["source"]["type"], "page");
    }

    #[test]
    fn test_doc_leaf_serializes_slug() {
        let node = NavNode::Leaf(Leaf {
            source: LeafSource::Doc {
                slug: "guides/setup".to_owned(),
            },
            ..leaf("guides/setup", 1.0)
        });

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["source"]["type"], "doc");
        assert_eq!(json["source"]["slug"], "guides/setup");
    }
}
