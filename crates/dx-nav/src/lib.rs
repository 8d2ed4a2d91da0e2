//! Navigation tree construction for the dx documentation engine.
//!
//! Assembles documents and hand-authored pages into a hierarchical
//! folder/leaf tree keyed by path segments:
//!
//! - [`NavNode`] is the tree node sum type ([`Folder`] / [`Leaf`])
//! - [`build_nav`] constructs the tree from a document and page set
//! - [`flatten`] yields all leaves under a folder in tree order
//! - [`href_for`] builds percent-encoded browser paths per segment
//!
//! Folder order is derived, not authored: a folder sorts as early as
//! its earliest-ordered descendant leaf. Within every folder, children
//! are ordered folders-first, then ascending order, then case-folded
//! title — and the whole construction is deterministic for identical
//! input.

pub mod builder;
pub mod href;
pub mod node;

pub use builder::build_nav;
pub use href::{encode_segment, href_for};
pub use node::{Folder, Leaf, LeafSource, NavNode, flatten};
