//! Document record construction.
//!
//! [`Document::from_source`] turns one raw `(path, text)` pair into a
//! normalized record: slug from the relative path, title through the
//! fallback chain (frontmatter, first H1 heading, humanized filename),
//! numeric order with infinity meaning "unordered, sorts last", and the
//! trimmed body. There are no failure modes; the worst case is a
//! document with a filename-derived title and infinite order.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::frontmatter;

/// First level-1 ATX heading in a body.
static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("invalid heading pattern"));

/// A normalized content document.
///
/// Created once from a raw file at load time and immutable afterward.
/// Uniquely identified by `slug`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    /// Content-root-relative path with the extension removed; the
    /// unique identifier and basis of the public URL.
    pub slug: String,
    /// Resolved title (frontmatter > first H1 > humanized filename).
    pub title: String,
    /// Description from frontmatter, if any.
    pub description: Option<String>,
    /// Sort order; `f64::INFINITY` when absent or non-numeric.
    pub order: f64,
    /// Document text with the frontmatter block removed, trimmed.
    pub body: String,
    /// Unrecognized frontmatter keys, retained but not consumed.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, Value>,
}

impl Document {
    /// Build a document from a raw content file.
    ///
    /// Pure per-file; every input yields a document.
    #[must_use]
    pub fn from_source(path: &str, text: &str) -> Self {
        let (mut data, rest) = frontmatter::parse(text);
        let slug = slug_from_path(path);
        let body = rest.trim().to_owned();

        let title_meta = data.remove("title").and_then(value_to_string);
        let description = data.remove("description").and_then(value_to_string);
        let order = order_from_value(data.remove("order").as_ref());

        let title = title_meta
            .or_else(|| first_heading(&body))
            .unwrap_or_else(|| humanize_stem(slug.rsplit('/').next().unwrap_or(&slug)));

        Self {
            slug,
            title,
            description,
            order,
            body,
            extra: data,
        }
    }
}

/// A hand-authored non-content page.
///
/// Pages carry an explicit category path and join documents in the
/// navigation tree and search index.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page {
    /// Category path ("" for top level, "tools/text" for nesting).
    pub category: String,
    /// Page slug within its category.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Optional description for navigation and search.
    pub description: Option<String>,
    /// Sort order; `f64::INFINITY` when unordered.
    pub order: f64,
}

impl Page {
    /// Create a page with the given category, slug, title, and order.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        slug: impl Into<String>,
        title: impl Into<String>,
        order: f64,
    ) -> Self {
        Self {
            category: category.into(),
            slug: slug.into(),
            title: title.into(),
            description: None,
            order,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Full path of this page (category segments plus slug).
    #[must_use]
    pub fn path(&self) -> String {
        if self.category.is_empty() {
            self.slug.clone()
        } else {
            format!("{}/{}", self.category, self.slug)
        }
    }
}

/// Compute a slug from a content-root-relative path.
///
/// Backslashes are normalized to forward slashes and the final
/// extension is stripped:
///
/// - `guide.md` -> `guide`
/// - `guides\setup.md` -> `guides/setup`
/// - `a b/c.md` -> `a b/c`
#[must_use]
pub fn slug_from_path(path: &str) -> String {
    let norm = path.replace('\\', "/");
    let norm = norm.trim_start_matches("./").trim_matches('/');

    match norm.rsplit_once('/') {
        Some((dir, file)) => format!("{dir}/{}", strip_extension(file)),
        None => strip_extension(norm).to_owned(),
    }
}

/// Strip the final extension from a filename, keeping dotfiles intact.
fn strip_extension(file: &str) -> &str {
    match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    }
}

/// Coerce a frontmatter value to a finite order, defaulting to infinity.
///
/// Numbers pass through; numeric strings are trimmed and parsed with a
/// `.` decimal separator; everything else (including non-finite values)
/// sorts last.
#[must_use]
pub fn order_from_value(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .unwrap_or(f64::INFINITY),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(f64::INFINITY),
        _ => f64::INFINITY,
    }
}

/// Generate a display title from a filename stem.
///
/// Hyphens and underscores become spaces and each word is title-cased:
/// `setup-guide` -> `Setup Guide`.
#[must_use]
pub fn humanize_stem(stem: &str) -> String {
    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-folded string comparison with byte order as the tiebreak.
///
/// Used wherever the tree and document set need a stable, human-friendly
/// ordering (titles, slugs).
#[must_use]
pub fn collate(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// First level-1 heading in a body, if any.
fn first_heading(body: &str) -> Option<String> {
    H1_RE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_owned())
}

/// Frontmatter value as a display string (numbers included).
fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
