//! The search index and query interface.
//!
//! # Architecture
//!
//! The index holds one entry per [`SearchDocument`] with precomputed
//! lowercase projections and a token set. Queries match two ways:
//!
//! - **tokens** - whitespace/punctuation-delimited words, good for
//!   Latin-script prose
//! - **substrings** - raw lowercase containment over title,
//!   description, and body, which also covers scripts without
//!   whitespace word boundaries (CJK)
//!
//! Scores favor title matches over description over body; ties break by
//! case-folded title, then id, so rankings are deterministic.

use std::collections::HashSet;

use serde::Serialize;

use dx_model::collate;

use crate::snippet::snippet;
use crate::text::tokenize;

/// Default result cap, sized for an interactive dropdown.
pub const DEFAULT_LIMIT: usize = 20;

/// Flattened, search-only projection of a document or page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchDocument {
    /// Unique id (document slug or page path).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Canonical browser path.
    pub href: String,
    /// Optional description.
    pub description: Option<String>,
    /// Top-level path segment (first category), if any.
    pub section: Option<String>,
    /// Markdown-stripped plain-text body.
    pub text: String,
}

/// A ranked search result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hit {
    /// Id of the matched document or page.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Canonical browser path.
    pub href: String,
    /// Description, if the source has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Top-level section, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Text window around the first match, if the source has text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// One indexed document with precomputed projections.
struct Entry {
    doc: SearchDocument,
    title_lower: String,
    description_lower: Option<String>,
    text_lower: String,
    tokens: HashSet<String>,
}

/// Read-only full-text index over a document set.
///
/// Built once from the full [`SearchDocument`] projection; rebuilt
/// whenever the document set changes.
pub struct SearchIndex {
    entries: Vec<Entry>,
}

impl SearchIndex {
    /// Build the index over a document set.
    #[must_use]
    pub fn build(documents: Vec<SearchDocument>) -> Self {
        let entries = documents
            .into_iter()
            .map(|doc| {
                let mut tokens: HashSet<String> = tokenize(&doc.text).into_iter().collect();
                tokens.extend(tokenize(&doc.title));
                if let Some(description) = &doc.description {
                    tokens.extend(tokenize(description));
                }
                Entry {
                    title_lower: doc.title.to_lowercase(),
                    description_lower: doc.description.as_ref().map(|d| d.to_lowercase()),
                    text_lower: doc.text.to_lowercase(),
                    tokens,
                    doc,
                }
            })
            .collect();

        Self { entries }
    }

    /// Number of indexed documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Answer a query with ranked hits.
    ///
    /// Empty and whitespace-only queries return an empty list. `limit`
    /// bounds the result count, defaulting to [`DEFAULT_LIMIT`].
    #[must_use]
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<Hit> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let query_lower = trimmed.to_lowercase();
        let query_tokens = tokenize(trimmed);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        let mut scored: Vec<(f64, &Entry)> = Vec::new();
        for entry in &self.entries {
            let score = score_entry(entry, &query_lower, &query_tokens);
            if score > 0.0 {
                scored.push((score, entry));
            }
        }

        scored.sort_by(|(a_score, a), (b_score, b)| {
            b_score
                .total_cmp(a_score)
                .then_with(|| collate(&a.doc.title, &b.doc.title))
                .then_with(|| a.doc.id.cmp(&b.doc.id))
        });
        scored.truncate(limit);

        scored
            .into_iter()
            .map(|(_, entry)| Hit {
                id: entry.doc.id.clone(),
                title: entry.doc.title.clone(),
                href: entry.doc.href.clone(),
                description: entry.doc.description.clone(),
                section: entry.doc.section.clone(),
                snippet: snippet(&entry.doc.text, trimmed),
            })
            .collect()
    }
}

/// Score one entry against a query; 0.0 means no match.
fn score_entry(entry: &Entry, query_lower: &str, query_tokens: &[String]) -> f64 {
    let mut score = 0.0;

    if entry.title_lower.contains(query_lower) {
        score += if entry.title_lower == query_lower {
            12.0
        } else {
            8.0
        };
    }
    if entry
        .description_lower
        .as_deref()
        .is_some_and(|d| d.contains(query_lower))
    {
        score += 3.0;
    }
    if entry.text_lower.contains(query_lower) {
        score += 2.0;
    }

    for token in query_tokens {
        if entry.tokens.contains(token) {
            score += 1.0;
        }
    }
    if !query_tokens.is_empty() && query_tokens.iter().all(|t| entry.tokens.contains(t)) {
        score += 1.0;
    }

    score
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn doc(id: &str, title: &str, text: &str) -> SearchDocument {
        SearchDocument {
            id: id.to_owned(),
            title: title.to_owned(),
            href: format!("/docs/{id}"),
            description: None,
            section: id.split('/').next().filter(|_| id.contains('/')).map(ToOwned::to_owned),
            text: text.to_owned(),
        }
    }

    fn sample_index() -> SearchIndex {
        SearchIndex::build(vec![
            doc(
                "guides/intro",
                "Getting Started",
                "A quick tour of the basics. Install the toolchain and run your first build.",
            ),
            doc(
                "guides/json",
                "JSON Formatter",
                "Format and validate JSON payloads in the browser.",
            ),
            doc(
                "reference/market",
                "市场数据",
                "实时market数据流与历史行情。",
            ),
        ])
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let index = sample_index();

        assert!(index.search("", Some(5)).is_empty());
        assert!(index.search("   ", Some(5)).is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let index = sample_index();

        assert!(index.search("zzzzzz", Some(5)).is_empty());
    }

    #[test]
    fn test_title_match_ranks_first() {
        let index = SearchIndex::build(vec![
            doc("a", "Body Mentions Json Here", "nothing relevant"),
            doc("b", "Other", "json json json in the body"),
        ]);

        let hits = index.search("json", Some(5));

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "a");
    }

    #[test]
    fn test_body_token_match() {
        let index = sample_index();

        let hits = index.search("toolchain", None);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "guides/intro");
    }

    #[test]
    fn test_cjk_title_substring_match() {
        let index = sample_index();

        let hits = index.search("市场", Some(5));

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "reference/market");
        assert_eq!(hits[0].title, "市场数据");
    }

    #[test]
    fn test_latin_substring_inside_cjk_body() {
        // "market" is embedded without whitespace boundaries; whitespace
        // tokenization alone would miss it.
        let index = sample_index();

        let hits = index.search("market", Some(5));

        assert!(hits.iter().any(|h| h.id == "reference/market"));
    }

    #[test]
    fn test_limit_bounds_results() {
        let docs: Vec<_> = (0..30)
            .map(|i| doc(&format!("d{i}"), &format!("Widget {i}"), "widget text"))
            .collect();
        let index = SearchIndex::build(docs);

        assert_eq!(index.search("widget", Some(5)).len(), 5);
        assert_eq!(index.search("widget", None).len(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_hit_includes_snippet_with_match() {
        let index = SearchIndex::build(vec![doc(
            "a",
            "Doc",
            "abcdefghij KEYWORD klmnopqrst",
        )]);

        let hits = index.search("keyword", Some(5));

        let snip = hits[0].snippet.as_deref().unwrap();
        assert!(snip.to_lowercase().contains("keyword"));
    }

    #[test]
    fn test_hit_without_text_has_no_snippet() {
        let index = SearchIndex::build(vec![doc("a", "Regex Tester", "")]);

        let hits = index.search("regex", Some(5));

        assert_eq!(hits.len(), 1);
        assert!(hits[0].snippet.is_none());
    }

    #[test]
    fn test_description_match() {
        let mut d = doc("a", "Plain Title", "plain body");
        d.description = Some("converts YAML to TOML".to_owned());
        let index = SearchIndex::build(vec![d]);

        let hits = index.search("yaml", Some(5));

        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let index = SearchIndex::build(vec![
            doc("b", "Same Widget", "widget"),
            doc("a", "Same Widget", "widget"),
        ]);

        let hits = index.search("widget", Some(5));

        // Equal score and title: id breaks the tie
        assert_eq!(hits[0].id, "a");
        assert_eq!(hits[1].id, "b");
    }

    #[test]
    fn test_section_carried_into_hit() {
        let index = sample_index();

        let hits = index.search("getting started", Some(5));

        assert_eq!(hits[0].section.as_deref(), Some("guides"));
    }

    #[test]
    fn test_len_and_is_empty() {
        assert!(SearchIndex::build(Vec::new()).is_empty());
        assert_eq!(sample_index().len(), 3);
    }
}
