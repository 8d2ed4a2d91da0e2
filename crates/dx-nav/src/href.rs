//! Browser path construction.
//!
//! Every document and page is addressable at a base path followed by
//! its slug, with each path segment percent-encoded independently so
//! that segments containing `/`-unsafe characters round-trip through
//! decoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters percent-encoded within a single path segment.
///
/// RFC 3986 unreserved characters pass through; everything else,
/// including `/`, is encoded (segments are joined by literal slashes
/// afterwards).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single path segment.
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Build the canonical browser path for a slug under a base path.
///
/// Each slug segment is encoded independently:
///
/// - `href_for("/docs", "a b/c")` -> `"/docs/a%20b/c"`
#[must_use]
pub fn href_for(base_path: &str, path: &str) -> String {
    let mut href = base_path.trim_end_matches('/').to_owned();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        href.push('/');
        href.push_str(&encode_segment(segment));
    }
    if href.is_empty() {
        "/".to_owned()
    } else {
        href
    }
}
