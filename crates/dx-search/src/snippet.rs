//! Snippet extraction for search hits.
//!
//! A snippet is a bounded window of plain text around the first
//! case-insensitive occurrence of the query, clipped to text bounds and
//! marked with an ellipsis where clipped. When the query does not occur
//! in the text, the opening of the text is used instead.

/// Characters of context before the match.
const WINDOW_BEFORE: usize = 48;
/// Characters of context after the match start.
const WINDOW_AFTER: usize = 92;
/// Fallback snippet length when the query is not found in the text.
const FALLBACK_LEN: usize = 140;
/// Marker for clipped window edges.
const ELLIPSIS: char = '…';

/// Find the first case-insensitive occurrence of `needle` in
/// `haystack`, returning its byte range.
///
/// Comparison is char-by-char with full case folding, so the match is
/// byte-boundary safe for any script.
pub(crate) fn find_ci(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }

    'starts: for (start, _) in haystack.char_indices() {
        let mut matched = 0usize;
        for (offset, ch) in haystack[start..].char_indices() {
            for folded in ch.to_lowercase() {
                if folded != needle[matched] {
                    continue 'starts;
                }
                matched += 1;
                if matched == needle.len() {
                    return Some((start, start + offset + ch.len_utf8()));
                }
            }
        }
    }

    None
}

/// Build a snippet for `query` from plain `text`.
///
/// Returns `None` when the text is empty. When the query occurs, the
/// window spans roughly [`WINDOW_BEFORE`] characters before the match
/// and [`WINDOW_AFTER`] after it, with `…` markers where the window
/// does not reach the text boundary; otherwise the first
/// [`FALLBACK_LEN`] characters are returned.
#[must_use]
pub fn snippet(text: &str, query: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();

    if let Some((start, end)) = find_ci(text, query.trim()) {
        let start_ci = chars.partition_point(|&(b, _)| b < start);
        let end_ci = chars.partition_point(|&(b, _)| b < end);
        let from_ci = start_ci.saturating_sub(WINDOW_BEFORE);
        let to_ci = (start_ci + WINDOW_AFTER).max(end_ci).min(chars.len());

        let from_b = chars[from_ci].0;
        let to_b = if to_ci == chars.len() {
            text.len()
        } else {
            chars[to_ci].0
        };

        let mut out = String::new();
        if from_ci > 0 {
            out.push(ELLIPSIS);
        }
        out.push_str(&text[from_b..to_b]);
        if to_ci < chars.len() {
            out.push(ELLIPSIS);
        }
        return Some(out);
    }

    if chars.len() <= FALLBACK_LEN {
        return Some(text.to_owned());
    }
    let mut out = text[..chars[FALLBACK_LEN].0].to_owned();
    out.push(ELLIPSIS);
    Some(out)
}
