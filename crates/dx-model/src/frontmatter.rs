//! Frontmatter block parsing.
//!
//! A frontmatter block is an optional `key: value` metadata section at
//! the head of a content file, delimited by lines consisting solely of
//! `---`:
//!
//! ```text
//! ---
//! title: Getting Started
//! order: 2
//! ---
//! Body text...
//! ```
//!
//! Parsing never fails: a file without a leading fence is all body,
//! malformed lines are skipped, and a missing closing fence consumes
//! the rest of the input as metadata.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Parsed frontmatter metadata, keyed by trimmed key.
pub type FrontMatter = HashMap<String, Value>;

/// Integer-or-decimal pattern for value coercion.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("invalid number pattern"));

/// Split a raw content file into frontmatter metadata and body text.
///
/// If `text` does not begin with a line consisting solely of `---`,
/// returns empty metadata and the full text unchanged. Otherwise scans
/// to the closing `---` fence (or end of input), collecting
/// `key: value` lines. Blank lines and `#`-prefixed comment lines are
/// skipped, as are lines without a `:`.
///
/// The returned body starts after the closing fence and is *not*
/// trimmed; trimming is the caller's concern.
#[must_use]
pub fn parse(text: &str) -> (FrontMatter, &str) {
    let mut data = FrontMatter::new();

    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (data, text);
    };
    if first.trim() != "---" {
        return (data, text);
    }

    let mut consumed = first.len();
    for line in lines {
        consumed += line.len();
        let trimmed = line.trim();
        if trimmed == "---" {
            return (data, &text[consumed..]);
        }
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once(':') {
            let key = key.trim();
            if !key.is_empty() {
                data.insert(key.to_owned(), coerce_value(value.trim()));
            }
        }
    }

    // Unterminated fence: everything was metadata, no body remains.
    (data, "")
}

/// Coerce a raw frontmatter value.
///
/// One layer of matching single or double quotes is stripped; otherwise
/// values matching an integer-or-decimal pattern become numbers;
/// everything else stays a trimmed string.
fn coerce_value(raw: &str) -> Value {
    let bytes = raw.as_bytes();
    if raw.len() >= 2
        && ((bytes[0] == b'"' && bytes[raw.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[raw.len() - 1] == b'\''))
    {
        return Value::String(raw[1..raw.len() - 1].to_owned());
    }

    if NUMBER_RE.is_match(raw)
        && let Some(n) = raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64)
    {
        return Value::Number(n);
    }

    Value::String(raw.to_owned())
}
