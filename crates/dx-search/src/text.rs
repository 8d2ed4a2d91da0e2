//! Plain-text extraction from markdown.
//!
//! The search index never sees markdown syntax: code fences, inline
//! code markers, link targets, images, and HTML are stripped, leaving
//! the readable words with whitespace collapsed.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown syntax from a document body, returning plain words.
///
/// Text and inline-code content is kept; link targets, image alt text,
/// and raw HTML are dropped. Block boundaries become single spaces and
/// all whitespace is collapsed.
#[must_use]
pub fn strip_markdown(source: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(source, options);

    let mut out = String::new();
    let mut image_depth = 0usize;

    for event in parser {
        match event {
            Event::Start(Tag::Image { .. }) => image_depth += 1,
            Event::End(TagEnd::Image) => image_depth = image_depth.saturating_sub(1),
            Event::Text(text) | Event::Code(text) if image_depth == 0 => {
                out.push_str(&text);
                out.push(' ');
            }
            Event::SoftBreak | Event::HardBreak | Event::Rule => out.push(' '),
            _ => {}
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into lowercased alphanumeric tokens.
///
/// Scripts without whitespace word boundaries come out as long runs;
/// substring matching in the index covers those.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
