//! End-to-end tests over a real content directory: filesystem scan,
//! document normalization, navigation tree, and search.

use std::fs;

use dx_index::{ContentIndex, IndexConfig, NavNode, flatten};
use dx_model::Page;
use dx_store::FsStore;

fn build_index(root: &std::path::Path, pages: &[Page]) -> ContentIndex {
    let store = FsStore::new(root.to_path_buf());
    ContentIndex::build(&store, pages, &IndexConfig::default()).unwrap()
}

#[test]
fn frontmatter_drives_title_order_and_body() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("hello.md"),
        "---\ntitle: Hello\norder: 2\n---\nBody text",
    )
    .unwrap();

    let index = build_index(dir.path(), &[]);

    let doc = index.document("hello").unwrap();
    assert_eq!(doc.title, "Hello");
    assert_eq!(doc.order, 2.0);
    assert_eq!(doc.body, "Body text");
}

#[test]
fn ordered_category_builds_sorted_folder() {
    let dir = tempfile::tempdir().unwrap();
    let guide = dir.path().join("guide");
    fs::create_dir(&guide).unwrap();
    fs::write(
        guide.join("intro.md"),
        "---\ntitle: Intro\norder: 1\n---\nFirst steps.",
    )
    .unwrap();
    fs::write(
        guide.join("advanced.md"),
        "---\ntitle: Advanced\norder: 2\n---\nDeep water.",
    )
    .unwrap();

    let index = build_index(dir.path(), &[]);

    let root = index.nav();
    assert_eq!(root.children.len(), 1);
    let NavNode::Folder(folder) = &root.children[0] else {
        panic!("expected a folder at the root");
    };
    assert_eq!(folder.id, "guide");
    assert_eq!(folder.order, 1.0);
    let titles: Vec<_> = folder.children.iter().map(NavNode::title).collect();
    assert_eq!(titles, vec!["Intro", "Advanced"]);
}

#[test]
fn unordered_category_sorts_by_title() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes");
    fs::create_dir(&notes).unwrap();
    fs::write(notes.join("c.md"), "# Cherry\n\nText").unwrap();
    fs::write(notes.join("a.md"), "# apple\n\nText").unwrap();
    fs::write(notes.join("b.md"), "# Banana\n\nText").unwrap();

    let index = build_index(dir.path(), &[]);

    let NavNode::Folder(folder) = &index.nav().children[0] else {
        panic!("expected a folder at the root");
    };
    let titles: Vec<_> = folder.children.iter().map(NavNode::title).collect();
    assert_eq!(titles, vec!["apple", "Banana", "Cherry"]);
}

#[test]
fn cjk_content_is_searchable_by_substring() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("market.md"),
        "---\ntitle: 市场数据\n---\n实时market数据流与历史行情。",
    )
    .unwrap();

    let index = build_index(dir.path(), &[]);

    // Latin substring embedded in CJK text, no whitespace boundaries
    let hits = index.search("market", Some(5));
    assert!(hits.iter().any(|h| h.id == "market"));

    // CJK substring of the title
    let hits = index.search("市场", Some(5));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "市场数据");
}

#[test]
fn slug_with_space_round_trips_through_href() {
    let dir = tempfile::tempdir().unwrap();
    let spaced = dir.path().join("a b");
    fs::create_dir(&spaced).unwrap();
    fs::write(spaced.join("c.md"), "# Spaced\n\nText").unwrap();

    let index = build_index(dir.path(), &[]);

    let leaves = flatten(index.nav());
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].href, "/docs/a%20b/c");

    let decoded: Vec<String> = leaves[0]
        .href
        .trim_start_matches("/docs/")
        .split('/')
        .map(|seg| {
            percent_encoding::percent_decode_str(seg)
                .decode_utf8()
                .unwrap()
                .into_owned()
        })
        .collect();
    assert_eq!(decoded.join("/"), "a b/c");
}

#[test]
fn rebuild_from_unchanged_content_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let guide = dir.path().join("guide");
    fs::create_dir(&guide).unwrap();
    fs::write(guide.join("one.md"), "---\norder: 1\n---\n# One").unwrap();
    fs::write(guide.join("two.md"), "# Two\n\nUnordered").unwrap();
    fs::write(dir.path().join("top.md"), "# Top").unwrap();

    let pages = vec![Page::new("tools", "base64", "Base64", 1.0)];
    let first = build_index(dir.path(), &pages);
    let second = build_index(dir.path(), &pages);

    assert_eq!(first.nav(), second.nav());
    assert_eq!(first.documents(), second.documents());
}

#[test]
fn search_hit_snippet_windows_the_match() {
    let dir = tempfile::tempdir().unwrap();
    let long_body = format!("{} KEYWORD {}", "lorem ipsum ".repeat(30), "dolor sit ".repeat(30));
    fs::write(dir.path().join("long.md"), format!("# Long\n\n{long_body}")).unwrap();

    let index = build_index(dir.path(), &[]);

    let hits = index.search("keyword", Some(5));
    let snippet = hits[0].snippet.as_deref().unwrap();
    assert!(snippet.contains("KEYWORD"));
    assert!(snippet.starts_with('…'));
    assert!(snippet.ends_with('…'));
}
