//! Table of contents parsing.
//!
//! The contents document (`/contents/data.xml`) nests `Contents*` elements:
//! `ContentsPart`, `ContentsChapter`, `ContentsItem`, `ContentsSchedules`
//! and so on, each with optional `ContentsNumber` and `ContentsTitle`
//! children.

use roxmltree::{Document, Node};

use crate::config::{DUBLIN_CORE_NS, LEGISLATION_NS};
use crate::error::Result;
use crate::models::{TableOfContents, TocItem};
use crate::xml::{child_text_ns, descendant_text_ns, find_descendant_ns};

const CONTENTS_PREFIX: &str = "Contents";

/// Parse a contents document into a [`TableOfContents`].
///
/// A document without a `Contents` element yields an empty item list.
pub fn parse_table_of_contents(xml: &str) -> Result<TableOfContents> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let uri = root
        .attribute("DocumentURI")
        .unwrap_or_default()
        .to_string();

    let contents = find_descendant_ns(&doc, LEGISLATION_NS, "Contents");

    let title = descendant_text_ns(&doc, DUBLIN_CORE_NS, "title")
        .or_else(|| contents.and_then(|c| child_text_ns(c, LEGISLATION_NS, "ContentsTitle")))
        .unwrap_or_default();

    let items = contents.map(toc_children).unwrap_or_default();

    tracing::debug!(uri = %uri, items = items.len(), "Parsed table of contents");

    Ok(TableOfContents { uri, title, items })
}

/// Structural children of a contents node, in document order.
fn toc_children(node: Node<'_, '_>) -> Vec<TocItem> {
    node.children()
        .filter_map(|child| item_type(child).map(|ty| toc_item(child, ty)))
        .collect()
}

fn toc_item(node: Node<'_, '_>, item_type: String) -> TocItem {
    let children = toc_children(node);
    let status = node.attribute("Status").map(str::to_string);

    TocItem {
        item_type,
        number: child_text_ns(node, LEGISLATION_NS, "ContentsNumber").filter(|s| !s.is_empty()),
        title: child_text_ns(node, LEGISLATION_NS, "ContentsTitle").filter(|s| !s.is_empty()),
        href: node.attribute("DocumentURI").map(str::to_string),
        children: (!children.is_empty()).then_some(children),
        is_repealed: status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("repealed")),
        status,
    }
}

/// Item type for a structural contents element (`ContentsPart` -> `part`).
///
/// `None` for anything that is not a structural `Contents*` element.
fn item_type(node: Node<'_, '_>) -> Option<String> {
    if !node.is_element() || node.tag_name().namespace() != Some(LEGISLATION_NS) {
        return None;
    }
    match node.tag_name().name().strip_prefix(CONTENTS_PREFIX)? {
        "" | "Number" | "Title" => None,
        rest => Some(rest.to_lowercase()),
    }
}
