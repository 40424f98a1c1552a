//! Namespace-aware helpers for navigating roxmltree DOM trees.

use roxmltree::{Document, Node};

/// Check if a node is an element with the given namespace and local name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use uk_legislation::xml::has_tag_ns;
///
/// let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert!(has_tag_ns(doc.root_element(), "http://www.w3.org/2005/Atom", "feed"));
/// assert!(!has_tag_ns(doc.root_element(), "", "feed"));
/// ```
pub fn has_tag_ns(node: Node<'_, '_>, ns: &str, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace().unwrap_or_default() == ns
}

/// Find the first child element with the given namespace and local name.
pub fn find_child_ns<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &str,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag_ns(*child, ns, name))
}

/// Find all child elements with the given namespace and local name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use uk_legislation::xml::find_children_ns;
///
/// let xml = r#"<a:root xmlns:a="urn:a" xmlns:b="urn:b"><a:item/><b:item/><a:item/></a:root>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(find_children_ns(doc.root_element(), "urn:a", "item").count(), 2);
/// ```
pub fn find_children_ns<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    ns: &'a str,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| has_tag_ns(*child, ns, name))
}

/// Find the first element anywhere in the document with the given namespace
/// and local name, in document order.
pub fn find_descendant_ns<'a, 'input>(
    doc: &'a Document<'input>,
    ns: &str,
    name: &str,
) -> Option<Node<'a, 'input>> {
    doc.descendants().find(|n| has_tag_ns(*n, ns, name))
}

/// Concatenated text of a node and all its descendants, trimmed.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use uk_legislation::xml::collect_text;
///
/// let doc = Document::parse("<t> Hello <b>world</b>! </t>").unwrap();
/// assert_eq!(collect_text(doc.root_element()), "Hello world!");
/// ```
pub fn collect_text(node: Node<'_, '_>) -> String {
    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}

/// Text of the first child element with the given namespace and local name.
///
/// `None` when the child is missing; `Some("")` when it is present but empty.
pub fn child_text_ns(node: Node<'_, '_>, ns: &str, name: &str) -> Option<String> {
    find_child_ns(node, ns, name).map(collect_text)
}

/// Text of the first matching element in the document; `None` when missing
/// or blank.
pub fn descendant_text_ns(doc: &Document<'_>, ns: &str, name: &str) -> Option<String> {
    find_descendant_ns(doc, ns, name)
        .map(collect_text)
        .filter(|s| !s.is_empty())
}

/// Attribute of the first matching element in the document.
pub fn descendant_attribute_ns<'a>(
    doc: &'a Document<'_>,
    ns: &str,
    name: &str,
    attribute: &str,
) -> Option<&'a str> {
    find_descendant_ns(doc, ns, name).and_then(|n| n.attribute(attribute))
}
