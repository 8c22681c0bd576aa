//! Depth-first search primitives over Tree-sitter nodes.
//!
//! Both walks are pre-order, visit nodes in document order, and include the
//! starting node itself.

use tree_sitter::Node;

/// Returns the first node in the subtree rooted at `root` that satisfies
/// `predicate`, stopping the walk as soon as one is found.
#[must_use]
pub fn find_first<'a, P>(root: Node<'a>, predicate: P) -> Option<Node<'a>>
where
    P: Fn(Node<'a>) -> bool,
{
    find_first_recursive(root, &predicate)
}

/// Returns every node in the subtree rooted at `root` that satisfies
/// `predicate`, in document order.
#[must_use]
pub fn find_all<'a, P>(root: Node<'a>, predicate: P) -> Vec<Node<'a>>
where
    P: Fn(Node<'a>) -> bool,
{
    let mut results = Vec::new();
    find_all_recursive(root, &predicate, &mut results);
    results
}

/// Returns the slice of `source` covered by `node`.
///
/// Nodes whose range falls outside the buffer yield an empty string.
pub(crate) fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or_default()
}

fn find_first_recursive<'a, P>(node: Node<'a>, predicate: &P) -> Option<Node<'a>>
where
    P: Fn(Node<'a>) -> bool,
{
    if predicate(node) {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_first_recursive(child, predicate) {
            return Some(found);
        }
    }

    None
}

fn find_all_recursive<'a, P>(node: Node<'a>, predicate: &P, results: &mut Vec<Node<'a>>)
where
    P: Fn(Node<'a>) -> bool,
{
    if predicate(node) {
        results.push(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        find_all_recursive(child, predicate, results);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlParser;

    const SOURCE: &str = "<ul><li>one</li><li>two</li></ul>";

    #[test]
    fn find_first_returns_earliest_node_in_document_order() {
        let mut parser = HtmlParser::new().expect("parser init");
        let parsed = parser.parse(SOURCE).expect("parse");

        let found = find_first(parsed.root_node(), |node| node.kind() == "text")
            .expect("text node");
        assert_eq!(node_text(found, parsed.source()), "one");
    }

    #[test]
    fn find_first_includes_the_starting_node() {
        let mut parser = HtmlParser::new().expect("parser init");
        let parsed = parser.parse(SOURCE).expect("parse");
        let root = parsed.root_node();

        assert_eq!(find_first(root, |node| node.kind() == "document"), Some(root));
    }

    #[test]
    fn find_all_collects_every_match_in_order() {
        let mut parser = HtmlParser::new().expect("parser init");
        let parsed = parser.parse(SOURCE).expect("parse");

        let texts: Vec<&str> = find_all(parsed.root_node(), |node| node.kind() == "text")
            .into_iter()
            .map(|node| node_text(node, parsed.source()))
            .collect();
        assert_eq!(texts, ["one", "two"]);
    }

    #[test]
    fn find_all_returns_empty_when_nothing_matches() {
        let mut parser = HtmlParser::new().expect("parser init");
        let parsed = parser.parse(SOURCE).expect("parse");

        assert!(find_all(parsed.root_node(), |node| node.kind() == "entity").is_empty());
    }
}
