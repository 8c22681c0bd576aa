//! Selector matching over a syntax tree.
//!
//! Tag selectors match `element` nodes directly. Class and id selectors match
//! the `start_tag` carrying the attribute and are then resolved to the
//! enclosing element. The two entry points resolve differently when a start
//! tag has no parent: [`match_first`] keeps the start tag, while
//! [`match_all`] drops it because there is no element to return.

use tree_sitter::Node;

use crate::attribute::element_with_attribute_equals;
use crate::node_kind::NodeKind;
use crate::selector::{Selector, SelectorKind};
use crate::tree::{self, node_text};

/// Returns the first node under `root` (inclusive) matching `selector`.
#[must_use]
pub fn match_first<'a>(selector: &Selector<'_>, root: Node<'a>, source: &str) -> Option<Node<'a>> {
    let found = tree::find_first(root, |node| is_match(selector, node, source))?;

    Some(match selector.kind() {
        SelectorKind::Tag => found,
        SelectorKind::Class | SelectorKind::Id => found.parent().unwrap_or(found),
    })
}

/// Returns every node under `root` (inclusive) matching `selector`, in
/// document order.
///
/// # Notes
///
/// A class or id match whose start tag has no parent is dropped, whereas
/// [`match_first`] returns the start tag itself.
#[must_use]
pub fn match_all<'a>(selector: &Selector<'_>, root: Node<'a>, source: &str) -> Vec<Node<'a>> {
    let found = tree::find_all(root, |node| is_match(selector, node, source));

    match selector.kind() {
        SelectorKind::Tag => found,
        SelectorKind::Class | SelectorKind::Id => {
            found.into_iter().filter_map(|node| node.parent()).collect()
        }
    }
}

/// Returns the tag name of an element node, read from its opening tag.
pub(crate) fn tag_name<'a>(element: Node<'_>, source: &'a str) -> Option<&'a str> {
    element
        .child(0)
        .and_then(|start_tag| start_tag.child(1))
        .map(|name| node_text(name, source))
}

fn is_match(selector: &Selector<'_>, node: Node<'_>, source: &str) -> bool {
    match selector.kind() {
        SelectorKind::Tag => match NodeKind::of(node) {
            NodeKind::Element => tag_name(node, source) == Some(selector.matched()),
            NodeKind::Document
            | NodeKind::StartTag
            | NodeKind::EndTag
            | NodeKind::Attribute
            | NodeKind::Text
            | NodeKind::Entity
            | NodeKind::Other => false,
        },
        SelectorKind::Class => {
            element_with_attribute_equals(node, "class", selector.matched(), source)
        }
        SelectorKind::Id => element_with_attribute_equals(node, "id", selector.matched(), source),
    }
}
