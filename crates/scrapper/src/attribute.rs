//! Attribute lookups on start-tag nodes.
//!
//! `tree-sitter-html` lays an attribute out as
//! `attribute_name "=" quoted_attribute_value`, and the quoted value as
//! `'"' attribute_value '"'`. The resolver reads those fixed child positions
//! and treats any missing child as "no match".

use tree_sitter::Node;

use crate::node_kind::NodeKind;
use crate::tree::{self, node_text};

/// Returns whether `node` is an attribute named `name` whose quoted value is
/// exactly `expected`.
///
/// Unquoted and valueless attributes never match.
#[must_use]
pub fn attribute_equals(node: Node<'_>, name: &str, expected: &str, source: &str) -> bool {
    match NodeKind::of(node) {
        NodeKind::Attribute => {}
        NodeKind::Document
        | NodeKind::Element
        | NodeKind::StartTag
        | NodeKind::EndTag
        | NodeKind::Text
        | NodeKind::Entity
        | NodeKind::Other => return false,
    }

    let names_match = node
        .child(0)
        .is_some_and(|attribute_name| node_text(attribute_name, source) == name);
    if !names_match {
        return false;
    }

    node.child(2)
        .and_then(|quoted| quoted.child(1))
        .is_some_and(|value| node_text(value, source) == expected)
}

/// Returns whether the start tag `node` carries an attribute named `name`
/// whose value is exactly `expected`.
#[must_use]
pub fn element_with_attribute_equals(
    node: Node<'_>,
    name: &str,
    expected: &str,
    source: &str,
) -> bool {
    match NodeKind::of(node) {
        NodeKind::StartTag => {
            tree::find_first(node, |candidate| {
                attribute_equals(candidate, name, expected, source)
            })
            .is_some()
        }
        NodeKind::Document
        | NodeKind::Element
        | NodeKind::EndTag
        | NodeKind::Attribute
        | NodeKind::Text
        | NodeKind::Entity
        | NodeKind::Other => false,
    }
}
