//! Inner text extraction.
//!
//! Text is gathered from every `text` and `entity` descendant in document
//! order. Each text node has runs of spaces collapsed and line breaks removed.
//! `tree-sitter-html` leaves surrounding whitespace out of text nodes, so a
//! space sitting directly before or after a node's span in the buffer is
//! re-attached to that node. Without this, `static <a>Foo</a>` would read
//! `staticFoo`.

use tracing::trace;
use tree_sitter::Node;

use crate::entities::decode_entity;
use crate::node_kind::NodeKind;
use crate::tree::{self, node_text};

/// Extracts the normalised text content of the subtree rooted at `root`.
///
/// Unknown entities are skipped. The result is not trimmed.
#[must_use]
pub fn inner_text(root: Node<'_>, source: &str) -> String {
    let fragments = tree::find_all(root, |node| {
        matches!(NodeKind::of(node), NodeKind::Text | NodeKind::Entity)
    });

    let mut text = String::new();
    for node in fragments {
        match NodeKind::of(node) {
            NodeKind::Text => push_text(&mut text, node, source),
            NodeKind::Entity => {
                let literal = node_text(node, source);
                match decode_entity(literal) {
                    Some(decoded) => text.push(decoded),
                    None => trace!(entity = literal, "skipping unknown entity"),
                }
            }
            NodeKind::Document
            | NodeKind::Element
            | NodeKind::StartTag
            | NodeKind::EndTag
            | NodeKind::Attribute
            | NodeKind::Other => {}
        }
    }

    text
}

fn push_text(text: &mut String, node: Node<'_>, source: &str) {
    let bytes = source.as_bytes();
    let range = node.byte_range();

    let space_before = range
        .start
        .checked_sub(1)
        .and_then(|index| bytes.get(index))
        == Some(&b' ');
    let space_after = bytes.get(range.end) == Some(&b' ');

    if space_before {
        text.push(' ');
    }
    collapse_whitespace(node_text(node, source), text);
    if space_after {
        text.push(' ');
    }
}

/// Appends `raw` to `out`, collapsing runs of spaces to one and dropping
/// carriage returns and line feeds.
///
/// Line breaks do not end a run of spaces, so `"a \n b"` becomes `"a b"` and
/// `"a\nb"` becomes `"ab"`.
fn collapse_whitespace(raw: &str, out: &mut String) {
    let mut last_was_space = false;
    for ch in raw.chars() {
        if matches!(ch, '\n' | '\r') || (last_was_space && ch == ' ') {
            continue;
        }
        last_was_space = ch == ' ';
        out.push(ch);
    }
}
