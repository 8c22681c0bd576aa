//! Queryable views over a parsed HTML tree.
//!
//! A [`Document`] pairs a root node with the source buffer the tree was
//! parsed from. Query results are [`Element`]s, which carry a copy of their
//! document handle so they can be queried in turn. Both types are `Copy`: the
//! buffer is borrowed from the parse result and never cloned.

use std::fmt;

use tracing::debug;
use tree_sitter::Node;

use crate::error::{ScrapeError, SelectorError};
use crate::matcher::{self, tag_name};
use crate::node_kind::NodeKind;
use crate::selector::Selector;
use crate::text;
use crate::tree::node_text;

/// Selector queries shared by documents and elements.
///
/// Queries are scoped to the receiver's subtree, and the receiver itself is
/// a candidate.
pub trait Selectable<'a> {
    /// Returns the first element matching `query` in document order.
    ///
    /// `Ok(None)` means the selector was valid but nothing matched.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectorError`] when `query` is empty or a bare `.`/`#`.
    fn query_selector(&self, query: &str) -> Result<Option<Element<'a>>, SelectorError>;

    /// Returns every element matching `query` in document order.
    ///
    /// A valid selector that matches nothing yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectorError`] when `query` is empty or a bare `.`/`#`.
    fn query_selector_all(&self, query: &str) -> Result<Vec<Element<'a>>, SelectorError>;
}

/// A document or element root bound to its source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    root: Node<'a>,
    source: &'a str,
}

impl<'a> Document<'a> {
    /// Binds `root` and the buffer it was parsed from into a document.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::NotAnElement`] unless `root` is a `document`
    /// or `element` node.
    pub fn new(root: Node<'a>, source: &'a str) -> Result<Self, ScrapeError> {
        match NodeKind::of(root) {
            NodeKind::Document | NodeKind::Element => Ok(Self { root, source }),
            NodeKind::StartTag
            | NodeKind::EndTag
            | NodeKind::Attribute
            | NodeKind::Text
            | NodeKind::Entity
            | NodeKind::Other => Err(ScrapeError::not_an_element(root.kind())),
        }
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root(&self) -> Node<'a> {
        self.root
    }

    /// Returns the source buffer shared by every node in the tree.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }
}

impl<'a> Selectable<'a> for Document<'a> {
    fn query_selector(&self, query: &str) -> Result<Option<Element<'a>>, SelectorError> {
        query_first(*self, self.root, query)
    }

    fn query_selector_all(&self, query: &str) -> Result<Vec<Element<'a>>, SelectorError> {
        query_all(*self, self.root, query)
    }
}

/// An element found by a selector query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    node: Node<'a>,
    document: Document<'a>,
}

impl<'a> Element<'a> {
    /// Returns the underlying syntax tree node.
    #[must_use]
    pub const fn node(&self) -> Node<'a> {
        self.node
    }

    /// Returns the document this element was found in.
    #[must_use]
    pub const fn document(&self) -> Document<'a> {
        self.document
    }

    /// Returns the element's normalised text content.
    ///
    /// Entities are decoded, runs of spaces collapse to one, and line breaks
    /// are dropped. The result is not trimmed.
    #[must_use]
    pub fn inner_text(&self) -> String {
        text::inner_text(self.node, self.document.source)
    }

    /// Returns the element's source text, tags included, exactly as it
    /// appears in the buffer.
    #[must_use]
    pub fn to_html(&self) -> &'a str {
        node_text(self.node, self.document.source)
    }

    /// Returns the tag name from the element's opening tag.
    ///
    /// Returns an empty string when the node has no opening tag to read.
    #[must_use]
    pub fn tag_name(&self) -> &'a str {
        tag_name(self.node, self.document.source).unwrap_or_default()
    }
}

impl<'a> Selectable<'a> for Element<'a> {
    fn query_selector(&self, query: &str) -> Result<Option<Element<'a>>, SelectorError> {
        query_first(self.document, self.node, query)
    }

    fn query_selector_all(&self, query: &str) -> Result<Vec<Element<'a>>, SelectorError> {
        query_all(self.document, self.node, query)
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_html())
    }
}

fn query_first<'a>(
    document: Document<'a>,
    scope: Node<'a>,
    query: &str,
) -> Result<Option<Element<'a>>, SelectorError> {
    let selector = Selector::parse(query)?;
    let found = matcher::match_first(&selector, scope, document.source);
    debug!(selector = query, found = found.is_some(), "query_selector");
    Ok(found.map(|node| Element { node, document }))
}

fn query_all<'a>(
    document: Document<'a>,
    scope: Node<'a>,
    query: &str,
) -> Result<Vec<Element<'a>>, SelectorError> {
    let selector = Selector::parse(query)?;
    let elements: Vec<Element<'a>> = matcher::match_all(&selector, scope, document.source)
        .into_iter()
        .map(|node| Element { node, document })
        .collect();
    debug!(selector = query, matches = elements.len(), "query_selector_all");
    Ok(elements)
}
