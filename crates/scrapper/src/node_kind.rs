//! Closed set of HTML node kinds the query engine dispatches on.
//!
//! Tree-sitter reports node kinds as strings. The matcher, the attribute
//! resolver, and the text extractor only care about a handful of them, so the
//! grammar names are folded into [`NodeKind`] once and matched exhaustively
//! from there on.

use std::fmt;

/// Kind of a node in a `tree-sitter-html` syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The root of a parsed HTML document.
    Document,
    /// A complete element: start tag, children, and end tag.
    Element,
    /// The `<tag attr="...">` portion of an element.
    StartTag,
    /// The `</tag>` portion of an element.
    EndTag,
    /// A `name="value"` pair inside a start tag.
    Attribute,
    /// A run of character data.
    Text,
    /// A character reference such as `&nbsp;`.
    Entity,
    /// Any other grammar node (doctype, comments, script and style
    /// elements, punctuation, error nodes).
    Other,
}

impl NodeKind {
    /// Maps a `tree-sitter-html` grammar kind onto the closed set.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrapper::NodeKind;
    ///
    /// assert_eq!(NodeKind::from_grammar("start_tag"), NodeKind::StartTag);
    /// assert_eq!(NodeKind::from_grammar("doctype"), NodeKind::Other);
    /// ```
    #[must_use]
    pub fn from_grammar(kind: &str) -> Self {
        match kind {
            "document" => Self::Document,
            "element" => Self::Element,
            "start_tag" => Self::StartTag,
            "end_tag" => Self::EndTag,
            "attribute" => Self::Attribute,
            "text" => Self::Text,
            "entity" => Self::Entity,
            _ => Self::Other,
        }
    }

    /// Returns the kind of a syntax tree node.
    #[must_use]
    pub fn of(node: tree_sitter::Node<'_>) -> Self {
        Self::from_grammar(node.kind())
    }

    /// Returns the grammar name for this kind, or `other` for the catch-all.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Element => "element",
            Self::StartTag => "start_tag",
            Self::EndTag => "end_tag",
            Self::Attribute => "attribute",
            Self::Text => "text",
            Self::Entity => "entity",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
