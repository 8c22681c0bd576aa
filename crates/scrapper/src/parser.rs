//! Tree-sitter HTML parsing wrapper.
//!
//! This module owns the only place the crate touches the raw Tree-sitter
//! parser. It produces a [`ParsedHtml`] that keeps the syntax tree and its
//! source buffer together so documents and elements can borrow from both.

use std::ops::Range;

use crate::document::Document;
use crate::error::ScrapeError;

/// Result of parsing an HTML buffer.
///
/// Tree-sitter is error-tolerant, so a parse result may contain both a usable
/// tree and error nodes.
#[derive(Debug)]
pub struct ParsedHtml {
    tree: tree_sitter::Tree,
    source: String,
}

impl ParsedHtml {
    /// Returns the parsed syntax tree.
    #[must_use]
    pub const fn tree(&self) -> &tree_sitter::Tree {
        &self.tree
    }

    /// Returns the source buffer that was parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the `document` node at the root of the tree.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Binds the root of the tree and the source buffer into a [`Document`].
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::NotAnElement`] if the grammar produced a root
    /// that is not a `document` node.
    pub fn document(&self) -> Result<Document<'_>, ScrapeError> {
        Document::new(self.root_node(), &self.source)
    }

    /// Returns whether the tree contains any ERROR or MISSING nodes.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        has_error_nodes(self.tree.root_node())
    }

    /// Collects all syntax errors found in the tree.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        let mut errors = Vec::new();
        collect_error_nodes(self.tree.root_node(), &self.source, &mut errors);
        errors
    }
}

/// Information about a syntax error found during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error in the source.
    pub byte_range: Range<usize>,
    /// Line number (one-based) where the error starts.
    pub line: u32,
    /// Column number (one-based) where the error starts.
    pub column: u32,
    /// A snippet of the problematic source text.
    pub context: String,
    /// Human-readable description of the error.
    pub message: String,
}

impl SyntaxErrorInfo {
    fn from_node(node: tree_sitter::Node<'_>, source: &str) -> Self {
        let byte_range = node.byte_range();

        // Long error spans are cut to keep diagnostics on one line.
        let context = source
            .get(byte_range.clone())
            .map(|s| {
                if s.len() > 50 {
                    let truncated: String = s.chars().take(47).collect();
                    format!("{truncated}...")
                } else {
                    s.to_owned()
                }
            })
            .unwrap_or_default();

        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_owned()
        };

        let start = node.start_position();
        let line = u32::try_from(start.row.saturating_add(1)).unwrap_or(u32::MAX);
        let column = u32::try_from(start.column.saturating_add(1)).unwrap_or(u32::MAX);

        Self {
            byte_range,
            line,
            column,
            context,
            message,
        }
    }
}

/// Tree-sitter parser configured with the HTML grammar.
pub struct HtmlParser {
    inner: tree_sitter::Parser,
}

impl HtmlParser {
    /// Creates a parser for HTML.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar is incompatible with the linked
    /// Tree-sitter runtime.
    pub fn new() -> Result<Self, ScrapeError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&tree_sitter_html::LANGUAGE.into())
            .map_err(|e| ScrapeError::parser_init(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Parses an HTML buffer.
    ///
    /// Malformed markup still yields a tree; check
    /// [`ParsedHtml::has_errors`] when that matters.
    ///
    /// # Errors
    ///
    /// Returns an error if Tree-sitter fails to produce a tree at all.
    pub fn parse(&mut self, source: &str) -> Result<ParsedHtml, ScrapeError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| ScrapeError::parse("parsing failed"))?;

        Ok(ParsedHtml {
            tree,
            source: source.to_owned(),
        })
    }
}

fn has_error_nodes(node: tree_sitter::Node<'_>) -> bool {
    if node.is_error() || node.is_missing() {
        return true;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if has_error_nodes(child) {
            return true;
        }
    }

    false
}

fn collect_error_nodes(
    node: tree_sitter::Node<'_>,
    source: &str,
    errors: &mut Vec<SyntaxErrorInfo>,
) {
    if node.is_error() || node.is_missing() {
        errors.push(SyntaxErrorInfo::from_node(node, source));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, source, errors);
    }
}
