//! Error types for HTML parsing and selector queries.
//!
//! Selector failures are kept in their own [`SelectorError`] type because
//! they are the only errors a query can raise once a document exists. Parsing
//! and document construction report through [`ScrapeError`].

use thiserror::Error;

/// Errors raised while parsing a selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SelectorError {
    /// The selector string was empty.
    #[error("selector must not be empty")]
    EmptySelector,

    /// The selector was a bare `.` or `#` prefix with nothing to match.
    #[error("malformed selector: '{query}'")]
    MalformedSelector {
        /// The selector text as supplied by the caller.
        query: String,
    },
}

impl SelectorError {
    /// Creates a malformed selector error.
    #[must_use]
    pub fn malformed(query: impl Into<String>) -> Self {
        Self::MalformedSelector {
            query: query.into(),
        }
    }
}

/// Errors from parsing HTML and binding a document to a syntax tree.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScrapeError {
    /// Failed to initialise the Tree-sitter parser with the HTML grammar.
    #[error("failed to initialise HTML parser: {message}")]
    ParserInit {
        /// Description of the failure.
        message: String,
    },

    /// Tree-sitter did not produce a syntax tree.
    #[error("failed to parse HTML: {message}")]
    Parse {
        /// Description of the failure.
        message: String,
    },

    /// The node offered as a document root is neither a document nor an
    /// element.
    #[error("node is not an HTML element: found '{kind}'")]
    NotAnElement {
        /// The grammar kind of the rejected node.
        kind: String,
    },

    /// A selector could not be parsed.
    ///
    /// Lets callers that parse and query in one function propagate both
    /// error types with `?`.
    #[error(transparent)]
    Selector(#[from] SelectorError),
}

impl ScrapeError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(message: impl Into<String>) -> Self {
        Self::ParserInit {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates a "not an element" error for a rejected root node kind.
    #[must_use]
    pub fn not_an_element(kind: impl Into<String>) -> Self {
        Self::NotAnElement { kind: kind.into() }
    }
}
