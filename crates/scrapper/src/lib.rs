//! Selector queries and text extraction over Tree-sitter HTML syntax trees.
//!
//! This crate provides:
//!
//! - **Parsing** via [`HtmlParser`], which wraps Tree-sitter and the
//!   `tree-sitter-html` grammar
//! - **Selector queries** via [`Selectable`], implemented by [`Document`] and
//!   [`Element`], for the three selector forms below
//! - **Text extraction** via [`Element::inner_text`], which decodes entities
//!   and normalises whitespace
//!
//! # Selector Language
//!
//! - `tag` - Matches elements by tag name
//! - `.class` - Matches elements whose `class` attribute equals the value
//! - `#id` - Matches elements whose `id` attribute equals the value
//!
//! There are no combinators or pseudo-classes, and class matching compares
//! the whole attribute value.
//!
//! # Example
//!
//! ```
//! use scrapper::{HtmlParser, Selectable};
//!
//! let mut parser = HtmlParser::new()?;
//! let parsed = parser.parse(
//!     r#"<ul id="nav"><li><a href="all.html">All&nbsp;Classes</a></li></ul>"#,
//! )?;
//! let document = parsed.document()?;
//!
//! if let Some(nav) = document.query_selector("#nav")? {
//!     assert_eq!(nav.tag_name(), "ul");
//!     assert_eq!(nav.inner_text(), "All Classes");
//! }
//!
//! let links = document.query_selector_all("a")?;
//! assert_eq!(links.len(), 1);
//! # Ok::<(), scrapper::ScrapeError>(())
//! ```

mod attribute;
mod document;
mod entities;
mod error;
mod matcher;
mod node_kind;
mod parser;
mod selector;
mod text;
mod tree;

pub use attribute::{attribute_equals, element_with_attribute_equals};
pub use document::{Document, Element, Selectable};
pub use entities::decode_entity;
pub use error::{ScrapeError, SelectorError};
pub use matcher::{match_all, match_first};
pub use node_kind::NodeKind;
pub use parser::{HtmlParser, ParsedHtml, SyntaxErrorInfo};
pub use selector::{Selector, SelectorKind};
pub use text::inner_text;
pub use tree::{find_all, find_first};

#[cfg(test)]
mod tests;
