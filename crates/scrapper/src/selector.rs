//! Selector parsing.
//!
//! The grammar is deliberately tiny: a bare tag name, `.class`, or `#id`.
//! There are no combinators, attribute-value selectors, or pseudo-classes, and
//! the query text is used verbatim (no trimming or escaping).

use crate::error::SelectorError;

/// What a [`Selector`] matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    /// Matches elements by tag name.
    Tag,
    /// Matches elements whose `class` attribute equals the value.
    Class,
    /// Matches elements whose `id` attribute equals the value.
    Id,
}

/// A parsed query borrowing its matched value from the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector<'q> {
    kind: SelectorKind,
    matched: &'q str,
}

impl<'q> Selector<'q> {
    /// Parses a selector string.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::EmptySelector`] for an empty query and
    /// [`SelectorError::MalformedSelector`] for a bare `.` or `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrapper::{Selector, SelectorKind};
    ///
    /// let selector = Selector::parse(".colOne")?;
    /// assert_eq!(selector.kind(), SelectorKind::Class);
    /// assert_eq!(selector.matched(), "colOne");
    /// # Ok::<(), scrapper::SelectorError>(())
    /// ```
    pub fn parse(query: &'q str) -> Result<Self, SelectorError> {
        if query.is_empty() {
            return Err(SelectorError::EmptySelector);
        }

        let (kind, matched) = if let Some(class) = query.strip_prefix('.') {
            (SelectorKind::Class, class)
        } else if let Some(id) = query.strip_prefix('#') {
            (SelectorKind::Id, id)
        } else {
            (SelectorKind::Tag, query)
        };

        if matched.is_empty() {
            return Err(SelectorError::malformed(query));
        }

        Ok(Self { kind, matched })
    }

    /// Returns what this selector matches against.
    #[must_use]
    pub const fn kind(&self) -> SelectorKind {
        self.kind
    }

    /// Returns the tag name, class, or id value to match.
    #[must_use]
    pub const fn matched(&self) -> &'q str {
        self.matched
    }
}
