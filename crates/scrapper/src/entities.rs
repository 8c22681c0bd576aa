//! Character entity decoding.
//!
//! Only the named references that show up in generated documentation pages
//! are recognised. Anything else is reported as unknown and left to the
//! caller.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const ENTITY_TABLE: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&quot;", '"'),
    ("&apos;", '\''),
    ("&nbsp;", ' '),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&middot;", '\u{b7}'),
];

static ENTITIES: Lazy<HashMap<&'static str, char>> =
    Lazy::new(|| ENTITY_TABLE.iter().copied().collect());

/// Decodes an entity literal such as `&nbsp;` into its character.
///
/// `&nbsp;` decodes to a plain ASCII space. The literal must include the
/// leading `&` and trailing `;`.
///
/// # Examples
///
/// ```
/// assert_eq!(scrapper::decode_entity("&amp;"), Some('&'));
/// assert_eq!(scrapper::decode_entity("&copy;"), None);
/// ```
#[must_use]
pub fn decode_entity(literal: &str) -> Option<char> {
    ENTITIES.get(literal).copied()
}
