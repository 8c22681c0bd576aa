//! Behaviour-driven development (BDD) step definitions for scrapper scenarios.

mod scenarios;

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, then, when};

use crate::{Element, HtmlParser, ParsedHtml, Selectable, SelectorError};

const FLOAT_PAGE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/Float.html"
));

// =============================================================================
// Test World
// =============================================================================

/// State shared across BDD steps.
#[derive(Default)]
struct TestWorld {
    /// Parsed HTML the queries run against.
    parsed: Option<ParsedHtml>,
    /// Elements returned by the last query.
    elements: Vec<ElementSnapshot>,
    /// Error returned by the last query.
    error: Option<SelectorError>,
}

/// Snapshot of an element (owned, not borrowed from the parse result).
#[derive(Debug)]
struct ElementSnapshot {
    tag_name: String,
    html: String,
    inner_text: String,
}

impl From<&Element<'_>> for ElementSnapshot {
    fn from(element: &Element<'_>) -> Self {
        Self {
            tag_name: element.tag_name().to_owned(),
            html: element.to_html().to_owned(),
            inner_text: element.inner_text(),
        }
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

/// Strips surrounding double quotes and unescapes embedded ones.
fn unquote(s: &str) -> String {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
        .replace("\\\"", "\"")
}

fn parse_into(world: &RefCell<TestWorld>, source: &str) {
    let mut parser = HtmlParser::new().expect("parser init");
    world.borrow_mut().parsed = Some(parser.parse(source).expect("parse"));
}

// =============================================================================
// Given Steps
// =============================================================================

#[given("the Float javadoc page")]
fn given_float_page(world: &RefCell<TestWorld>) {
    parse_into(world, FLOAT_PAGE);
}

#[given("HTML source {html}")]
fn given_html_source(world: &RefCell<TestWorld>, html: String) {
    parse_into(world, &unquote(&html));
}

// =============================================================================
// When Steps
// =============================================================================

#[when("the selector {selector} is queried")]
fn when_query_selector(world: &RefCell<TestWorld>, selector: String) {
    let mut w = world.borrow_mut();
    let query = unquote(&selector);
    let parsed = w
        .parsed
        .as_ref()
        .expect("HTML should be parsed before querying");
    let document = parsed.document().expect("document");

    let (elements, error) = match document.query_selector(&query) {
        Ok(found) => (found.iter().map(ElementSnapshot::from).collect(), None),
        Err(error) => (Vec::new(), Some(error)),
    };
    w.elements = elements;
    w.error = error;
}

#[when("all elements matching {selector} are queried")]
fn when_query_selector_all(world: &RefCell<TestWorld>, selector: String) {
    let mut w = world.borrow_mut();
    let query = unquote(&selector);
    let parsed = w
        .parsed
        .as_ref()
        .expect("HTML should be parsed before querying");
    let document = parsed.document().expect("document");

    let (elements, error) = match document.query_selector_all(&query) {
        Ok(found) => (found.iter().map(ElementSnapshot::from).collect(), None),
        Err(error) => (Vec::new(), Some(error)),
    };
    w.elements = elements;
    w.error = error;
}

// =============================================================================
// Then Steps
// =============================================================================

#[then("an element is found")]
fn then_element_found(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    assert!(w.error.is_none(), "Expected success, got {:?}", w.error);
    assert_eq!(w.elements.len(), 1, "Expected one element, got {:?}", w.elements);
}

#[then("no element is found")]
fn then_no_element_found(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    assert!(w.error.is_none(), "Expected success, got {:?}", w.error);
    assert!(w.elements.is_empty(), "Expected no element, got {:?}", w.elements);
}

#[then("{count} elements are found")]
fn then_count_found(world: &RefCell<TestWorld>, count: usize) {
    let w = world.borrow();
    assert!(w.error.is_none(), "Expected success, got {:?}", w.error);
    assert_eq!(
        w.elements.len(),
        count,
        "Expected {count} elements, got {:?}",
        w.elements
    );
}

#[then("the element's tag name is {tag}")]
fn then_tag_name(world: &RefCell<TestWorld>, tag: String) {
    let w = world.borrow();
    let element = w.elements.first().expect("an element should be found");
    assert_eq!(element.tag_name, unquote(&tag));
}

#[then("the element's HTML is {html}")]
fn then_html(world: &RefCell<TestWorld>, html: String) {
    let w = world.borrow();
    let element = w.elements.first().expect("an element should be found");
    assert_eq!(element.html, unquote(&html));
}

#[then("the inner text is {text}")]
fn then_inner_text(world: &RefCell<TestWorld>, text: String) {
    let w = world.borrow();
    let element = w.elements.first().expect("an element should be found");
    assert_eq!(element.inner_text, unquote(&text));
}

#[then("the query fails with a selector error")]
fn then_query_fails(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    assert!(
        w.error.is_some(),
        "Expected a selector error, got {:?}",
        w.elements
    );
    assert!(w.elements.is_empty());
}
