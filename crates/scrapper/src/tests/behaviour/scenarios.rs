//! Scenario bindings for the `scrapper` BDD feature file.
//!
//! These functions bind Gherkin scenario names to the step definitions in the
//! parent module.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::scenario;

use super::TestWorld;

/// Fixture providing the shared BDD world.
#[fixture]
fn world() -> RefCell<TestWorld> {
    super::world()
}

#[scenario(
    path = "tests/features/scrapper.feature",
    name = "Tag selectors return the first element in document order"
)]
fn tag_selector_first_match(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scrapper.feature",
    name = "Class selectors resolve to the owning element"
)]
fn class_selector_resolves_parent(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scrapper.feature",
    name = "Id selectors decode entities in the inner text"
)]
fn id_selector_inner_text(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scrapper.feature",
    name = "All tables on the page are found"
)]
fn all_tables_found(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scrapper.feature",
    name = "A well-formed selector with no matches"
)]
fn single_query_no_match(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scrapper.feature",
    name = "Querying all with no matches still succeeds"
)]
fn all_query_no_match(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scrapper.feature",
    name = "A bare class prefix is rejected"
)]
fn bare_prefix_rejected(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scrapper.feature",
    name = "An empty selector is rejected"
)]
fn empty_selector_rejected(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/scrapper.feature",
    name = "Boundary spaces survive inline markup"
)]
fn boundary_spaces_survive(world: RefCell<TestWorld>) {
    drop(world);
}
