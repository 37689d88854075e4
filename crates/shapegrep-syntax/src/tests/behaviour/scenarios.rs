//! Scenario bindings for the `shapegrep-syntax` BDD feature file.
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
    path = "tests/features/shapegrep_syntax.feature",
    name = "Nested matches are reported outermost first"
)]
fn nested_matches_outermost_first(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/shapegrep_syntax.feature",
    name = "Whitespace differences do not prevent a match"
)]
fn whitespace_insensitive_match(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/shapegrep_syntax.feature",
    name = "Operators must agree"
)]
fn operators_must_agree(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/shapegrep_syntax.feature",
    name = "An escaped marker is a literal token"
)]
fn escaped_marker_is_literal(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/shapegrep_syntax.feature",
    name = "Rust statements are matched inside function bodies"
)]
fn rust_statements_match(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/shapegrep_syntax.feature",
    name = "Patterns that differ only in layout are the same pattern"
)]
fn layout_does_not_change_identity(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/shapegrep_syntax.feature",
    name = "A wildcard is not the same pattern as an identifier"
)]
fn wildcard_differs_from_identifier(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/shapegrep_syntax.feature",
    name = "Unparseable pattern text is rejected"
)]
fn unparseable_pattern_rejected(world: RefCell<TestWorld>) {
    drop(world);
}
