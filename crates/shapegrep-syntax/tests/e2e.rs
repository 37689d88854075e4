//! End-to-end tests for shapegrep-syntax using insta for snapshot testing.
//!
//! These tests exercise the public API across happy and unhappy paths, with
//! snapshot testing for structured outputs.

use rstest::{fixture, rstest};

use shapegrep_syntax::{Parser, Pattern, SupportedLanguage, SyntaxError, fresh_name, search};

#[path = "e2e/snapshots.rs"]
mod snapshots;

// =============================================================================
// Happy Path: Pattern Matching
// =============================================================================

/// Fixture providing a Python parser for pattern matching tests.
#[fixture]
fn python_parser() -> Parser {
    Parser::new(SupportedLanguage::Python).unwrap_or_else(|err| panic!("parser: {err}"))
}

#[rstest]
fn nested_and_sibling_matches_are_all_found(mut python_parser: Parser) {
    let source = python_parser
        .parse("values = a + (a + b), a + sqrt(2)")
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let pattern = Pattern::compile("a + *", SupportedLanguage::Python)
        .unwrap_or_else(|err| panic!("pattern: {err}"));

    let texts: Vec<_> = pattern.find_all(&source).iter().map(|m| m.text()).collect();

    assert_eq!(texts, ["a + (a + b)", "a + b", "a + sqrt(2)"]);
}

#[rstest]
fn captures_are_ordered_by_wildcard(mut python_parser: Parser) {
    let source = python_parser
        .parse("result = clamp(lo, value * 2, hi)")
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let pattern = Pattern::compile("clamp(*, *, *)", SupportedLanguage::Python)
        .unwrap_or_else(|err| panic!("pattern: {err}"));

    let found = pattern
        .find_first(&source)
        .unwrap_or_else(|| panic!("expected a match"));
    let captured: Vec<_> = found.captures().iter().map(|c| c.text()).collect();

    assert_eq!(captured, ["lo", "value * 2", "hi"]);
}

#[rstest]
#[case(SupportedLanguage::Rust, "fn main() { let x = 1; let y = 2; }", 3)]
#[case(SupportedLanguage::Python, "x = 1\ny = 2", 2)]
#[case(SupportedLanguage::TypeScript, "let x = 1;\nlet y = 2;", 2)]
fn lone_wildcard_counts_every_node(
    #[case] language: SupportedLanguage,
    #[case] text: &str,
    #[case] minimum: usize,
) {
    let mut parser = Parser::new(language).unwrap_or_else(|err| panic!("parser: {err}"));
    let parsed = parser
        .parse(text)
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let pattern = Pattern::compile("*", language).unwrap_or_else(|err| panic!("pattern: {err}"));

    let total = search::count(&pattern, &parsed);

    assert_eq!(total, parsed.node_count());
    assert!(total > minimum);
}

#[test]
fn text_helpers_search_raw_source() {
    let pattern = Pattern::compile("a+b", SupportedLanguage::Python)
        .unwrap_or_else(|err| panic!("pattern: {err}"));
    let text = "sqrt(a +b)/(a+ b)";

    let first = search::find_first_range_in(&pattern, text)
        .unwrap_or_else(|err| panic!("search: {err}"));
    let last = search::find_last_range_in(&pattern, text)
        .unwrap_or_else(|err| panic!("search: {err}"));

    assert_eq!(first, Some(5..9));
    assert_eq!(last, Some(12..16));
    assert!(search::occurs_in(&pattern, text).unwrap_or_else(|err| panic!("search: {err}")));
}

#[test]
fn placeholder_avoids_identifiers_in_the_pattern() {
    let pattern = Pattern::compile("wildcard1(*, wildcard)", SupportedLanguage::Python)
        .unwrap_or_else(|err| panic!("pattern: {err}"));

    assert_eq!(pattern.placeholder(), "wildcard2");
    assert_eq!(fresh_name("wildcard1(wildcard2)", "wildcard"), "wildcard3");
}

// =============================================================================
// Unhappy Path
// =============================================================================

#[rstest]
#[case("")]
#[case("   \n\t")]
#[case("f(*")]
#[case("a + + + ")]
fn malformed_patterns_fail_to_compile(#[case] text: &str) {
    let error = Pattern::compile(text, SupportedLanguage::Python).expect_err("should fail");
    assert!(matches!(error, SyntaxError::PatternCompileError { .. }));
}

#[rstest]
fn strict_parse_reports_the_error_location(mut python_parser: Parser) {
    let error = python_parser
        .parse_strict("x = 1\ndef broken(\n")
        .expect_err("should fail");

    assert!(matches!(error, SyntaxError::ParseError { .. }));
    assert!(error.to_string().contains("line "), "got: {error}");
}

#[rstest]
fn mismatched_language_yields_no_matches(mut python_parser: Parser) {
    let source = python_parser
        .parse("x = 1")
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let pattern = Pattern::compile("*", SupportedLanguage::TypeScript)
        .unwrap_or_else(|err| panic!("pattern: {err}"));

    assert_eq!(search::count(&pattern, &source), 0);
    assert!(!search::occurs(&pattern, &source));
}
