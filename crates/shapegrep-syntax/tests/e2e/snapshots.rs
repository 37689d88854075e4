//! Snapshot tests for the `shapegrep-syntax` end-to-end suite.
//!
//! These tests use `insta` to pin stable, user-facing outputs.

use insta::assert_snapshot;

use shapegrep_syntax::{Parser, Pattern, SupportedLanguage, SyntaxError};

fn describe_matches(language: SupportedLanguage, source: &str, pattern: &str) -> String {
    let mut parser = Parser::new(language).unwrap_or_else(|err| panic!("parser: {err}"));
    let parsed = parser
        .parse(source)
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let compiled = Pattern::compile(pattern, language).unwrap_or_else(|err| panic!("pattern: {err}"));

    compiled
        .find_all(&parsed)
        .iter()
        .map(|m| {
            let (line, column) = m.start_position();
            let captures: Vec<_> = m.captures().iter().map(|c| c.text()).collect();
            format!("{line}:{column} {} {captures:?}", m.text())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_language_detection() {
    let extensions = ["rs", "py", "pyi", "ts", "tsx", "json", "md"];
    let results: Vec<_> = extensions
        .iter()
        .map(|ext| {
            let lang = SupportedLanguage::from_extension(ext);
            format!("{ext}: {lang:?}")
        })
        .collect();

    assert_snapshot!(results.join("\n"), @r"
    rs: Some(Rust)
    py: Some(Python)
    pyi: Some(Python)
    ts: Some(TypeScript)
    tsx: Some(TypeScript)
    json: None
    md: None
    ");
}

#[test]
fn snapshot_python_matches_with_captures() {
    let described = describe_matches(
        SupportedLanguage::Python,
        "x = a + (a + b)\ny = a + sqrt(2)\n",
        "a + *",
    );

    assert_snapshot!(described, @r#"
    1:5 a + (a + b) ["(a + b)"]
    1:10 a + b ["b"]
    2:5 a + sqrt(2) ["sqrt(2)"]
    "#);
}

#[test]
fn snapshot_rust_matches_with_captures() {
    let described = describe_matches(
        SupportedLanguage::Rust,
        "fn main() {\n    let a = f(1);\n    let b = f(g(2));\n}\n",
        "let * = f(*);",
    );

    assert_snapshot!(described, @r#"
    2:5 let a = f(1); ["a", "1"]
    3:5 let b = f(g(2)); ["b", "g(2)"]
    "#);
}

#[test]
fn snapshot_rendered_patterns() {
    let rendered: Vec<_> = ["a+*", "f( *,*  )", "x \\* *", "not*"]
        .into_iter()
        .map(|text| {
            Pattern::compile(text, SupportedLanguage::Python)
                .unwrap_or_else(|err| panic!("pattern: {err}"))
                .render()
        })
        .collect();

    assert_snapshot!(rendered.join("\n"), @r"
    a+*
    f( *,*  )
    x \* *
    not *
    ");
}

#[test]
fn snapshot_error_messages() {
    let compile_error = Pattern::compile("", SupportedLanguage::Rust)
        .err()
        .unwrap_or_else(|| panic!("blank pattern should fail"));
    let messages = [
        SyntaxError::capture_out_of_range(2, 1).to_string(),
        SyntaxError::unsupported_extension("json").to_string(),
        compile_error.to_string(),
    ];

    assert_snapshot!(messages.join("\n"), @r"
    capture index 2 out of range for a match with 1 capture(s)
    unsupported file extension: json
    invalid pattern for rust: pattern is empty
    ");
}
