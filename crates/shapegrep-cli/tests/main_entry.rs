//! Integration tests for the `shapegrep` binary entry point.
//!
//! Verifies exit statuses, configuration flags and user-facing error
//! handling through the real configuration loader.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn source_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("calc.py"), "x = a + (a + b)\n").expect("write calc.py");
    fs::write(dir.path().join("lib.rs"), "fn f() { let y = g(1); }\n").expect("write lib.rs");
    dir
}

#[test]
fn matches_exit_successfully() {
    let dir = source_dir();
    let mut command = cargo_bin_cmd!("shapegrep");
    command
        .current_dir(dir.path())
        .args(["--output", "human", "a + *", "calc.py"]);
    command
        .assert()
        .success()
        .stdout(contains("calc.py:1:5: a + (a + b)"))
        .stdout(contains("$1 = b"));
}

#[test]
fn no_matches_exit_with_one() {
    let dir = source_dir();
    let mut command = cargo_bin_cmd!("shapegrep");
    command.current_dir(dir.path()).args(["g(*, *)", "lib.rs"]);
    command.assert().code(1).stdout(predicate::str::is_empty());
}

#[test]
fn config_flags_precede_the_pattern() {
    let dir = source_dir();
    let mut command = cargo_bin_cmd!("shapegrep");
    command.current_dir(dir.path()).args([
        "--log-filter",
        "error",
        "--log-format=json",
        "--count",
        "--output",
        "human",
        "g(*)",
        "lib.rs",
    ]);
    command.assert().success().stdout("lib.rs:1\n");
}

#[test]
fn environment_selects_the_default_language() {
    let dir = source_dir();
    fs::write(dir.path().join("snippet"), "total = a + b\n").expect("write snippet");
    let mut command = cargo_bin_cmd!("shapegrep");
    command
        .current_dir(dir.path())
        .env("SHAPEGREP_DEFAULT_LANGUAGE", "python")
        .args(["--output", "json", "a + b", "snippet"]);
    command.assert().success().stdout(contains("\"text\":\"a + b\""));
}

#[test]
fn unsupported_extension_exits_with_two() {
    let dir = source_dir();
    fs::write(dir.path().join("notes.txt"), "a + b\n").expect("write notes");
    let mut command = cargo_bin_cmd!("shapegrep");
    command.current_dir(dir.path()).args(["a + b", "notes.txt"]);
    command
        .assert()
        .code(2)
        .stderr(contains("unsupported file extension: txt"));
}

#[test]
fn missing_pattern_exits_with_two() {
    let mut command = cargo_bin_cmd!("shapegrep");
    command.assert().code(2).stderr(contains("PATTERN"));
}
