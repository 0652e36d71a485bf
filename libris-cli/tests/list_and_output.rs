//! Integration tests for `list` and the machine-readable output formats.

mod common;

use common::TestEnv;
use predicates::prelude::*;

fn populated() -> TestEnv {
    let env = TestEnv::new();
    env.add_book("Dune", "Frank Herbert", Some("Sci-Fi"));
    env.add_book("Emma", "Jane Austen", Some("Classics"));
    env.add_book("Foundation", "Isaac Asimov", Some("sci-fi"));
    env.run(&["borrow", "Emma"]);
    env
}

#[test]
fn test_list_shows_only_available_books() {
    let env = populated();

    assert_eq!(
        env.list(),
        "- 'Dune' by Frank Herbert (Available)\n\
         - 'Foundation' by Isaac Asimov (Available)\n"
    );
}

#[test]
fn test_list_empty_catalog() {
    let env = TestEnv::new();

    env.command()
        .arg("list")
        .assert()
        .success()
        .stdout("No available books.\n");
}

#[test]
fn test_list_category_includes_borrowed_books() {
    let env = populated();

    let out = env.run(&["list", "SCI-FI"]);
    assert_eq!(out.lines().count(), 2);

    let out = env.run(&["list", "classics"]);
    assert_eq!(out, "- 'Emma' by Jane Austen (Borrowed)\n");

    // Exact match only
    let out = env.run(&["list", "sci"]);
    assert_eq!(out, "No available books in the 'sci' category.\n");
}

#[test]
fn test_list_json() {
    let env = populated();

    let out = env.run(&["list", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    let books = value.as_array().expect("array");

    assert_eq!(books.len(), 2);
    assert_eq!(books[0]["title"], "Dune");
    assert_eq!(books[0]["author"], "Frank Herbert");
    assert_eq!(books[0]["category"], "Sci-Fi");
    assert_eq!(books[0]["available"], true);
}

#[test]
fn test_list_json_empty_is_empty_array() {
    let env = TestEnv::new();

    let out = env.run(&["list", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn test_list_csv() {
    let env = populated();

    let out = env.run(&["list", "--format", "csv"]);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("title,author,category,available"));
    assert_eq!(lines.next(), Some("Dune,Frank Herbert,Sci-Fi,true"));
    assert_eq!(lines.next(), Some("Foundation,Isaac Asimov,sci-fi,true"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_list_tsv_via_env() {
    let env = populated();

    env.command()
        .env("LIBRIS_OUTPUT_FORMAT", "TSV")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("title\tauthor\tcategory\tavailable\n"));
}

#[test]
fn test_search_json_reports_borrowed() {
    let env = populated();

    let out = env.run(&["search", "emma", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(value[0]["available"], false);
}

#[test]
fn test_invalid_format_rejected() {
    let env = TestEnv::new();

    env.command()
        .args(["list", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
