//! End-to-end tests of the `catalog-browser` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn catalog_browser() -> Command {
    let mut cmd = Command::cargo_bin("catalog-browser").unwrap();
    cmd.env_remove("CATALOG_FILTER_MODE")
        .env_remove("CATALOG_FIXTURES_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_lists_embedded_catalog() {
    catalog_browser()
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("Drinks"))
        .stdout(predicate::str::contains("Anna (f)"));
}

#[test]
fn test_user_and_category_flags() {
    catalog_browser()
        .args(["--user", "Anna", "--category", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bread"))
        .stdout(predicate::str::contains("Sugar"))
        .stdout(predicate::str::contains("Apple").not());
}

#[test]
fn test_empty_result_message() {
    catalog_browser()
        .args(["--user", "John"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No products matching selected criteria",
        ));
}

#[test]
fn test_legacy_mode_from_env() {
    catalog_browser()
        .env("CATALOG_FILTER_MODE", "legacy")
        .args(["--category", "1", "--panel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptop"))
        .stdout(predicate::str::contains("[Grocery]"));
}

#[test]
fn test_bad_fixture_dir_fails() {
    catalog_browser()
        .args(["--fixtures", "/definitely/not/here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read fixture"));
}
