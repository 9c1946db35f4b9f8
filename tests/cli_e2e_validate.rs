//! End-to-end tests for the `validate` command.

mod common;
use common::prelude::*;

#[test]
fn test_validate_clean_tree() {
    let fixture = TestFixture::new()
        .with_file("default/a.md", "@include b.md\n")
        .with_file("default/b.md", "bee\n");

    fixture
        .command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files scanned: 2"))
        .stdout(predicate::str::contains("Successful: 1"))
        .stdout(predicate::str::contains("[OK] All includes resolved"));
}

#[test]
fn test_validate_reports_failures() {
    let fixture = TestFixture::new()
        .with_roots(&["team"])
        .with_file("default/a.md", "@include gone.md\n")
        .with_file("team/b.yaml", "x: 1\n@include %a.md\n");

    fixture
        .command()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Total includes: 2"))
        .stdout(predicate::str::contains("Failed: 2"))
        .stdout(predicate::str::contains("a.md:1 include not found: gone.md"))
        .stdout(predicate::str::contains("b.yaml:2 include not found: a.md"));
}

#[test]
fn test_validate_json_report() {
    let fixture = TestFixture::new()
        .with_file("default/a.md", "@include b.md\n@include c.md\n")
        .with_file("default/b.md", "bee\n");

    let output = fixture
        .command()
        .arg("validate")
        .arg("--json")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_files"], 2);
    assert_eq!(report["files_with_includes"], 1);
    assert_eq!(report["total_includes"], 2);
    assert_eq!(report["successful_includes"], 1);
    assert_eq!(report["failed_includes"], 1);
    assert_eq!(report["errors"].as_array().unwrap().len(), 1);
}

#[test]
fn test_validate_strict_fails_on_warnings() {
    let fixture = TestFixture::new().with_file("default/a.md", "@include a.md trailing\n");

    fixture.command().arg("validate").assert().success();

    fixture
        .command()
        .arg("validate")
        .arg("--strict")
        .assert()
        .failure()
        .stdout(predicate::str::contains("malformed include directive"));
}

#[test]
fn test_validate_respects_exclude() {
    let fixture = TestFixture::new()
        .with_config("exclude:\n  - \"drafts/**\"\n")
        .with_file("default/ok.md", "fine\n")
        .with_file("default/drafts/wip.md", "@include nowhere.md\n");

    fixture
        .command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files scanned: 1"));
}

#[test]
fn test_validate_empty_roots() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files scanned: 0"));
}
