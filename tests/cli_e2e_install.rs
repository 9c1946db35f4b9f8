//! End-to-end tests for the `install` command.

mod common;
use common::prelude::*;

#[test]
fn test_install_local_library_registers_root() {
    let fixture = TestFixture::new()
        .with_file("bundle/policy.md", "shared policy\n")
        .with_file("work/a.md", "@include %policy.md\n");

    fixture
        .command()
        .arg("install")
        .arg(fixture.file("bundle"))
        .arg("--dest")
        .arg(fixture.file("libs/bundle"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed"));

    assert!(fixture.file("libs/bundle/policy.md").is_file());
    let config = std::fs::read_to_string(fixture.config_path()).unwrap();
    assert!(config.contains("libs/bundle"));

    fixture
        .command()
        .arg("resolve")
        .arg(fixture.file("work/a.md"))
        .assert()
        .success()
        .stdout(predicate::str::contains("shared policy"));
}

#[test]
fn test_install_missing_source_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("install")
        .arg(fixture.file("no-such-bundle"))
        .arg("--dest")
        .arg(fixture.file("libs/x"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to install library"));

    assert!(!fixture.config_path().exists());
}

#[test]
fn test_install_refuses_non_empty_foreign_destination() {
    let fixture = TestFixture::new()
        .with_file("bundle/policy.md", "shared policy\n")
        .with_file("mydocs/thesis.txt", "keep me\n");

    fixture
        .command()
        .arg("install")
        .arg(fixture.file("bundle"))
        .arg("--dest")
        .arg(fixture.file("mydocs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not created by a previous install"));

    assert_eq!(
        std::fs::read_to_string(fixture.file("mydocs/thesis.txt")).unwrap(),
        "keep me\n"
    );
    assert!(!fixture.config_path().exists());
}

#[test]
fn test_reinstall_over_previous_install() {
    let fixture = TestFixture::new().with_file("bundle/policy.md", "v1\n");

    for _ in 0..2 {
        fixture
            .command()
            .arg("install")
            .arg(fixture.file("bundle"))
            .arg("--dest")
            .arg(fixture.file("libs/bundle"))
            .assert()
            .success();
    }

    assert!(fixture.file("libs/bundle/.rulestitch-library").is_file());
}
