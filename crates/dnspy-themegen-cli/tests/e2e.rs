//! End-to-end tests for the dnspy-themegen binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../dnspy-themegen/tests/fixtures")
        .join(name)
}

fn bin() -> Command {
    Command::cargo_bin("dnspy-themegen").unwrap()
}

#[test]
fn converts_scheme_onto_donor() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("night_owl.dntheme");

    bin()
        .arg("-i")
        .arg(fixture("night_owl.xml"))
        .arg("-d")
        .arg(fixture("dark.dntheme"))
        .arg("-o")
        .arg(&output)
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote theme 'Night Owl'"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains(r#"name="night_owl""#));
    assert!(written.contains(r#"menu-name="Night Owl""#));
    assert!(written.contains(r#"order="9001""#));
    assert!(written.contains(r##"<color name="opcode" fg="#c792ea"/>"##));
    assert!(written.contains(
        r##"<color name="treeviewitemselected" fg="#FFFFFF" bg="#1FFFFFFF"/>"##
    ));
    assert!(written.contains(r##"<color name="unknownwidget" fg="#101010" bg="#202020"/>"##));
}

#[test]
fn warns_about_unmapped_fields() {
    let dir = tempfile::tempdir().unwrap();

    bin()
        .arg("--input")
        .arg(fixture("night_owl.xml"))
        .arg("--donor")
        .arg(fixture("dark.dntheme"))
        .arg("--output")
        .arg(dir.path().join("out.dntheme"))
        .env("RUST_LOG", "warn")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown key"))
        .stderr(predicate::str::contains("wrote theme").not());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.dntheme");

    bin()
        .arg("-i")
        .arg(dir.path().join("missing.xml"))
        .arg("-d")
        .arg(fixture("dark.dntheme"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: failed to load Rider scheme"));

    assert!(!output.exists());
}

#[test]
fn malformed_donor_fails() {
    let dir = tempfile::tempdir().unwrap();
    let donor = dir.path().join("broken.dntheme");
    std::fs::write(&donor, "<theme><colors><color fg=\"#000\"/></colors></theme>").unwrap();

    bin()
        .arg("-i")
        .arg(fixture("night_owl.xml"))
        .arg("-d")
        .arg(&donor)
        .arg("-o")
        .arg(dir.path().join("out.dntheme"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load donor theme"))
        .stderr(predicate::str::contains("missing required attribute 'name'"));
}

#[test]
fn requires_all_paths() {
    bin()
        .arg("-i")
        .arg(fixture("night_owl.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--donor"));
}
