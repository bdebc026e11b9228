//! Tests for the `descriptor-check` binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn descriptor_check() -> Command {
    Command::cargo_bin("descriptor-check").unwrap()
}

#[test]
fn test_check_valid_descriptor() {
    descriptor_check()
        .arg("check")
        .arg(fixture_path("ejb-jar.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Root: {http://java.sun.com/xml/ns/javaee}ejb-jar",
        ))
        .stdout(predicate::str::contains("No diagnostics"));
}

#[test]
fn test_check_web_app_with_filters_and_security() {
    descriptor_check()
        .arg("check")
        .arg(fixture_path("secured-web-app.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No diagnostics"));
}

#[test]
fn test_check_invalid_descriptor_lists_diagnostics() {
    descriptor_check()
        .arg("check")
        .arg(fixture_path("invalid-ejb-jar.xml"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Diagnostics: 4"))
        .stdout(predicate::str::contains("unexpected value 'BOGUS'"))
        .stdout(predicate::str::contains("BooleanAdapter could not adapt 'maybe'"))
        .stderr(predicate::str::contains("Error: Document has 4 diagnostic(s)"));
}

#[test]
fn test_check_strict_aborts() {
    descriptor_check()
        .args(["check", "--strict"])
        .arg(fixture_path("invalid-ejb-jar.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Aborted on diagnostic: 6:7: unexpected value 'stateless'"));
}

#[test]
fn test_check_yaml_report() {
    descriptor_check()
        .arg("check")
        .arg(fixture_path("persistence.xml"))
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("diagnostics:"))
        .stdout(predicate::str::contains("persistence-unitType"))
        .stdout(predicate::str::contains("hibernate.dialect"));
}

#[test]
fn test_check_legacy_descriptor_needs_flag() {
    descriptor_check()
        .arg("check")
        .arg(fixture_path("legacy-ejb-jar.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized document"));

    descriptor_check()
        .args(["check", "--legacy-namespaces"])
        .arg(fixture_path("legacy-ejb-jar.xml"))
        .assert()
        .success();
}

#[test]
fn test_check_missing_file() {
    descriptor_check()
        .args(["check", "no-such-descriptor.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_roundtrip_writes_canonical_xml() {
    descriptor_check()
        .arg("roundtrip")
        .arg(fixture_path("web-app.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        ))
        .stdout(predicate::str::contains("<load-on-startup>1</load-on-startup>"))
        .stdout(predicate::str::contains("<url-pattern>/api/*</url-pattern>"));
}

#[test]
fn test_roundtrip_legacy_temp_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"<web-app xmlns="http://xmlns.jcp.org/xml/ns/javaee" version="3.1">
  <display-name>Jcp App</display-name>
</web-app>"#
    )
    .unwrap();

    descriptor_check()
        .args(["roundtrip", "--legacy-namespaces"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<web-app xmlns="http://java.sun.com/xml/ns/javaee" version="3.1">"#,
        ))
        .stdout(predicate::str::contains("<display-name>Jcp App</display-name>"));
}

#[test]
fn test_tokens_of_schema_type() {
    descriptor_check()
        .args(["tokens", "trans-attributeType"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{http://java.sun.com/xml/ns/javaee}trans-attributeType"))
        .stdout(predicate::str::contains("  RequiresNew"))
        .stdout(predicate::str::contains("  Mandatory"));
}

#[test]
fn test_tokens_lists_schema_types() {
    descriptor_check()
        .arg("tokens")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{http://java.sun.com/xml/ns/persistence}persistence-unit-caching-type",
        ))
        .stdout(predicate::str::contains(
            "{http://java.sun.com/xml/ns/javaee}session-typeType",
        ));
}

#[test]
fn test_tokens_unknown_schema_type() {
    descriptor_check()
        .args(["tokens", "colorType"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No enum mapping registered for schema type colorType"));
}

#[test]
fn test_roots() {
    descriptor_check()
        .arg("roots")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{http://java.sun.com/xml/ns/javaee}ejb-jar -> {http://java.sun.com/xml/ns/javaee}ejb-jarType",
        ))
        .stdout(predicate::str::contains(
            "{http://java.sun.com/xml/ns/persistence}persistence -> {http://java.sun.com/xml/ns/persistence}persistenceType",
        ));
}
