//! End-to-end tests for the `jamdelphia` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn jamdelphia() -> Command {
    Command::cargo_bin("jamdelphia").expect("binary built")
}

#[test]
fn render_writes_index_with_parent_dirs() {
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("dist/nested/index.html");

    jamdelphia()
        .args(["render", "--year", "2025", "--out"])
        .arg(&out)
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).expect("read output");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Signature Seal Notary"));
    assert!(html.contains("© 2025 JamDelphia Group LLC. All rights reserved."));
}

#[test]
fn render_to_stdout() {
    jamdelphia()
        .args(["render", "--year", "2025", "--out", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains(r#"id="portfolio""#));
}

#[test]
fn render_links_external_stylesheet() {
    jamdelphia()
        .args(["render", "--out", "-", "--stylesheet", "/assets/site.css"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"href="/assets/site.css""#))
        .stdout(predicate::str::contains("<style>").not());
}

#[test]
fn check_passes_on_builtin_content() {
    jamdelphia()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("content ok"))
        .stdout(predicate::str::contains("#portfolio: 1 target"));
}

#[test]
fn check_fails_on_invalid_content() {
    let temp = TempDir::new().expect("temp dir");
    let content = temp.path().join("site.toml");
    std::fs::write(
        &content,
        r#"
[[portfolio.ventures]]
name = "No Scheme"
url = "example.com"
"#,
    )
    .expect("write content");

    jamdelphia()
        .args(["check", "--content"])
        .arg(&content)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Scheme"));
}

#[test]
fn unsupported_content_format_is_reported() {
    let temp = TempDir::new().expect("temp dir");
    let content = temp.path().join("site.yaml");
    std::fs::write(&content, "brand: {}").expect("write content");

    jamdelphia()
        .args(["render", "--out", "-", "--content"])
        .arg(&content)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported content format"));
}

#[test]
fn dumped_content_feeds_back_into_render() {
    let temp = TempDir::new().expect("temp dir");
    let dumped = jamdelphia()
        .arg("dump-content")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let content = temp.path().join("site.toml");
    let edited = String::from_utf8(dumped)
        .expect("utf8")
        .replace("West Virginia / Pennsylvania Region", "Kingston / Philadelphia");
    std::fs::write(&content, edited).expect("write content");

    jamdelphia()
        .args(["render", "--out", "-", "--content"])
        .arg(&content)
        .assert()
        .success()
        .stdout(predicate::str::contains("Kingston / Philadelphia"))
        .stdout(predicate::str::contains("https://signaturesealnotaries.com"));
}
