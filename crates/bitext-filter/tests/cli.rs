//! Integration tests for the bitext-filter binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn filter_cmd() -> Command {
    Command::cargo_bin("bitext-filter").unwrap()
}

fn write_doc(root: &Path, lang: &str, name: &str, content: &str) {
    let dir = root.join(lang);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_missing_arguments_exit_non_zero() {
    filter_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_language_dirs_exit_non_zero() {
    let dir = TempDir::new().unwrap();

    filter_cmd()
        .arg(dir.path())
        .arg("news")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input directory"));

    assert!(!dir.path().join("news_Short.en").exists());
}

#[test]
fn test_summary_printed_after_progress() {
    let dir = TempDir::new().unwrap();
    write_doc(dir.path(), "en", "a.ixml", "hello world\n\none two three\n");
    write_doc(dir.path(), "fa", "a.ixml", "سلام دنیا\n\nیک دو سه\n");

    let assert = filter_cmd()
        .arg(dir.path())
        .arg("news")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.ixml   Acceptance: 2  of  3"))
        .stdout(predicate::str::contains("Phrases below 95 words:"))
        .stdout(predicate::str::contains(
            "Total: Approved: 2  Discarded 1  Acceptance: 66.66",
        ))
        .stdout(predicate::str::contains("Word per line: En Max: 3, Avg: "))
        .stdout(predicate::str::is_match(r"\n\s+Fa Max: 3, Avg: [0-9.]+, Min: 2").unwrap());

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].ends_with("a.ixml   Acceptance: 2  of  3"));
    assert_eq!(lines[2], "Phrases below 95 words:");
    assert!(lines[4].starts_with("Total: "));
}

#[test]
fn test_unreadable_counterpart_exit_non_zero() {
    let dir = TempDir::new().unwrap();
    write_doc(dir.path(), "en", "a.ixml", "hello\n");
    std::fs::create_dir_all(dir.path().join("fa")).unwrap();

    filter_cmd()
        .arg(dir.path())
        .arg("news")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to READ"));
}

#[test]
fn test_directory_counterpart_is_unable_to_read() {
    let dir = TempDir::new().unwrap();
    write_doc(dir.path(), "en", "a.ixml", "hello\n");
    std::fs::create_dir_all(dir.path().join("fa").join("a.ixml")).unwrap();

    filter_cmd()
        .arg(dir.path())
        .arg("news")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to READ"));

    assert!(!dir.path().join("news_Short.en").exists());
}

#[test]
fn test_summary_json_written() {
    let dir = TempDir::new().unwrap();
    write_doc(dir.path(), "en", "a.ixml", "a b\n\n");
    write_doc(dir.path(), "fa", "a.ixml", "x\n\n");
    let json_path = dir.path().join("summary.json");

    filter_cmd()
        .arg(dir.path())
        .arg("news")
        .arg("--summary-json")
        .arg(&json_path)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["approved"], 1);
    assert_eq!(value["discarded"], 1);
    assert_eq!(value["source"]["min_word_count"], 2);
}
