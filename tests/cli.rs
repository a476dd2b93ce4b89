//! End-to-end runs of the `brc-stats` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn input(contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("measurements.txt");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn summary_line(contents: &[u8]) -> String {
    let (_dir, path) = input(contents);
    let output = Command::cargo_bin("brc-stats")
        .unwrap()
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    let summary = lines.next().unwrap().to_owned();
    assert!(lines.next().unwrap().starts_with("Execution time: "));
    assert_eq!(lines.next(), None);
    summary
}

#[test]
fn two_stations() {
    assert_eq!(
        summary_line(b"Hamburg;12.0\nBulawayo;8.9\nHamburg;16.5\n"),
        "{Bulawayo=8.9/8.9/8.9, Hamburg=12.0/14.3/16.5}"
    );
}

#[test]
fn malformed_value_skipped() {
    assert_eq!(
        summary_line(b"Paris;20.0\nParis;notanumber\nParis;22.0\n"),
        "{Paris=20.0/21.0/22.0}"
    );
}

#[test]
fn missing_delimiter_skipped() {
    assert_eq!(
        summary_line(b"NoCity\nTokyo;30.0\n"),
        "{Tokyo=30.0/30.0/30.0}"
    );
}

#[test]
fn empty_file() {
    assert_eq!(summary_line(b""), "{}");
}

#[test]
fn single_negative_value() {
    assert_eq!(summary_line(b"Oslo;-5.5\n"), "{Oslo=-5.5/-5.5/-5.5}");
}

#[test]
fn repeated_runs_are_identical() {
    let contents = b"b;1.5\na;2.0\nc;-0.5\na;4.0\nb;3.25\n";
    assert_eq!(summary_line(contents), summary_line(contents));
}

#[test]
fn non_utf8_key_bytes_are_preserved() {
    let (_dir, path) = input(b"\xffkey;1.0\n");
    Command::cargo_bin("brc-stats")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::function(|out: &[u8]| {
            out.starts_with(b"{\xffkey=1.0/1.0/1.0}\n")
        }));
}

#[test]
fn missing_argument_is_usage_error() {
    Command::cargo_bin("brc-stats")
        .unwrap()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_file_fails_without_summary() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("brc-stats")
        .unwrap()
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn directory_fails_without_summary() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("brc-stats")
        .unwrap()
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
