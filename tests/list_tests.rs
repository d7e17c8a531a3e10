//! Integration tests for list command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{article, tipcheck_cmd, write};

#[test]
fn test_list_no_articles() {
    let temp = TempDir::new().unwrap();

    tipcheck_cmd()
        .arg("list")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No articles found"));
}

#[test]
fn test_list_sorted_numerically() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.md", &article("Tip 10", "tips/10", "10", true));
    write(temp.path(), "b.md", &article("Tip 9", "tips/9", "9", true));
    write(temp.path(), "c.md", &article("Tip 142", "tips/142", "142", true));

    let output = tipcheck_cmd()
        .arg("list")
        .arg(temp.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("tips/9"));
    assert!(lines[1].contains("tips/10"));
    assert!(lines[2].contains("tips/142"));
}

#[test]
fn test_list_hides_unpublished() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "1.md", &article("Tip 1", "tips/1", "1", true));
    write(temp.path(), "2.md", &article("Draft", "tips/2", "2", false));

    tipcheck_cmd()
        .arg("list")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("tips/1"))
        .stdout(predicate::str::contains("tips/2").not());
}

#[test]
fn test_list_all_marks_unpublished() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "1.md", &article("Tip 1", "tips/1", "1", true));
    write(temp.path(), "2.md", &article("Draft", "tips/2", "2", false));

    tipcheck_cmd()
        .arg("list")
        .arg(temp.path())
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("tips/1"))
        .stdout(predicate::str::contains("Draft (unpublished)"));
}

#[test]
fn test_list_fails_on_invalid_article() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "1.md", &article("Tip 1", "tips/1", "1", true));
    write(temp.path(), "2.md", "---\ntitle: \"Half\"\n");

    tipcheck_cmd()
        .arg("list")
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing closing '---' line"));
}
