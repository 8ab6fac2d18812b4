//! Integration tests for entry commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{create_entry, serene_cmd};

fn init_diary() -> TempDir {
    let temp = TempDir::new().unwrap();
    serene_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

fn entries_blob(temp: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(temp.path().join(".serene/storage/serene_diary_entries")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_list_no_entries() {
    let temp = init_diary();

    serene_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No entries found\n");
}

#[test]
fn test_new_persists_entry() {
    let temp = init_diary();

    let id = create_entry(
        temp.path(),
        &["--title", "Morning", "--content", "Felt **great**", "--mood", "😊"],
    );

    let blob = entries_blob(&temp);
    let entries = blob.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], id.as_str());
    assert_eq!(entries[0]["title"], "Morning");
    assert_eq!(entries[0]["content"], "Felt **great**");
    assert_eq!(entries[0]["mood"], "😊");
    assert_eq!(entries[0]["fontFamily"], "font-sans");
    assert_eq!(entries[0]["textColor"], "text-foreground");
    assert_eq!(entries[0]["images"], serde_json::json!([]));
}

#[test]
fn test_new_empty_entry_rejected() {
    let temp = init_diary();

    serene_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "  "])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Please write something"));
}

#[test]
fn test_new_blank_title_uses_placeholder() {
    let temp = init_diary();
    create_entry(temp.path(), &["--content", "no title here"]);

    serene_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Untitled Entry"));
}

#[test]
fn test_list_newest_first_and_search() {
    let temp = init_diary();
    create_entry(temp.path(), &["--title", "Rainy walk"]);
    create_entry(temp.path(), &["--title", "Sunny lunch"]);

    let output = serene_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Sunny lunch"));
    assert!(lines[1].contains("Rainy walk"));

    serene_cmd()
        .current_dir(temp.path())
        .args(["list", "--search", "RAINY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rainy walk"))
        .stdout(predicate::str::contains("Sunny").not());

    serene_cmd()
        .current_dir(temp.path())
        .args(["list", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunny lunch"))
        .stdout(predicate::str::contains("Rainy").not());
}

#[test]
fn test_show_raw_and_rendered() {
    let temp = init_diary();
    let id = create_entry(temp.path(), &["--title", "Day", "--content", "a <b> **c**"]);

    serene_cmd()
        .current_dir(temp.path())
        .args(["show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("a <b> **c**"));

    serene_cmd()
        .current_dir(temp.path())
        .args(["show", id.as_str(), "--render"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "a &lt;b&gt; <strong class=\"font-bold text-foreground\">c</strong>",
        ));
}

#[test]
fn test_show_unknown_id() {
    let temp = init_diary();

    serene_cmd()
        .current_dir(temp.path())
        .args(["show", "missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No entry with id 'missing'"));
}

#[test]
fn test_edit_keeps_id_and_date() {
    let temp = init_diary();
    let id = create_entry(temp.path(), &["--title", "Old", "--content", "body"]);
    let before = entries_blob(&temp);

    serene_cmd()
        .current_dir(temp.path())
        .args(["edit", id.as_str(), "--title", "New", "--dictate", "and more"])
        .assert()
        .success();

    let after = entries_blob(&temp);
    assert_eq!(after[0]["id"], before[0]["id"]);
    assert_eq!(after[0]["date"], before[0]["date"]);
    assert_eq!(after[0]["title"], "New");
    assert_eq!(after[0]["content"], "body and more");
    assert_eq!(after[0]["mood"], before[0]["mood"]);
}

#[test]
fn test_edit_images() {
    let temp = init_diary();
    let id = create_entry(temp.path(), &["--title", "Pics"]);
    let image = temp.path().join("sky.png");
    fs::write(&image, [0x89, b'P', b'N', b'G']).unwrap();

    serene_cmd()
        .current_dir(temp.path())
        .args(["edit", id.as_str(), "--add-image"])
        .arg(&image)
        .assert()
        .success();
    assert_eq!(
        entries_blob(&temp)[0]["images"],
        serde_json::json!(["data:image/png;base64,iVBORw=="])
    );

    serene_cmd()
        .current_dir(temp.path())
        .args(["edit", id.as_str(), "--remove-image", "0"])
        .assert()
        .success();
    assert_eq!(entries_blob(&temp)[0]["images"], serde_json::json!([]));
}

#[test]
fn test_failed_edit_changes_nothing() {
    let temp = init_diary();
    let id = create_entry(temp.path(), &["--title", "Old", "--content", "body"]);
    let before = entries_blob(&temp);

    serene_cmd()
        .current_dir(temp.path())
        .args([
            "edit",
            id.as_str(),
            "--title",
            "New",
            "--dictate",
            "more",
            "--remove-image",
            "5",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no image at position 5"));

    assert_eq!(entries_blob(&temp), before);
    serene_cmd()
        .current_dir(temp.path())
        .args(["show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Old"))
        .stdout(predicate::str::contains("New").not());
}

#[test]
fn test_new_rejects_non_image_file() {
    let temp = init_diary();
    let file = temp.path().join("notes.txt");
    fs::write(&file, "hello").unwrap();

    serene_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "x", "--image"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select an image file"));
}

#[test]
fn test_edit_unknown_id() {
    let temp = init_diary();

    serene_cmd()
        .current_dir(temp.path())
        .args(["edit", "missing", "--title", "x"])
        .assert()
        .code(3);
}

#[test]
fn test_delete() {
    let temp = init_diary();
    let id = create_entry(temp.path(), &["--title", "Gone soon"]);

    serene_cmd()
        .current_dir(temp.path())
        .args(["delete", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"));

    assert_eq!(entries_blob(&temp), serde_json::json!([]));

    serene_cmd()
        .current_dir(temp.path())
        .args(["delete", id.as_str()])
        .assert()
        .code(3);
    assert_eq!(entries_blob(&temp), serde_json::json!([]));
}

#[test]
fn test_malformed_storage_lists_empty() {
    let temp = init_diary();
    fs::write(
        temp.path().join(".serene/storage/serene_diary_entries"),
        "not json",
    )
    .unwrap();

    serene_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No entries found\n");
}
