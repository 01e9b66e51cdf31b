// tests/by_type.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, dirsort_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_copies_into_category_folders() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let inbox = temp.path().join("inbox");
    create_file(&inbox, "Quarterly Report.PDF", "pdf")?;
    create_file(&inbox, "sheets/budget.xlsx", "xlsx")?;
    create_file(&inbox, "deck.pptx", "pptx")?;
    create_file(&inbox, "photo.JPG", "jpg")?;
    create_file(&inbox, "main.rs", "fn main() {}")?;
    create_file(&inbox, "archive.xyz", "???")?;

    dirsort_cmd()
        .arg(&inbox)
        .args(["-m", "type", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proposed directory structure:"))
        .stdout(predicate::str::contains("Copied 6 of 6 files."));

    let out = temp.path().join("organized_folder");
    assert!(out.join("documents/quarterly_report.PDF").exists());
    assert!(out.join("spreadsheets/budget.xlsx").exists());
    assert!(out.join("presentations/deck.pptx").exists());
    assert!(out.join("images/photo.JPG").exists());
    assert!(out.join("code/main.rs").exists());
    assert!(out.join("other/archive.xyz").exists());
    // Copy leaves the sources alone.
    assert!(inbox.join("archive.xyz").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_move_removes_sources() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let inbox = temp.path().join("inbox");
    let out = temp.path().join("sorted");
    create_file(&inbox, "notes.md", "# notes")?;
    create_file(&inbox, "nested/song.flac", "flac")?;

    dirsort_cmd()
        .arg(&inbox)
        .arg("-o")
        .arg(&out)
        .args(["-m", "type", "--move", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved 2 of 2 files."));

    assert_eq!(fs::read_to_string(out.join("documents/notes.md"))?, "# notes");
    assert!(out.join("other/song.flac").exists());
    assert!(!inbox.join("notes.md").exists());
    assert!(!inbox.join("nested/song.flac").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_hyphenated_keyword_stems_keep_their_first_word() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let inbox = temp.path().join("inbox");
    create_file(&inbox, "name-list.txt", "alice, bob")?;
    create_file(&inbox, "list.txt", "groceries")?;
    create_file(&inbox, "category-theory.md", "# functors")?;

    dirsort_cmd()
        .arg(&inbox)
        .args(["-m", "type", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 3 of 3 files."));

    let docs = temp.path().join("organized_folder/documents");
    assert_eq!(fs::read_to_string(docs.join("name_list.txt"))?, "alice, bob");
    assert_eq!(fs::read_to_string(docs.join("list.txt"))?, "groceries");
    assert!(docs.join("category_theory.md").exists());
    assert!(!docs.join("list_1.txt").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_same_name_from_different_folders_gets_suffix() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let inbox = temp.path().join("inbox");
    create_file(&inbox, "a/readme.txt", "first")?;
    create_file(&inbox, "b/README.txt", "second")?;
    create_file(&inbox, "c/readme.txt", "third")?;

    dirsort_cmd()
        .arg(&inbox)
        .args(["-m", "type", "-y"])
        .assert()
        .success();

    let docs = temp.path().join("organized_folder/documents");
    assert_eq!(fs::read_to_string(docs.join("readme.txt"))?, "first");
    assert_eq!(fs::read_to_string(docs.join("readme_1.txt"))?, "second");
    assert_eq!(fs::read_to_string(docs.join("readme_2.txt"))?, "third");

    temp.close()?;
    Ok(())
}

#[test]
fn test_existing_destination_is_not_overwritten() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let inbox = temp.path().join("inbox");
    let out = temp.path().join("sorted");
    create_file(&inbox, "todo.txt", "new")?;
    create_file(&inbox, "song.mp3", "la")?;
    create_file(&out, "documents/todo.txt", "old")?;

    dirsort_cmd()
        .arg(&inbox)
        .arg("-o")
        .arg(&out)
        .args(["-m", "type", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 1 of 2 files."))
        .stdout(predicate::str::contains("1 operation(s) failed:"))
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(out.join("documents/todo.txt"))?, "old");
    assert!(out.join("other/song.mp3").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_output_inside_input_is_not_rediscovered() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "a")?;
    create_file(temp.path(), "organized_folder/documents/old.txt", "old")?;
    create_file(temp.path(), ".hidden/secret.txt", "s")?;

    dirsort_cmd()
        .arg(".")
        .args(["-o", "organized_folder", "-m", "type", "-y"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 1 of 1 files."));

    assert!(temp.path().join("organized_folder/documents/a.txt").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_ignore_globs_skip_matches() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let inbox = temp.path().join("inbox");
    create_file(&inbox, "keep.txt", "k")?;
    create_file(&inbox, "drafts/skip.txt", "s")?;
    create_file(&inbox, "cache.tmp", "c")?;

    dirsort_cmd()
        .arg(&inbox)
        .args(["-m", "type", "-y", "-i", "drafts", "*.tmp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 1 of 1 files."));

    let out = temp.path().join("organized_folder");
    assert!(out.join("documents/keep.txt").exists());
    assert!(!out.join("documents/skip.txt").exists());
    assert!(!out.join("other").exists());

    temp.close()?;
    Ok(())
}
