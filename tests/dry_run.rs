// tests/dry_run.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, dirsort_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_dry_run_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let inbox = temp.path().join("inbox");
    create_file(&inbox, "a.txt", "A")?;
    create_file(&inbox, "sub/b.png", "B")?;

    dirsort_cmd()
        .arg(&inbox)
        .args(["-m", "type", "--move", "-D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proposed directory structure:"))
        .stdout(predicate::str::contains("Would move"))
        .stdout(predicate::str::contains("documents/a.txt"))
        .stdout(predicate::str::contains("images/b.png"))
        .stdout(predicate::str::contains(
            "Dry run complete: 2 operation(s) planned, nothing was changed.",
        ))
        // No confirmation is needed for a dry run.
        .stdout(predicate::str::contains("proceed").not());

    assert!(inbox.join("a.txt").exists());
    assert!(inbox.join("sub/b.png").exists());
    assert!(!temp.path().join("organized_folder").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_declined_confirmation_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let inbox = temp.path().join("inbox");
    create_file(&inbox, "a.txt", "A")?;

    dirsort_cmd()
        .arg(&inbox)
        .args(["-m", "type"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Would you like to proceed with these changes? (yes/no):",
        ))
        .stdout(predicate::str::contains("Operation canceled by the user."));

    assert!(!temp.path().join("organized_folder").exists());

    temp.close()?;
    Ok(())
}

#[test]
fn test_confirmation_accepts_yes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let inbox = temp.path().join("inbox");
    create_file(&inbox, "a.txt", "A")?;

    dirsort_cmd()
        .arg(&inbox)
        .args(["-m", "type"])
        .write_stdin("maybe\nyes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter 'yes' or 'no'."))
        .stdout(predicate::str::contains("Copied 1 of 1 files."));

    assert!(temp.path().join("organized_folder/documents/a.txt").exists());

    temp.close()?;
    Ok(())
}
