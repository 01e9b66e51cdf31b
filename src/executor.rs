// src/executor.rs

//! Applies a plan to the filesystem, one operation at a time.

use crate::core_types::{Action, ExecutionFailure, ExecutionReport, PlannedOperation};
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Executes planned operations in order and reports the outcome.
///
/// In a dry run nothing is touched and every operation counts as succeeded.
/// Otherwise each operation creates its destination folder and then copies
/// or moves the file. A failing operation (missing source, destination
/// already present, permission denied, disk full, ...) is recorded in the
/// report and the remaining operations still run. An existing file is never
/// overwritten.
///
/// # Examples
/// ```
/// use dirsort::core_types::{Action, PlannedOperation};
/// use dirsort::executor::execute;
/// use std::path::PathBuf;
///
/// let ops = vec![PlannedOperation {
///     source_path: PathBuf::from("in/a.txt"),
///     destination_path: PathBuf::from("out/notes/a.txt"),
///     action: Action::Copy,
/// }];
/// let report = execute(&ops, true);
/// assert!(report.dry_run);
/// assert_eq!(report.succeeded, 1);
/// assert!(!PathBuf::from("out").exists());
/// ```
pub fn execute(operations: &[PlannedOperation], dry_run: bool) -> ExecutionReport {
    let mut report = ExecutionReport {
        dry_run,
        ..ExecutionReport::default()
    };

    for op in operations {
        if dry_run {
            debug!(
                "Dry run: would {} '{}' -> '{}'",
                op.action,
                op.source_path.display(),
                op.destination_path.display()
            );
            report.succeeded += 1;
            continue;
        }

        match apply(op) {
            Ok(()) => {
                debug!(
                    "{} '{}' -> '{}'",
                    past_tense(op.action),
                    op.source_path.display(),
                    op.destination_path.display()
                );
                report.succeeded += 1;
            }
            Err(e) => {
                warn!(
                    "Failed to {} '{}' to '{}': {}",
                    op.action,
                    op.source_path.display(),
                    op.destination_path.display(),
                    e
                );
                report.failed += 1;
                report.failures.push(ExecutionFailure {
                    source_path: op.source_path.clone(),
                    destination_path: op.destination_path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

/// "Copied" or "Moved".
pub fn past_tense(action: Action) -> &'static str {
    match action {
        Action::Copy => "Copied",
        Action::Move => "Moved",
    }
}

fn apply(op: &PlannedOperation) -> io::Result<()> {
    let destination = op.destination_path.as_path();
    if destination.symlink_metadata().is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination '{}' already exists", destination.display()),
        ));
    }
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    match op.action {
        Action::Copy => copy_new(&op.source_path, destination),
        Action::Move => move_file(&op.source_path, destination),
    }
}

/// Copies `source` to a destination that must not exist yet.
fn copy_new(source: &Path, destination: &Path) -> io::Result<()> {
    let mut reader = File::open(source)?;
    let permissions = reader.metadata()?.permissions();
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)?;

    let copied = io::copy(&mut reader, &mut writer).and_then(|_| writer.sync_all());
    drop(writer);
    if let Err(e) = copied {
        // Remove the partial copy.
        let _ = fs::remove_file(destination);
        return Err(e);
    }
    fs::set_permissions(destination, permissions)
}

/// Renames `source`, falling back to copy-then-remove across filesystems.
fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(
                "'{}' is on another filesystem ({}); copying instead",
                source.display(),
                e
            );
            copy_new(source, destination)?;
            remove_source(source, destination, |path| fs::remove_file(path))
        }
        result => result,
    }
}

/// Removes the source of a copied move. If that fails the copy is deleted
/// again, so the file is never left in both places.
fn remove_source<F>(source: &Path, destination: &Path, remove: F) -> io::Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    if let Err(e) = remove(source) {
        if let Err(cleanup) = fs::remove_file(destination) {
            warn!(
                "Could not remove '{}' after a failed move: {}",
                destination.display(),
                cleanup
            );
        }
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn op(source: PathBuf, destination: PathBuf, action: Action) -> PlannedOperation {
        PlannedOperation {
            source_path: source,
            destination_path: destination,
            action,
        }
    }

    #[test]
    fn test_copy_creates_folders_and_keeps_source() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("a.txt");
        fs::write(&source, "alpha")?;
        let destination = temp.path().join("out/notes/alpha.txt");

        let report = execute(&[op(source.clone(), destination.clone(), Action::Copy)], false);

        assert_eq!(report.succeeded, 1);
        assert!(report.is_clean());
        assert_eq!(fs::read_to_string(&destination)?, "alpha");
        assert!(source.exists());
        Ok(())
    }

    #[test]
    fn test_move_removes_source() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("b.txt");
        fs::write(&source, "beta")?;
        let destination = temp.path().join("out/notes/beta.txt");

        let report = execute(&[op(source.clone(), destination.clone(), Action::Move)], false);

        assert_eq!(report.succeeded, 1);
        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&destination)?, "beta");
        Ok(())
    }

    #[test]
    fn test_failure_is_isolated() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let good_a = temp.path().join("a.txt");
        let good_c = temp.path().join("c.txt");
        fs::write(&good_a, "a")?;
        fs::write(&good_c, "c")?;
        let out = temp.path().join("out");

        let ops = vec![
            op(good_a, out.join("x/a.txt"), Action::Copy),
            op(temp.path().join("missing.txt"), out.join("x/b.txt"), Action::Copy),
            op(good_c, out.join("x/c.txt"), Action::Copy),
        ];
        let report = execute(&ops, false);

        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.total(), ops.len());
        assert_eq!(report.failures[0].source_path, temp.path().join("missing.txt"));
        assert!(out.join("x/c.txt").exists());
        assert!(!out.join("x/b.txt").exists());
        Ok(())
    }

    #[test]
    fn test_never_overwrites() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("new.txt");
        fs::write(&source, "new")?;
        let destination = temp.path().join("out/notes/existing.txt");
        fs::create_dir_all(destination.parent().unwrap())?;
        fs::write(&destination, "old")?;

        for action in [Action::Copy, Action::Move] {
            let report = execute(&[op(source.clone(), destination.clone(), action)], false);
            assert_eq!(report.failed, 1);
            assert!(report.failures[0].reason.contains("already exists"));
        }
        assert_eq!(fs::read_to_string(&destination)?, "old");
        assert!(source.exists());
        Ok(())
    }

    #[test]
    fn test_dry_run_touches_nothing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("a.txt");
        fs::write(&source, "a")?;
        let out = temp.path().join("out");

        let ops = vec![
            op(source.clone(), out.join("notes/a.txt"), Action::Move),
            op(temp.path().join("missing.txt"), out.join("notes/b.txt"), Action::Move),
        ];
        let report = execute(&ops, true);

        assert!(report.dry_run);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, 0);
        assert!(source.exists());
        assert!(!out.exists());
        Ok(())
    }

    #[test]
    fn test_copy_directory_source_leaves_no_partial_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let source_dir = temp.path().join("folder.txt");
        fs::create_dir(&source_dir)?;
        let destination = temp.path().join("out/notes/folder.txt");

        let report = execute(&[op(source_dir, destination.clone(), Action::Copy)], false);
        assert_eq!(report.failed, 1);
        assert!(!destination.exists());
        Ok(())
    }

    #[test]
    fn test_failed_source_removal_rolls_back_copy() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("locked.txt");
        fs::write(&source, "locked")?;
        let destination = temp.path().join("out/notes/locked.txt");
        fs::create_dir_all(temp.path().join("out/notes"))?;
        copy_new(&source, &destination)?;

        let result = remove_source(&source, &destination, |_| {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only directory",
            ))
        });

        assert_eq!(
            result.map_err(|e| e.kind()),
            Err(io::ErrorKind::PermissionDenied)
        );
        assert!(!destination.exists());
        assert_eq!(fs::read_to_string(&source)?, "locked");
        Ok(())
    }

    #[test]
    fn test_source_removal_after_copy() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let source = temp.path().join("a.txt");
        fs::write(&source, "a")?;
        let destination = temp.path().join("b.txt");
        copy_new(&source, &destination)?;

        remove_source(&source, &destination, |path| fs::remove_file(path))?;

        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&destination)?, "a");
        Ok(())
    }
}
