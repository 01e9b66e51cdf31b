// src/planner.rs

//! Turns labelled records into a collision-free list of filesystem operations.

use crate::constants::{FOLDER_MAX_WORDS, NAME_MAX_WORDS};
use crate::core_types::{Action, FileRecord, PlannedOperation};
use crate::naming::sanitize;
use log::trace;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::Path;

/// Plans one copy or move per record, under `output_root`.
///
/// Records are ordered by source path first, so the same set of records
/// always yields the same plan no matter how it was produced. Each
/// destination is `output_root/<folder>/<name>.<ext>`, where the labels are
/// sanitized and the extension is the source's, kept verbatim. When a
/// destination is already taken (compared case-insensitively) the name gets
/// a `_1`, `_2`, ... suffix.
///
/// The planner never touches the filesystem: a missing source still gets an
/// operation, and files already present under `output_root` are not
/// considered. The executor refuses to overwrite them instead.
///
/// # Examples
/// ```
/// use dirsort::core_types::{Action, FileRecord};
/// use dirsort::planner::plan;
/// use std::path::Path;
///
/// let records = vec![
///     FileRecord::new("in/b.jpg", "Photos", "Sunset"),
///     FileRecord::new("in/a.jpg", "photos", "sunset"),
/// ];
/// let ops = plan(&records, Path::new("out"), Action::Copy);
///
/// assert_eq!(ops[0].source_path, Path::new("in/a.jpg"));
/// assert_eq!(ops[0].destination_path, Path::new("out/photos/sunset.jpg"));
/// assert_eq!(ops[1].destination_path, Path::new("out/photos/sunset_1.jpg"));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(records = records.len(), root = %output_root.display()))]
pub fn plan(records: &[FileRecord], output_root: &Path, action: Action) -> Vec<PlannedOperation> {
    let mut ordered: Vec<&FileRecord> = records.iter().collect();
    ordered.sort_by(|a, b| a.source_path.cmp(&b.source_path));

    let mut used_names = HashSet::with_capacity(ordered.len());
    ordered
        .into_iter()
        .map(|record| {
            let folder = sanitize(&record.folder_label, FOLDER_MAX_WORDS);
            let name = sanitize(&record.name_label, NAME_MAX_WORDS);
            let folder_dir = output_root.join(folder);
            let extension = record.source_path.extension();

            let destination_path = (0..)
                .map(|n| {
                    let stem = if n == 0 {
                        name.clone()
                    } else {
                        format!("{name}_{n}")
                    };
                    folder_dir.join(file_name(&stem, extension))
                })
                .find(|candidate| used_names.insert(collision_key(candidate)))
                .unwrap_or_else(|| folder_dir.join(&name));

            trace!(
                "{} '{}' -> '{}'",
                action,
                record.source_path.display(),
                destination_path.display()
            );
            PlannedOperation {
                source_path: record.source_path.clone(),
                destination_path,
                action,
            }
        })
        .collect()
}

fn file_name(stem: &str, extension: Option<&std::ffi::OsStr>) -> OsString {
    let mut name = OsString::from(stem);
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }
    name
}

fn collision_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn root() -> PathBuf {
        PathBuf::from("/out")
    }

    #[test]
    fn test_collision_gets_numbered_suffix() {
        let records = vec![
            FileRecord::new("/in/one.jpg", "photos", "sunset"),
            FileRecord::new("/in/two.jpg", "photos", "sunset"),
            FileRecord::new("/in/three.jpg", "photos", "sunset"),
        ];
        let ops = plan(&records, &root(), Action::Copy);
        let destinations: Vec<_> = ops.iter().map(|op| op.destination_path.clone()).collect();
        // Sorted by source: one, three, two.
        assert_eq!(
            destinations,
            vec![
                PathBuf::from("/out/photos/sunset.jpg"),
                PathBuf::from("/out/photos/sunset_1.jpg"),
                PathBuf::from("/out/photos/sunset_2.jpg"),
            ]
        );
        assert_eq!(ops[1].source_path, PathBuf::from("/in/three.jpg"));
    }

    #[test]
    fn test_collisions_are_case_insensitive() {
        let records = vec![
            FileRecord::new("/in/a.JPG", "Photos", "Sunset"),
            FileRecord::new("/in/b.jpg", "photos", "sunset"),
        ];
        let ops = plan(&records, &root(), Action::Copy);
        assert_eq!(ops[0].destination_path, PathBuf::from("/out/photos/sunset.JPG"));
        assert_eq!(ops[1].destination_path, PathBuf::from("/out/photos/sunset_1.jpg"));
    }

    #[test]
    fn test_suffix_skips_names_taken_by_other_records() {
        let records = vec![
            FileRecord::new("/in/a.txt", "notes", "todo_1"),
            FileRecord::new("/in/b.txt", "notes", "todo"),
            FileRecord::new("/in/c.txt", "notes", "todo"),
        ];
        let ops = plan(&records, &root(), Action::Copy);
        assert_eq!(ops[2].destination_path, PathBuf::from("/out/notes/todo_2.txt"));
    }

    #[test]
    fn test_empty_labels_become_placeholder() {
        let records = vec![FileRecord::new("/in/x.pdf", "", "  ")];
        let ops = plan(&records, &root(), Action::Move);
        assert_eq!(
            ops[0].destination_path,
            PathBuf::from("/out/untitled/untitled.pdf")
        );
        assert_eq!(ops[0].action, Action::Move);
    }

    #[test]
    fn test_extensionless_source() {
        let records = vec![FileRecord::new("/in/Makefile", "other", "Makefile")];
        let ops = plan(&records, &root(), Action::Copy);
        assert_eq!(ops[0].destination_path, PathBuf::from("/out/other/makefile"));
    }

    #[test]
    fn test_plan_is_deterministic_across_input_order() {
        let mut records = vec![
            FileRecord::new("/in/c.png", "Travel Photos Italy", "Rome at night"),
            FileRecord::new("/in/a.png", "travel photos", "rome at night!"),
            FileRecord::new("/in/b.png", "TRAVEL-PHOTOS", "Rome, at night"),
        ];
        let first = plan(&records, &root(), Action::Copy);
        records.reverse();
        let second = plan(&records, &root(), Action::Copy);
        assert_eq!(first, second);
    }

    #[test]
    fn test_destinations_are_unique_and_under_root() {
        let records: Vec<FileRecord> = (0..50)
            .map(|i| {
                FileRecord::new(
                    format!("/in/{i:02}.txt"),
                    if i % 2 == 0 { "Docs" } else { "docs" },
                    if i % 3 == 0 { "Report" } else { "report" },
                )
            })
            .collect();
        let ops = plan(&records, &root(), Action::Copy);
        assert_eq!(ops.len(), records.len());

        let unique: HashSet<String> = ops
            .iter()
            .map(|op| collision_key(&op.destination_path))
            .collect();
        assert_eq!(unique.len(), ops.len());
        assert!(ops.iter().all(|op| op.destination_path.starts_with("/out/docs")));
    }

    #[test]
    fn test_missing_sources_still_planned() {
        let records = vec![FileRecord::new(
            "/definitely/not/here.txt",
            "notes",
            "ghost",
        )];
        let ops = plan(&records, &root(), Action::Copy);
        assert_eq!(ops.len(), 1);
    }

    #[test]
    fn test_hyphenated_stems_do_not_collide() {
        let records = crate::classify::classify_by_type(&[
            PathBuf::from("/in/name-list.txt"),
            PathBuf::from("/in/list.txt"),
        ]);
        let ops = plan(&records, &root(), Action::Copy);
        assert_eq!(ops[0].destination_path, PathBuf::from("/out/documents/list.txt"));
        assert_eq!(
            ops[1].destination_path,
            PathBuf::from("/out/documents/name_list.txt")
        );
    }
}
