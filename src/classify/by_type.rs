// src/classify/by_type.rs

use super::FileKind;
use crate::core_types::FileRecord;
use log::debug;
use std::path::{Path, PathBuf};

/// Buckets files into a fixed set of category folders by extension.
///
/// Unknown extensions land in `other`; no path is ever dropped. The name
/// label is the original file stem.
///
/// # Examples
/// ```
/// use dirsort::classify::classify_by_type;
/// use std::path::PathBuf;
///
/// let records = classify_by_type(&[PathBuf::from("a/beach.JPG"), PathBuf::from("b/blob.xyz")]);
/// assert_eq!(records[0].folder_label, "images");
/// assert_eq!(records[1].folder_label, "other");
/// assert_eq!(records[1].name_label, "blob");
/// ```
pub fn classify_by_type(paths: &[PathBuf]) -> Vec<FileRecord> {
    paths.iter().map(|path| type_record(path)).collect()
}

/// Builds the by-type record for a single path.
pub(crate) fn type_record(path: &Path) -> FileRecord {
    let kind = FileKind::from_path(path);
    debug!("Type bucket for '{}': {}", path.display(), kind);
    FileRecord::new(
        path.to_path_buf(),
        kind.category_folder(),
        super::file_stem_label(path),
    )
    .with_description(format!("{} file", kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_each_category() {
        let paths: Vec<PathBuf> = [
            "x/photo.png",
            "x/notes.txt",
            "x/contract.docx",
            "x/budget.csv",
            "x/deck.pptx",
            "x/main.rs",
            "x/blob.xyz",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();

        let folders: Vec<String> = classify_by_type(&paths)
            .into_iter()
            .map(|r| r.folder_label)
            .collect();

        assert_eq!(
            folders,
            vec![
                "images",
                "documents",
                "documents",
                "spreadsheets",
                "presentations",
                "code",
                "other"
            ]
        );
    }

    #[test]
    fn test_unknown_extension_is_kept_in_other() {
        let records = classify_by_type(&[PathBuf::from("weird.xyz")]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].folder_label, "other");
        assert_eq!(records[0].name_label, "weird");
        assert_eq!(records[0].source_path, PathBuf::from("weird.xyz"));
    }
}
