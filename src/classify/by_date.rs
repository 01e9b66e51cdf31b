// src/classify/by_date.rs

use crate::constants::UNKNOWN_DATE_FOLDER;
use crate::core_types::FileRecord;
use chrono::{DateTime, Local};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Buckets files by the year and month of their last modification.
///
/// Each record's folder label is `"{year}_{Mon}"` in the local time zone
/// (e.g. `2024_Jan`) and its name label is the original file stem. A file
/// whose modification time cannot be read is placed in `unknown_date`; no
/// path is ever dropped.
pub fn classify_by_date(paths: &[PathBuf]) -> Vec<FileRecord> {
    paths
        .iter()
        .map(|path| {
            let folder = date_folder_label(path);
            debug!("Date bucket for '{}': {}", path.display(), folder);
            FileRecord::new(path.clone(), folder, super::file_stem_label(path))
        })
        .collect()
}

/// Returns the year-month folder label for a path, or `unknown_date`.
pub(crate) fn date_folder_label(path: &Path) -> String {
    match fs::metadata(path).and_then(|md| md.modified()) {
        Ok(modified) => {
            let local: DateTime<Local> = modified.into();
            local.format("%Y_%b").to_string()
        }
        Err(e) => {
            warn!(
                "Could not read modification time for '{}': {}",
                path.display(),
                e
            );
            UNKNOWN_DATE_FOLDER.to_string()
        }
    }
}
