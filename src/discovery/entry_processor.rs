// src/discovery/entry_processor.rs

use ignore::DirEntry;
use log::{trace, warn};
use std::path::PathBuf;

/// Returns the entry's path if it is a regular file.
///
/// Walker errors (unreadable directories, broken entries) are logged and
/// skipped so one bad entry cannot end the walk.
pub(super) fn accept_entry(entry_result: Result<DirEntry, ignore::Error>) -> Option<PathBuf> {
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(e) => {
            warn!("Walker error: {}", e);
            return None;
        }
    };

    match entry.file_type() {
        Some(file_type) if file_type.is_file() => Some(entry.into_path()),
        _ => {
            trace!("Skipping non-file entry: {}", entry.path().display());
            None
        }
    }
}
