// src/classify/mod.rs

//! Deterministic, model-free classification.
//!
//! These classifiers never consult an inference collaborator. They are the
//! fallback modes of the organizer and also supply the category for files
//! that content mode cannot read.

mod by_date;
mod by_type;
mod kind;

pub use by_date::classify_by_date;
pub use by_type::classify_by_type;
pub use kind::FileKind;

pub(crate) use by_type::type_record;

use std::path::Path;

/// The original file stem, used as the name label by the fallback modes.
pub(crate) fn file_stem_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
