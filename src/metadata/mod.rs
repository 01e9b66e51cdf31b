// src/metadata/mod.rs

//! Content-mode metadata generation.
//!
//! [`generate_text_metadata`] and [`generate_image_metadata`] run the three
//! inference steps for one item. [`classify_by_content`] drives them over a
//! whole file list, routing each file by its [`FileKind`](crate::classify::FileKind)
//! and falling back to the by-type category for files it cannot read.

mod generate;
mod gif;
mod pipeline;

pub use generate::{generate_image_metadata, generate_text_metadata, ImageInput};
pub use gif::is_animated_gif;
pub use pipeline::{classify_by_content, ContentContext};

/// The three labels produced for one file.
///
/// Labels are raw model output; the planner sanitizes them. Any field may be
/// empty if its step failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMetadata {
    /// Proposed category folder (at most two words after sanitizing).
    pub folder_label: String,
    /// Proposed file name stem (at most three words after sanitizing).
    pub name_label: String,
    /// Summary or image description.
    pub description: String,
}
