// src/extraction/mod.rs

//! Content extraction for content mode.
//!
//! An [`Extractor`] turns a file into the text the summarizer reads. The
//! built-in [`TextFileExtractor`] handles plain text, Markdown and source
//! code; other kinds are reported as unsupported and content mode falls back
//! to their by-type category.

use crate::classify::FileKind;
use crate::constants::MAX_EXTRACT_CHARS;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

mod text_detection;

pub use text_detection::is_likely_text_from_buffer;

/// Why a file yielded no text.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The extractor has no reader for this kind of file.
    #[error("no text extractor for {0} files")]
    Unsupported(FileKind),
    /// The file looked like binary data.
    #[error("content is not text")]
    Binary,
    /// The file could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Produces the text content of a file for summarization.
pub trait Extractor: Send + Sync {
    /// Returns up to a bounded number of characters of the file's text.
    ///
    /// # Errors
    /// Returns an `ExtractError` if the kind is unsupported, the content is
    /// binary, or the file cannot be read.
    fn extract(&self, path: &Path, kind: FileKind) -> Result<String, ExtractError>;
}

/// Reads text, Markdown and code files directly from disk.
#[derive(Debug, Clone)]
pub struct TextFileExtractor {
    max_chars: usize,
}

impl TextFileExtractor {
    /// Creates an extractor returning at most `max_chars` characters.
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl Default for TextFileExtractor {
    fn default() -> Self {
        Self::new(MAX_EXTRACT_CHARS)
    }
}

impl Extractor for TextFileExtractor {
    fn extract(&self, path: &Path, kind: FileKind) -> Result<String, ExtractError> {
        if !matches!(kind, FileKind::Text | FileKind::Code) {
            return Err(ExtractError::Unsupported(kind));
        }

        // A UTF-8 char is at most 4 bytes.
        let byte_budget = (self.max_chars as u64).saturating_mul(4);
        let mut bytes = Vec::new();
        File::open(path)?.take(byte_budget).read_to_end(&mut bytes)?;

        if !is_likely_text_from_buffer(&bytes) {
            return Err(ExtractError::Binary);
        }

        Ok(String::from_utf8_lossy(&bytes)
            .chars()
            .take(self.max_chars)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_reads_text_up_to_limit() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("notes.md");
        fs::write(&path, "é".repeat(50))?;

        let text = TextFileExtractor::new(10).extract(&path, FileKind::Text)?;
        assert_eq!(text.chars().count(), 10);
        assert!(text.chars().all(|c| c == 'é'));
        Ok(())
    }

    #[test]
    fn test_default_limit() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("main.rs");
        fs::write(&path, "a".repeat(MAX_EXTRACT_CHARS * 2))?;
        let text = TextFileExtractor::default().extract(&path, FileKind::Code)?;
        assert_eq!(text.len(), MAX_EXTRACT_CHARS);
        Ok(())
    }

    #[test]
    fn test_rejects_binary_and_unsupported() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let binary = temp.path().join("fake.txt");
        fs::write(&binary, b"\x00\x01\x02binary")?;
        let extractor = TextFileExtractor::default();

        assert!(matches!(
            extractor.extract(&binary, FileKind::Text),
            Err(ExtractError::Binary)
        ));
        assert!(matches!(
            extractor.extract(&binary, FileKind::Document),
            Err(ExtractError::Unsupported(FileKind::Document))
        ));
        assert!(matches!(
            extractor.extract(&temp.path().join("missing.txt"), FileKind::Text),
            Err(ExtractError::Io(_))
        ));
        Ok(())
    }
}
