// src/classify/kind.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// The capability class of a file, resolved once from its extension.
///
/// The set is closed: any extension not in the registry is `Unsupported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Plain text and Markdown.
    Text,
    /// Word-processor documents and PDFs.
    Document,
    /// Spreadsheets and CSV.
    Spreadsheet,
    /// Slide decks.
    Presentation,
    /// Raster images.
    Image,
    /// Source code.
    Code,
    /// Anything else.
    Unsupported,
}

static EXTENSION_REGISTRY: Lazy<HashMap<&'static str, FileKind>> = Lazy::new(|| {
    let groups: [(FileKind, &[&str]); 6] = [
        (FileKind::Text, &["txt", "md"]),
        (FileKind::Document, &["doc", "docx", "pdf"]),
        (FileKind::Spreadsheet, &["xls", "xlsx", "csv"]),
        (FileKind::Presentation, &["ppt", "pptx"]),
        (
            FileKind::Image,
            &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"],
        ),
        (
            FileKind::Code,
            &[
                "py", "js", "cpp", "c", "java", "html", "css", "php", "rb", "go", "rs", "ts",
            ],
        ),
    ];
    groups
        .iter()
        .flat_map(|(kind, exts)| exts.iter().map(move |ext| (*ext, *kind)))
        .collect()
});

impl FileKind {
    /// Looks up the kind for a path by its (case-insensitive) extension.
    ///
    /// # Examples
    /// ```
    /// use dirsort::classify::FileKind;
    /// use std::path::Path;
    ///
    /// assert_eq!(FileKind::from_path(Path::new("IMG_0001.JPG")), FileKind::Image);
    /// assert_eq!(FileKind::from_path(Path::new("notes.md")), FileKind::Text);
    /// assert_eq!(FileKind::from_path(Path::new("archive.xyz")), FileKind::Unsupported);
    /// assert_eq!(FileKind::from_path(Path::new("Makefile")), FileKind::Unsupported);
    /// ```
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .and_then(|ext| EXTENSION_REGISTRY.get(ext.as_str()).copied())
            .unwrap_or(FileKind::Unsupported)
    }

    /// The folder a file of this kind lands in when organizing by type.
    pub fn category_folder(self) -> &'static str {
        match self {
            FileKind::Text | FileKind::Document => "documents",
            FileKind::Spreadsheet => "spreadsheets",
            FileKind::Presentation => "presentations",
            FileKind::Image => "images",
            FileKind::Code => "code",
            FileKind::Unsupported => "other",
        }
    }

    /// Whether content mode routes this kind through text summarization.
    pub fn is_textual(self) -> bool {
        !matches!(self, FileKind::Image | FileKind::Unsupported)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Text => "text",
            FileKind::Document => "document",
            FileKind::Spreadsheet => "spreadsheet",
            FileKind::Presentation => "presentation",
            FileKind::Image => "image",
            FileKind::Code => "code",
            FileKind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(FileKind::from_path(Path::new("a.PDF")), FileKind::Document);
        assert_eq!(FileKind::from_path(Path::new("a.Xlsx")), FileKind::Spreadsheet);
        assert_eq!(FileKind::from_path(Path::new("deck.PPTX")), FileKind::Presentation);
        assert_eq!(FileKind::from_path(Path::new("main.RS")), FileKind::Code);
    }

    #[test]
    fn test_unknown_and_missing_extensions_are_unsupported() {
        assert_eq!(FileKind::from_path(Path::new("data.xyz")), FileKind::Unsupported);
        assert_eq!(FileKind::from_path(Path::new("README")), FileKind::Unsupported);
        assert_eq!(FileKind::from_path(Path::new(".hidden")), FileKind::Unsupported);
    }

    #[test]
    fn test_category_folders() {
        assert_eq!(FileKind::Text.category_folder(), "documents");
        assert_eq!(FileKind::Document.category_folder(), "documents");
        assert_eq!(FileKind::Image.category_folder(), "images");
        assert_eq!(FileKind::Unsupported.category_folder(), "other");
    }

    #[test]
    fn test_textual_kinds() {
        assert!(FileKind::Code.is_textual());
        assert!(FileKind::Spreadsheet.is_textual());
        assert!(!FileKind::Image.is_textual());
        assert!(!FileKind::Unsupported.is_textual());
    }
}
