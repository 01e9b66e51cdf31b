//! Defines core data structures used throughout the organizing pipeline.
//!
//! A run moves values through these types in one direction:
//! [`FileRecord`] (labelled input) → [`PlannedOperation`] (resolved action)
//! → [`ExecutionReport`] (outcome). Every type is an owned value; nothing is
//! shared between stages.

use std::fmt;
use std::path::PathBuf;

/// One input item: a source file plus the labels proposed for it.
///
/// Labels are free text and may be empty or malformed; they are sanitized by
/// the planner, never used for pathing directly.
///
/// # Examples
///
/// ```
/// use dirsort::core_types::FileRecord;
///
/// let record = FileRecord::new("/photos/IMG_0001.jpg", "photos", "sunset");
/// assert!(record.description.is_empty());
/// assert_eq!(record.folder_label, "photos");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRecord {
    /// Path of the file to organize.
    pub source_path: PathBuf,
    /// Free-text description, kept for logging only.
    pub description: String,
    /// Proposed category folder.
    pub folder_label: String,
    /// Proposed file name stem.
    pub name_label: String,
}

impl FileRecord {
    /// Creates a record with an empty description.
    pub fn new(
        source_path: impl Into<PathBuf>,
        folder_label: impl Into<String>,
        name_label: impl Into<String>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            description: String::new(),
            folder_label: folder_label.into(),
            name_label: name_label.into(),
        }
    }

    /// Sets the description, consuming and returning the record.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// The filesystem action applied to a planned operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Copy the source, leaving it in place.
    #[default]
    Copy,
    /// Move the source to its destination.
    Move,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Copy => write!(f, "copy"),
            Action::Move => write!(f, "move"),
        }
    }
}

/// A single resolved copy/move instruction.
///
/// Within one plan, `destination_path` values are pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOperation {
    /// The file to copy or move.
    pub source_path: PathBuf,
    /// Where the file will end up, always under the output root.
    pub destination_path: PathBuf,
    /// Whether to copy or move.
    pub action: Action,
}

/// One operation that failed during execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionFailure {
    /// Source of the failed operation.
    pub source_path: PathBuf,
    /// Destination of the failed operation.
    pub destination_path: PathBuf,
    /// Human-readable error description.
    pub reason: String,
}

/// Outcome of executing a list of planned operations.
///
/// `succeeded + failed` always equals the number of operations given to the
/// executor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Number of operations that completed (or would complete, in a dry run).
    pub succeeded: usize,
    /// Number of operations that failed.
    pub failed: usize,
    /// Details for each failed operation, in execution order.
    pub failures: Vec<ExecutionFailure>,
    /// Whether this report comes from a dry run.
    pub dry_run: bool,
}

impl ExecutionReport {
    /// Total number of operations attempted.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Returns `true` if no operation failed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// How a set of files is organized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Name and categorize files from their content, via inference.
    #[default]
    Content,
    /// Bucket files by year and month of last modification.
    Date,
    /// Bucket files by extension category.
    Type,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Content => write!(f, "content"),
            Mode::Date => write!(f, "date"),
            Mode::Type => write!(f, "type"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_totals() {
        let report = ExecutionReport {
            succeeded: 3,
            failed: 1,
            failures: vec![ExecutionFailure {
                source_path: PathBuf::from("a.txt"),
                destination_path: PathBuf::from("out/docs/a.txt"),
                reason: "No such file or directory".to_string(),
            }],
            dry_run: false,
        };
        assert_eq!(report.total(), 4);
        assert!(!report.is_clean());
        assert!(ExecutionReport::default().is_clean());
    }

    #[test]
    fn test_action_defaults_to_copy() {
        assert_eq!(Action::default(), Action::Copy);
        assert_eq!(Action::Move.to_string(), "move");
    }
}
