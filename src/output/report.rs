// src/output/report.rs

//! Text for the plan preview and the end-of-run report.

use crate::constants::SECTION_SEPARATOR;
use crate::core_types::{Action, ExecutionReport, PlannedOperation};
use crate::executor::past_tense;
use std::fmt::Write as _;
use std::path::Path;

use super::tree::simulated_tree;

/// The "Proposed directory structure" block shown before confirmation.
pub fn plan_preview(operations: &[PlannedOperation], output_root: &Path) -> String {
    format!(
        "{SECTION_SEPARATOR}\nProposed directory structure:\n{}{SECTION_SEPARATOR}",
        simulated_tree(operations, output_root)
    )
}

/// One line per operation, as a dry run would perform them.
pub fn dry_run_listing(operations: &[PlannedOperation]) -> String {
    let mut out = String::new();
    for op in operations {
        let _ = writeln!(
            out,
            "Would {} {} -> {}",
            op.action,
            op.source_path.display(),
            op.destination_path.display()
        );
    }
    out
}

/// Summarizes an execution: counts, then each failure.
///
/// # Examples
/// ```
/// use dirsort::core_types::{Action, ExecutionReport};
/// use dirsort::output::execution_summary;
///
/// let report = ExecutionReport { succeeded: 4, failed: 0, failures: vec![], dry_run: false };
/// assert!(execution_summary(&report, Action::Move).contains("Moved 4 of 4 files."));
/// ```
pub fn execution_summary(report: &ExecutionReport, action: Action) -> String {
    let mut out = String::new();
    if report.dry_run {
        let _ = writeln!(
            out,
            "Dry run complete: {} operation(s) planned, nothing was changed.",
            report.total()
        );
    } else {
        let _ = writeln!(
            out,
            "{} {} of {} files.",
            past_tense(action),
            report.succeeded,
            report.total()
        );
        if report.failed > 0 {
            let _ = writeln!(out, "{} operation(s) failed:", report.failed);
            for failure in &report.failures {
                let _ = writeln!(
                    out,
                    "  - {} -> {}: {}",
                    failure.source_path.display(),
                    failure.destination_path.display(),
                    failure.reason
                );
            }
        } else {
            let _ = writeln!(out, "The files have been organized successfully.");
        }
    }
    out
}
