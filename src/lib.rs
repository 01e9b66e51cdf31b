//! `dirsort` is a library and command-line tool that organizes a directory
//! into categorized folders with descriptive file names.
//!
//! Every file gets a folder label and a name label, produced one of three ways:
//! by a language model reading its content, by its last-modified month, or by
//! its extension category. The labels are sanitized into a collision-free
//! plan, the plan is previewed, and once approved the files are copied or
//! moved into place.
//!
//! As a library, it provides a staged pipeline:
//! 1.  **Discover**: List the files under the input path.
//! 2.  **Classify**: Label each file (content, date, or type).
//! 3.  **Plan**: Sanitize labels and resolve name collisions.
//! 4.  **Apply**: Execute the plan (or dry-run it) and report the outcome.
//!
//! # Example: Library Usage
//!
//! ```
//! use dirsort::{prepare, apply, ConfigBuilder, RunContext};
//! use dirsort::core_types::Mode;
//! use dirsort::output::Reporter;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp = tempdir().unwrap();
//! let inbox = temp.path().join("inbox");
//! fs::create_dir(&inbox).unwrap();
//! fs::write(inbox.join("holiday.jpg"), b"jpeg").unwrap();
//! fs::write(inbox.join("notes.txt"), "todo").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .input_path(inbox.to_string_lossy())
//!     .mode(Mode::Type)
//!     .build()
//!     .unwrap();
//!
//! let (reporter, _log) = Reporter::buffered();
//! let token = dirsort::CancellationToken::new();
//! let ctx = RunContext::new(&reporter, &token);
//!
//! let plan = prepare(&config, &ctx).unwrap();
//! assert_eq!(plan.operations.len(), 2);
//!
//! let report = apply(&plan, &config, &reporter);
//! assert_eq!(report.succeeded, 2);
//! assert!(temp.path().join("organized_folder/images/holiday.jpg").exists());
//! assert!(temp.path().join("organized_folder/documents/notes.txt").exists());
//! ```

pub mod cancellation;
pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod executor;
pub mod extraction;
pub mod inference;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod planner;
pub mod prelude;
pub mod progress;
pub mod session;
pub mod signal;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, LogDestination};
pub use core_types::{Action, ExecutionReport, FileRecord, Mode, PlannedOperation};

use crate::classify::{classify_by_date, classify_by_type};
use crate::config::{resolve_input, ResolvedInput};
use crate::errors::{ConfigError, Error, Result};
use crate::extraction::{Extractor, TextFileExtractor};
use crate::inference::Collaborators;
use crate::metadata::{classify_by_content, ContentContext};
use crate::output::{dry_run_listing, execution_summary, Reporter};
use crate::progress::ProgressReporter;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Shared, per-session state handed to the pipeline stages.
///
/// The reporter and token outlive every directory organized in a session;
/// collaborators are only needed by content mode.
pub struct RunContext<'a> {
    /// Receives user-facing event messages.
    pub reporter: &'a Reporter,
    /// Checked between items by discovery and metadata generation.
    pub token: &'a CancellationToken,
    /// Inference collaborators for content mode.
    pub collaborators: Option<&'a Collaborators>,
    /// Reads text out of files in content mode.
    pub extractor: Option<&'a dyn Extractor>,
    /// Optional progress bar for metadata generation.
    pub progress: Option<Arc<dyn ProgressReporter>>,
}

impl<'a> RunContext<'a> {
    /// A context without collaborators or progress bar.
    pub fn new(reporter: &'a Reporter, token: &'a CancellationToken) -> Self {
        Self {
            reporter,
            token,
            collaborators: None,
            extractor: None,
            progress: None,
        }
    }

    /// Sets the inference collaborators used by content mode.
    pub fn with_collaborators(mut self, collaborators: &'a Collaborators) -> Self {
        self.collaborators = Some(collaborators);
        self
    }

    /// Replaces the default text extractor.
    pub fn with_extractor(mut self, extractor: &'a dyn Extractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Sets the progress bar.
    pub fn with_progress(mut self, progress: Option<Arc<dyn ProgressReporter>>) -> Self {
        self.progress = progress;
        self
    }
}

/// A resolved input together with the operations planned for it.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Absolute input path and output root.
    pub input: ResolvedInput,
    /// One operation per discovered file, sorted by source path.
    pub operations: Vec<PlannedOperation>,
}

/// Discovers the files to organize.
///
/// This is the first stage of the pipeline. It reports how long the walk
/// took through `reporter`.
///
/// # Errors
/// Returns `Error::NoFilesFound` if the input holds no files, or
/// `Error::Interrupted` if `token` is cancelled.
pub fn discover(
    config: &Config,
    input: &ResolvedInput,
    reporter: &Reporter,
    token: &CancellationToken,
) -> Result<Vec<PathBuf>> {
    let started = Instant::now();
    let files = discovery::discover_files(&config.discovery, input, token)?;
    reporter.event(&format!(
        "Time taken to collect file paths: {:.2} seconds",
        started.elapsed().as_secs_f64()
    ));

    if files.is_empty() {
        return Err(Error::NoFilesFound);
    }
    log::info!("Discovered {} file(s) under '{}'", files.len(), input.path.display());
    Ok(files)
}

/// Labels every file according to `config.mode`.
///
/// Date and type mode are deterministic and never fail. Content mode needs
/// collaborators in `ctx`.
///
/// # Errors
/// Returns `ConfigError::MissingDependency` if content mode is selected but
/// `ctx` carries no collaborators, or `Error::Interrupted` on cancellation.
pub fn classify(paths: &[PathBuf], config: &Config, ctx: &RunContext<'_>) -> Result<Vec<FileRecord>> {
    let started = Instant::now();
    let records = match config.mode {
        Mode::Date => classify_by_date(paths),
        Mode::Type => classify_by_type(paths),
        Mode::Content => {
            let collaborators = ctx.collaborators.ok_or_else(|| ConfigError::MissingDependency {
                option: "--mode content".to_string(),
                required: "inference collaborators".to_string(),
            })?;
            let default_extractor = TextFileExtractor::default();
            let content = ContentContext {
                collaborators,
                extractor: ctx.extractor.unwrap_or(&default_extractor),
                jobs: config.inference.jobs,
                reporter: ctx.reporter,
                progress: ctx.progress.clone(),
            };
            classify_by_content(paths, &content, ctx.token)?
        }
    };

    if config.mode == Mode::Content {
        ctx.reporter.event(&format!(
            "Time taken to generate metadata: {:.2} seconds",
            started.elapsed().as_secs_f64()
        ));
    }
    Ok(records)
}

/// Runs discovery, classification and planning for one input.
///
/// # Errors
/// Propagates path resolution, discovery and classification errors.
pub fn prepare(config: &Config, ctx: &RunContext<'_>) -> Result<Plan> {
    let input = resolve_input(config)?;
    let files = discover(config, &input, ctx.reporter, ctx.token)?;
    let records = classify(&files, config, ctx)?;
    let operations = planner::plan(&records, &input.output_root, config.action);
    Ok(Plan { input, operations })
}

/// Executes an approved plan and reports its outcome.
///
/// A dry run lists the operations it would perform and changes nothing.
pub fn apply(plan: &Plan, config: &Config, reporter: &Reporter) -> ExecutionReport {
    if config.dry_run {
        reporter.event(&dry_run_listing(&plan.operations));
    }
    let report = executor::execute(&plan.operations, config.dry_run);
    reporter.event(&execution_summary(&report, config.action));
    log::info!(
        "{} of {} operation(s) succeeded",
        report.succeeded,
        report.total()
    );
    report
}

/// Runs the whole pipeline without asking for confirmation.
///
/// This mirrors a one-shot CLI run with `--yes`: the plan preview is
/// reported, then applied.
///
/// # Errors
/// Returns `Error::NoFilesFound` for an empty input. Other errors are
/// propagated from the underlying stages; per-file failures end up in the
/// returned report instead.
pub fn run(config: &Config, ctx: &RunContext<'_>) -> Result<ExecutionReport> {
    let plan = prepare(config, ctx)?;
    ctx.reporter
        .event(&output::plan_preview(&plan.operations, &plan.input.output_root));
    Ok(apply(&plan, config, ctx.reporter))
}
