//! The `dirsort` prelude for convenient library usage.
//!
//! Re-exports the types and functions most programs need to run the
//! pipeline or plug in their own inference collaborators.
//!
//! # Example
//!
//! ```
//! use dirsort::prelude::*;
//! # fn main() -> Result<()> {
//! let temp = tempfile::tempdir().map_err(|e| Error::Generic(e.into()))?;
//! std::fs::write(temp.path().join("a.csv"), "x,y").map_err(|e| Error::Generic(e.into()))?;
//!
//! let config = ConfigBuilder::new()
//!     .input_path(temp.path().to_string_lossy())
//!     .mode(Mode::Type)
//!     .dry_run(true)
//!     .build()?;
//! let (reporter, _log) = Reporter::buffered();
//! let token = CancellationToken::new();
//!
//! let report = run(&config, &RunContext::new(&reporter, &token))?;
//! assert!(report.dry_run);
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder, LogDestination};
pub use crate::core_types::{
    Action, ExecutionFailure, ExecutionReport, FileRecord, Mode, PlannedOperation,
};
pub use crate::errors::{Error, InferenceError, Result};
pub use crate::extraction::{Extractor, TextFileExtractor};
pub use crate::inference::{Collaborators, Provider, TextInference, VisionInference};
pub use crate::naming::sanitize;
pub use crate::output::Reporter;
pub use crate::planner::plan;
pub use crate::progress::ProgressReporter;
pub use crate::session::Session;
pub use crate::{apply, classify, discover, prepare, run, Plan, RunContext};
