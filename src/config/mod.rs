//! Defines the core `Config` struct and related types for application configuration.
//!
//! A `Config` is built once per organized directory (by [`ConfigBuilder`],
//! usually from the parsed CLI) and passed by reference into every stage that
//! needs it. Nothing in the library reads configuration from globals.

use crate::core_types::{Action, Mode};
use crate::inference::Provider;
use glob::Pattern;
use std::path::PathBuf;
use std::time::Duration;

pub use builder::ConfigBuilder;
pub use path_resolve::{resolve_input, ResolvedInput};
mod builder;
mod builder_logic;
mod parsing;
pub mod path_resolve;

/// Configuration options related to file discovery.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Glob patterns (relative to the input path) for entries to skip, provided via `-i`.
    pub ignore_patterns: Option<Vec<Pattern>>,
}

/// Configuration for the inference collaborators used by content mode.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Provider used for text summarization and naming.
    pub text_provider: Provider,
    /// Provider used for image description and naming.
    pub vision_provider: Provider,
    /// Overrides the text provider's default model.
    pub text_model: Option<String>,
    /// Overrides the vision provider's default model.
    pub vision_model: Option<String>,
    /// Per-request deadline for inference calls.
    pub timeout: Duration,
    /// Number of files whose metadata is generated concurrently.
    pub jobs: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            text_provider: Provider::DeepInfra,
            vision_provider: Provider::Groq,
            text_model: None,
            vision_model: None,
            timeout: Duration::from_secs(crate::constants::DEFAULT_TIMEOUT_SECS),
            jobs: 1,
        }
    }
}

/// Where user-facing event messages are written for a session.
///
/// The two destinations are mutually exclusive: in silent mode nothing is
/// printed to the console.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Print messages to standard output.
    #[default]
    Console,
    /// Append messages to the given file.
    File(PathBuf),
}

/// The fully validated configuration for organizing one input path.
#[derive(Debug, Clone)]
pub struct Config {
    /// The original, unresolved path to the directory or file to organize.
    pub input_path: String,
    /// The original, unresolved output root. `None` selects the default
    /// `organized_folder` next to the input.
    pub output_path: Option<String>,
    /// How files are classified.
    pub mode: Mode,
    /// Whether planned operations copy or move files.
    pub action: Action,
    /// If `true`, report the plan and its outcome without touching the filesystem.
    pub dry_run: bool,
    /// If `true`, apply the plan without asking for confirmation.
    pub assume_yes: bool,
    /// Configuration for the discovery stage.
    pub discovery: DiscoveryConfig,
    /// Configuration for content-mode inference.
    pub inference: InferenceConfig,
    /// Where event messages go.
    pub log_destination: LogDestination,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            input_path: ".".to_string(),
            output_path: None,
            mode: Mode::Type,
            action: Action::Copy,
            dry_run: false,
            assume_yes: true,
            discovery: DiscoveryConfig::default(),
            inference: InferenceConfig::default(),
            log_destination: LogDestination::Console,
        }
    }

    /// Returns `true` if messages go to a log file instead of the console.
    pub fn is_silent(&self) -> bool {
        matches!(self.log_destination, LogDestination::File(_))
    }
}
