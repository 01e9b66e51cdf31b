// src/config/builder.rs

use super::{
    builder_logic::{determine_log_destination, validate_builder_options},
    parsing::{compile_glob_vec, non_blank},
    Config, DiscoveryConfig, InferenceConfig, LogDestination,
};
use crate::cli::Cli;
use crate::core_types::{Action, Mode};
use crate::errors::{ConfigError, Result};
use crate::inference::Provider;
use std::env;
use std::time::Duration;

/// A builder for creating a `Config` programmatically or from the CLI.
///
/// Every field is optional; `build` fills in defaults and validates option
/// combinations. The builder is `Clone`, so an interactive session can keep
/// one as a template and stamp out a `Config` per directory.
///
/// # Examples
/// ```
/// use dirsort::config::ConfigBuilder;
/// use dirsort::core_types::{Action, Mode};
///
/// let config = ConfigBuilder::new()
///     .input_path("./inbox")
///     .output_path("./sorted")
///     .mode(Mode::Type)
///     .move_files(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.mode, Mode::Type);
/// assert_eq!(config.action, Action::Move);
/// assert!(!config.is_silent());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    pub(super) input_path: Option<String>,
    pub(super) output_path: Option<String>,
    pub(super) mode: Option<Mode>,
    pub(super) move_files: Option<bool>,
    pub(super) dry_run: Option<bool>,
    pub(super) assume_yes: Option<bool>,
    pub(super) ignore_patterns: Option<Vec<String>>,
    pub(super) text_provider: Option<Provider>,
    pub(super) vision_provider: Option<Provider>,
    pub(super) text_model: Option<String>,
    pub(super) vision_model: Option<String>,
    pub(super) jobs: Option<usize>,
    pub(super) timeout_secs: Option<u64>,
    pub(super) silent: Option<bool>,
    pub(super) log_file: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_path: cli.input_path,
            output_path: cli.output_path,
            mode: cli.mode,
            move_files: Some(cli.move_files),
            dry_run: Some(cli.dry_run),
            assume_yes: Some(cli.assume_yes),
            ignore_patterns: cli.ignore_patterns,
            text_provider: cli.text_provider,
            vision_provider: cli.vision_provider,
            text_model: cli.text_model,
            vision_model: cli.vision_model,
            jobs: Some(cli.jobs),
            timeout_secs: Some(cli.timeout),
            silent: Some(cli.silent),
            log_file: cli.log_file,
        }
    }

    /// Sets the directory or file to organize.
    pub fn input_path(mut self, path: impl Into<String>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Sets the output root.
    pub fn output_path(mut self, path: impl Into<String>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Sets the classification mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Moves files instead of copying them.
    pub fn move_files(mut self, move_files: bool) -> Self {
        self.move_files = Some(move_files);
        self
    }

    /// Enables dry-run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Skips the confirmation prompt.
    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = Some(assume_yes);
        self
    }

    /// Sets glob patterns for entries to skip during discovery.
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = Some(patterns);
        self
    }

    /// Sets the provider for text inference.
    pub fn text_provider(mut self, provider: Provider) -> Self {
        self.text_provider = Some(provider);
        self
    }

    /// Sets the provider for image inference.
    pub fn vision_provider(mut self, provider: Provider) -> Self {
        self.vision_provider = Some(provider);
        self
    }

    /// Overrides the text model.
    pub fn text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = Some(model.into());
        self
    }

    /// Overrides the vision model.
    pub fn vision_model(mut self, model: impl Into<String>) -> Self {
        self.vision_model = Some(model.into());
        self
    }

    /// Sets how many files are processed concurrently in content mode.
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Sets the per-request inference timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Enables silent mode (messages go to the log file).
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = Some(silent);
        self
    }

    /// Sets the log file used in silent mode. Implies silent mode.
    pub fn log_file(mut self, path: impl Into<String>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Returns the mode set on the builder, if any.
    pub fn selected_mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Returns the text provider set on the builder, if any.
    pub fn selected_text_provider(&self) -> Option<Provider> {
        self.text_provider
    }

    /// Returns the vision provider set on the builder, if any.
    pub fn selected_vision_provider(&self) -> Option<Provider> {
        self.vision_provider
    }

    /// Where event messages will go, given the silent and log file options.
    pub fn log_destination(&self) -> LogDestination {
        determine_log_destination(self.silent, self.log_file.clone())
    }

    /// Checks option values and combinations without requiring an input path.
    ///
    /// # Errors
    /// Returns the same `ConfigError`s as [`ConfigBuilder::build`], except
    /// for a missing input path.
    pub fn validate(&self) -> Result<()> {
        validate_builder_options(self)?;
        compile_glob_vec(self.ignore_patterns.clone())?;
        Ok(())
    }

    /// Validates the options and builds the final `Config`.
    ///
    /// # Errors
    /// Returns a `ConfigError` if no input path was given, an option value is
    /// out of range, options conflict, or an ignore glob does not compile.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let input_path = non_blank(self.input_path).ok_or_else(|| ConfigError::InvalidValue {
            option: "INPUT".to_string(),
            reason: "an input path is required".to_string(),
        })?;

        let defaults = InferenceConfig::default();
        let inference = InferenceConfig {
            text_provider: self.text_provider.unwrap_or(defaults.text_provider),
            vision_provider: self.vision_provider.unwrap_or(defaults.vision_provider),
            text_model: non_blank(self.text_model).or_else(|| env_model("TEXT_LLM_MODEL")),
            vision_model: non_blank(self.vision_model).or_else(|| env_model("VISION_LLM_MODEL")),
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            jobs: self.jobs.unwrap_or(defaults.jobs),
        };

        Ok(Config {
            input_path,
            output_path: non_blank(self.output_path),
            mode: self.mode.unwrap_or_default(),
            action: if self.move_files.unwrap_or(false) {
                Action::Move
            } else {
                Action::Copy
            },
            dry_run: self.dry_run.unwrap_or(false),
            assume_yes: self.assume_yes.unwrap_or(false),
            discovery: DiscoveryConfig {
                ignore_patterns: compile_glob_vec(self.ignore_patterns)?,
            },
            inference,
            log_destination: determine_log_destination(self.silent, self.log_file),
        })
    }
}

/// Model override from the environment. Only consulted when no flag was given.
fn env_model(var: &str) -> Option<String> {
    non_blank(env::var(var).ok())
}
