// src/session.rs

//! The interactive session and the one-shot run that share its flow.
//!
//! A session asks for a directory, shows its tree, asks how to organize it,
//! previews the plan, and applies it once the user agrees. It then offers
//! another sorting method or another directory. `/exit` at any prompt, or
//! end of input, leaves the session.

use crate::cancellation::CancellationToken;
use crate::config::{resolve_input, Config, ConfigBuilder, InferenceConfig, LogDestination};
use crate::constants::{DEFAULT_OUTPUT_DIR_NAME, SECTION_SEPARATOR};
use crate::core_types::Mode;
use crate::errors::{ConfigError, Error, InferenceError, Result};
use crate::inference::{self, Collaborators, Provider};
use crate::output::{input_tree, plan_preview, Reporter};
use crate::progress::ProgressReporter;
use crate::{apply, classify, discover, planner, Plan, RunContext};
use anyhow::anyhow;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

const EXIT_COMMAND: &str = "/exit";

type Connector =
    Box<dyn Fn(&InferenceConfig) -> std::result::Result<Collaborators, InferenceError>>;

/// Why a session step did not complete.
enum Stop {
    /// The user typed `/exit` or closed the input.
    Exit,
    Failed(Error),
}

impl From<Error> for Stop {
    fn from(e: Error) -> Self {
        Stop::Failed(e)
    }
}

impl From<ConfigError> for Stop {
    fn from(e: ConfigError) -> Self {
        Stop::Failed(e.into())
    }
}

impl From<InferenceError> for Stop {
    fn from(e: InferenceError) -> Self {
        Stop::Failed(e.into())
    }
}

impl From<io::Error> for Stop {
    fn from(e: io::Error) -> Self {
        Stop::Failed(Error::Generic(anyhow!("Terminal I/O failed: {e}")))
    }
}

type Step<T> = std::result::Result<T, Stop>;

/// Drives one or more organizing rounds over a reader and a writer.
///
/// Prompts and menus go to `output`; event messages go to the session's
/// [`Reporter`], which is the console or, in silent mode, a log file.
///
/// # Examples
/// ```
/// use dirsort::config::ConfigBuilder;
/// use dirsort::core_types::Mode;
/// use dirsort::output::Reporter;
/// use dirsort::session::Session;
/// use dirsort::CancellationToken;
/// use std::fs;
///
/// let temp = tempfile::tempdir().unwrap();
/// fs::write(temp.path().join("song.mp3"), "la").unwrap();
/// let out = temp.path().join("sorted");
///
/// let template = ConfigBuilder::new()
///     .input_path(temp.path().to_string_lossy())
///     .output_path(out.to_string_lossy())
///     .mode(Mode::Type);
/// let (reporter, _log) = Reporter::buffered();
/// let answers: &[u8] = b"yes\n";
/// let mut terminal = Vec::new();
///
/// Session::new(answers, &mut terminal, template, CancellationToken::new())
///     .with_reporter(reporter)
///     .run_once()
///     .unwrap();
///
/// assert!(out.join("other/song.mp3").exists());
/// ```
pub struct Session<R, W> {
    input: R,
    output: W,
    template: ConfigBuilder,
    token: CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
    connector: Connector,
    reporter: Option<Arc<Reporter>>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session. `template` supplies every option the user is not
    /// asked about.
    pub fn new(input: R, output: W, template: ConfigBuilder, token: CancellationToken) -> Self {
        Self {
            input,
            output,
            template,
            token,
            progress: None,
            connector: Box::new(inference::connect),
            reporter: None,
        }
    }

    /// Sets the progress bar used during metadata generation.
    pub fn with_progress(mut self, progress: Option<Arc<dyn ProgressReporter>>) -> Self {
        self.progress = progress;
        self
    }

    /// Replaces how inference collaborators are built for content mode.
    pub fn with_connector<F>(mut self, connector: F) -> Self
    where
        F: Fn(&InferenceConfig) -> std::result::Result<Collaborators, InferenceError> + 'static,
    {
        self.connector = Box::new(connector);
        self
    }

    /// Uses `reporter` for event messages instead of the configured destination.
    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = Some(Arc::new(reporter));
        self
    }

    /// Organizes the template's input path once.
    ///
    /// The only question asked is the confirmation, and only without
    /// `--yes` or `--dry-run`.
    ///
    /// # Errors
    /// Returns setup errors (invalid options, missing input, missing API
    /// key), `Error::NoFilesFound`, or `Error::Interrupted`.
    pub fn run_once(&mut self) -> Result<()> {
        let config = self.template.clone().build()?;
        let reporter = self.reporter_for(&config.log_destination)?;
        match self.organize(&config, false) {
            Ok(()) => Ok(()),
            Err(Stop::Exit) => {
                reporter.event("Operation canceled by the user.");
                Ok(())
            }
            Err(Stop::Failed(e)) => Err(e),
        }
    }

    /// Runs the interactive session until the user is done or types `/exit`.
    ///
    /// A failure while organizing one directory (no files, a bad path, a
    /// missing API key) is reported and the session moves on to the next
    /// directory.
    ///
    /// # Errors
    /// Returns `Error::Interrupted` on Ctrl+C, or an error if the terminal
    /// or the log file cannot be used.
    pub fn run_interactive(&mut self) -> Result<()> {
        match self.interactive_loop() {
            Ok(()) | Err(Stop::Exit) => {
                writeln!(self.output, "Exiting program.").map_err(|e| Error::Generic(e.into()))?;
                Ok(())
            }
            Err(Stop::Failed(e)) => Err(e),
        }
    }

    fn interactive_loop(&mut self) -> Step<()> {
        writeln!(
            self.output,
            "{SECTION_SEPARATOR}\n\
             NOTE: Organizing by content sends file contents to the selected inference provider.\n\
             Type '{EXIT_COMMAND}' at any prompt to exit.\n\
             {SECTION_SEPARATOR}"
        )?;

        let reporter = match self.reporter.clone() {
            Some(reporter) => reporter,
            None => {
                if self.template.log_destination() == LogDestination::Console
                    && self.ask_yes_no("Would you like to enable silent mode? (yes/no): ")?
                {
                    self.template = self.template.clone().silent(true);
                }
                let destination = self.template.log_destination();
                if let LogDestination::File(path) = &destination {
                    writeln!(
                        self.output,
                        "Silent mode enabled. Messages will be written to '{}'.",
                        path.display()
                    )?;
                }
                self.reporter_for(&destination)?
            }
        };

        loop {
            let input_path = self.ask_input_path()?;
            reporter.event(&format!("Input path successfully uploaded: {input_path}"));

            let output_path = self.ask_line(&format!(
                "Enter the path to store organized files and folders \
                 (press Enter to use '{DEFAULT_OUTPUT_DIR_NAME}' next to the input): "
            ))?;
            let mut builder = self.template.clone().input_path(input_path);
            if !output_path.is_empty() {
                builder = builder.output_path(output_path);
            }

            let outcome = builder
                .build()
                .map_err(Stop::from)
                .and_then(|config| self.organize(&config, true));
            match outcome {
                Ok(()) => {}
                Err(Stop::Failed(Error::Interrupted)) => return Err(Stop::Failed(Error::Interrupted)),
                Err(Stop::Failed(e)) => {
                    log::warn!("Organizing failed: {}", e);
                    reporter.event(&format!("Error: {e}"));
                }
                Err(Stop::Exit) => return Err(Stop::Exit),
            }

            if !self.ask_yes_no("Would you like to organize another directory? (yes/no): ")? {
                return Ok(());
            }
        }
    }

    /// One directory: discover, show, classify, plan, confirm, apply.
    fn organize(&mut self, config: &Config, interactive: bool) -> Step<()> {
        let reporter = self.reporter_for(&config.log_destination)?;
        let input = resolve_input(config)?;
        reporter.event(&format!(
            "Output path successfully set to: {}",
            input.output_root.display()
        ));
        let files = discover(config, &input, &reporter, &self.token)?;

        if !reporter.is_silent() {
            write!(
                self.output,
                "{SECTION_SEPARATOR}\nDirectory tree before organizing:\n{}{SECTION_SEPARATOR}\n",
                input_tree(&input.path)
            )?;
        }

        let mut preset_mode = if interactive {
            self.template.selected_mode()
        } else {
            Some(config.mode)
        };

        loop {
            let mode = match preset_mode.take() {
                Some(mode) => mode,
                None => self.ask_mode()?,
            };
            let mut config = config.clone();
            config.mode = mode;

            let collaborators = if mode == Mode::Content {
                if interactive {
                    self.choose_providers(&mut config.inference)?;
                }
                Some((self.connector)(&config.inference)?)
            } else {
                None
            };

            // Silent mode keeps the terminal to prompts only.
            let progress = if reporter.is_silent() {
                None
            } else {
                self.progress.clone()
            };
            let mut ctx = RunContext::new(&reporter, &self.token).with_progress(progress);
            if let Some(collaborators) = &collaborators {
                ctx = ctx.with_collaborators(collaborators);
            }
            let records = classify(&files, &config, &ctx)?;
            let plan = Plan {
                operations: planner::plan(&records, &input.output_root, config.action),
                input: input.clone(),
            };
            reporter.event(&plan_preview(&plan.operations, &plan.input.output_root));

            if config.dry_run
                || config.assume_yes
                || self.ask_yes_no("Would you like to proceed with these changes? (yes/no): ")?
            {
                apply(&plan, &config, &reporter);
                return Ok(());
            }

            if !interactive
                || !self.ask_yes_no("Would you like to choose another sorting method? (yes/no): ")?
            {
                reporter.event("Operation canceled by the user.");
                return Ok(());
            }
        }
    }

    fn choose_providers(&mut self, inference: &mut InferenceConfig) -> Step<()> {
        if self.template.selected_text_provider().is_none() {
            let provider =
                self.ask_provider("text", &Provider::all(), inference.text_provider)?;
            inference.text_provider = provider;
            self.template = self.template.clone().text_provider(provider);
        }
        if self.template.selected_vision_provider().is_none() {
            let choices: Vec<Provider> = Provider::all()
                .into_iter()
                .filter(|p| p.supports_vision())
                .collect();
            let provider = self.ask_provider("image", &choices, inference.vision_provider)?;
            inference.vision_provider = provider;
            self.template = self.template.clone().vision_provider(provider);
        }
        Ok(())
    }

    fn reporter_for(&mut self, destination: &LogDestination) -> Result<Arc<Reporter>> {
        if let Some(reporter) = &self.reporter {
            return Ok(Arc::clone(reporter));
        }
        let reporter = Arc::new(Reporter::for_destination(destination)?);
        self.reporter = Some(Arc::clone(&reporter));
        Ok(reporter)
    }

    // --- Prompts ---

    /// Reads one trimmed line. `/exit` and end of input stop the session.
    fn ask_line(&mut self, prompt: &str) -> Step<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Stop::Exit);
        }
        let answer = line.trim();
        if answer.eq_ignore_ascii_case(EXIT_COMMAND) {
            return Err(Stop::Exit);
        }
        Ok(answer.to_string())
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Step<bool> {
        loop {
            match self.ask_line(prompt)?.to_lowercase().as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => writeln!(
                    self.output,
                    "Please enter 'yes' or 'no'. To exit, type '{EXIT_COMMAND}'."
                )?,
            }
        }
    }

    fn ask_input_path(&mut self) -> Step<String> {
        loop {
            let path = self.ask_line("Enter the path of the directory you want to organize: ")?;
            if path.is_empty() {
                continue;
            }
            if Path::new(&path).exists() {
                return Ok(path);
            }
            writeln!(
                self.output,
                "Input path {path} does not exist. Please enter a valid path."
            )?;
        }
    }

    fn ask_mode(&mut self) -> Step<Mode> {
        writeln!(
            self.output,
            "Please choose the mode to organize your files:\n\
             1. By Content\n\
             2. By Date\n\
             3. By Type"
        )?;
        loop {
            match self
                .ask_line(&format!("Enter 1, 2, or 3 (or type '{EXIT_COMMAND}' to exit): "))?
                .as_str()
            {
                "1" => return Ok(Mode::Content),
                "2" => return Ok(Mode::Date),
                "3" => return Ok(Mode::Type),
                _ => writeln!(
                    self.output,
                    "Invalid selection. Please enter 1, 2, or 3. To exit, type '{EXIT_COMMAND}'."
                )?,
            }
        }
    }

    fn ask_provider(&mut self, purpose: &str, choices: &[Provider], default: Provider) -> Step<Provider> {
        writeln!(self.output, "Select the inference provider for {purpose} files:")?;
        for (i, provider) in choices.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, provider)?;
        }
        loop {
            let answer = self.ask_line(&format!(
                "Enter 1-{} (press Enter for {default}): ",
                choices.len()
            ))?;
            if answer.is_empty() {
                return Ok(default);
            }
            if let Some(provider) = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| choices.get(i))
            {
                return Ok(*provider);
            }
            writeln!(
                self.output,
                "Invalid selection. Please enter a number between 1 and {}.",
                choices.len()
            )?;
        }
    }
}
