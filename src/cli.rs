// src/cli.rs

use crate::core_types::Mode;
use crate::inference::Provider;
use clap::Parser;

/// Organizes a directory into categorized folders.
///
/// dirsort walks a directory, derives a category and a descriptive name for every
/// file (from its content via a language model, from its modification date, or
/// from its type), shows the resulting folder tree, and copies or moves the files
/// into it once you approve. Run it without an input path for an interactive session.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the directory or file to organize. Omit to start an interactive session.
    pub input_path: Option<String>,

    /// Directory to store the organized files in [default: 'organized_folder' next to the input].
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output_path: Option<String>,

    /// How to organize the files.
    #[arg(short = 'm', long, value_enum, value_name = "MODE")]
    pub mode: Option<Mode>,

    // --- Discovery Options ---
    /// Ignore files/directories matching these glob patterns (relative to the input path, repeatable).
    #[arg(short = 'i', long = "ignore", value_name = "GLOB", num_args = 1..)]
    pub ignore_patterns: Option<Vec<String>>,

    // --- Inference Options ---
    /// Provider used to summarize and name text files.
    #[arg(long, value_enum, value_name = "PROVIDER")]
    pub text_provider: Option<Provider>,

    /// Provider used to describe and name images.
    #[arg(long, value_enum, value_name = "PROVIDER")]
    pub vision_provider: Option<Provider>,

    /// Override the text provider's default model [env: TEXT_LLM_MODEL].
    #[arg(long, value_name = "MODEL")]
    pub text_model: Option<String>,

    /// Override the vision provider's default model [env: VISION_LLM_MODEL].
    #[arg(long, value_name = "MODEL")]
    pub vision_model: Option<String>,

    /// Number of files to generate metadata for concurrently.
    #[arg(short = 'j', long, value_name = "N", default_value_t = 1)]
    pub jobs: usize,

    /// Timeout for each inference request, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = crate::constants::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    // --- Execution Control ---
    /// Move files instead of copying them.
    #[arg(long = "move", action = clap::ArgAction::SetTrue)]
    pub move_files: bool,

    /// Perform a dry run. Show the planned operations without touching the filesystem.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Apply the plan without asking for confirmation.
    #[arg(short = 'y', long = "yes", action = clap::ArgAction::SetTrue)]
    pub assume_yes: bool,

    // --- Output Options ---
    /// Silent mode: write all messages to a log file instead of the terminal.
    #[arg(short = 's', long, action = clap::ArgAction::SetTrue)]
    pub silent: bool,

    /// Log file used in silent mode (implies --silent) [default: operation_log.txt].
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<String>,
}
