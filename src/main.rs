// src/main.rs

use anyhow::Result;
use clap::Parser;
use dirsort::cli::Cli;
use dirsort::config::ConfigBuilder;
use dirsort::errors::Error;
use dirsort::progress::terminal_progress;
use dirsort::session::Session;
use dirsort::signal::{setup_signal_handler, INTERRUPTED_EXIT_CODE};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // API keys and model overrides may live in a .env file.
    let dotenv = dotenvy::dotenv();

    // Initialize logging. Diagnostics share the terminal with the prompts, so
    // release builds default to 'warn' if RUST_LOG is not set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cfg!(debug_assertions) {
            "dirsort=debug"
        } else {
            "dirsort=warn"
        })
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    log::info!("Starting dirsort v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());
    if let Ok(path) = &dotenv {
        log::debug!("Loaded environment from '{}'", path.display());
    }

    // Keep panic output free of build paths.
    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => s.as_str(),
                None => "Box<Any>",
            },
        };
        eprintln!(
            "Application Error: {}",
            msg.replace(env!("CARGO_MANIFEST_DIR"), "<redacted>")
        );
    }));

    // --- Setup ---
    let cli = Cli::parse();
    let interactive = cli.input_path.is_none();
    let template = ConfigBuilder::from_cli(cli);
    if let Err(e) = template.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let token = setup_signal_handler()?;
    let silent = template.log_destination() != dirsort::LogDestination::Console;

    let stdin = std::io::stdin();
    let mut session = Session::new(stdin.lock(), std::io::stdout(), template, token)
        .with_progress(terminal_progress(silent));

    // --- Execution ---
    let result = if interactive {
        session.run_interactive()
    } else {
        session.run_once()
    };

    // --- Error Handling ---
    if let Err(e) = result {
        match e {
            Error::Interrupted => {
                eprintln!("\nOperation cancelled.");
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
            Error::NoFilesFound => {
                eprintln!("dirsort: No files found to organize.");
                std::process::exit(1);
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
