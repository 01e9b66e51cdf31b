// src/signal.rs

//! Ctrl+C handling.

use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};

/// Exit status used when the user interrupts a run.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Installs a Ctrl+C (SIGINT/SIGTERM) handler and returns the token it cancels.
///
/// The first signal cancels the token so running stages can stop at the next
/// item. A second signal exits immediately, which also covers a session that
/// is blocked waiting for input.
///
/// # Errors
/// Returns an error if a handler is already installed or cannot be set.
pub fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        if handler_token.is_cancelled() {
            eprintln!("\nExiting.");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
        log::info!("Ctrl+C received, cancelling.");
        eprintln!("\nCancelling... press Ctrl+C again to exit immediately.");
        handler_token.cancel();
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(token)
}
