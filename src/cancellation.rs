//! A shared flag for cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Signals long-running stages (discovery, metadata generation) to stop.
///
/// Clones share one flag. The Ctrl+C handler cancels the session's token;
/// stages check it between items and return `Error::Interrupted`. Execution
/// of an approved plan does not check it.
///
/// # Examples
///
/// ```
/// use dirsort::CancellationToken;
/// use std::thread;
///
/// let token = CancellationToken::new();
/// let worker_token = token.clone();
///
/// let handle = thread::spawn(move || {
///     let mut processed = 0;
///     while !worker_token.is_cancelled() && processed < 1_000_000 {
///         processed += 1;
///     }
///     processed
/// });
///
/// token.cancel();
/// assert!(handle.join().unwrap() <= 1_000_000);
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels this token and all of its clones.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once `cancel` has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
