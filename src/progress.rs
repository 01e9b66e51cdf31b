// src/progress.rs

//! Progress reporting for metadata generation.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

/// Abstracts over the progress bar so library callers can plug in their own.
///
/// # Examples
///
/// ```
/// use dirsort::progress::ProgressReporter;
/// use std::sync::atomic::{AtomicU64, Ordering};
///
/// struct Counter(AtomicU64);
/// impl ProgressReporter for Counter {
///     fn set_length(&self, _len: u64) {}
///     fn set_position(&self, pos: u64) { self.0.store(pos, Ordering::SeqCst); }
///     fn set_message(&self, _msg: String) {}
///     fn finish(&self) {}
/// }
///
/// let counter = Counter(AtomicU64::new(0));
/// counter.set_position(3);
/// assert_eq!(counter.0.load(Ordering::SeqCst), 3);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Sets the number of files to process.
    fn set_length(&self, len: u64);
    /// Sets how many files are done.
    fn set_position(&self, pos: u64);
    /// Sets the label shown next to the bar.
    fn set_message(&self, msg: String);
    /// Hides the bar.
    fn finish(&self);
}

/// A progress bar on stderr, using `indicatif`.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a hidden-until-used bar with the default style.
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        let bar = ProgressBar::new(0);
        bar.set_style(style);
        Self { bar }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// A progress bar when stderr is a terminal and the session is not silent.
pub fn terminal_progress(silent: bool) -> Option<Arc<dyn ProgressReporter>> {
    #[cfg(feature = "progress")]
    {
        if !silent && atty::is(atty::Stream::Stderr) {
            return Some(Arc::new(IndicatifProgress::new()));
        }
    }
    #[cfg(not(feature = "progress"))]
    let _ = silent;
    None
}
