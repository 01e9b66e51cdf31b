// src/output/sink.rs

//! Routes user-facing event messages to the console or to an append-only log file.
//!
//! The destination is chosen once per session and the two are exclusive: a
//! silent session prints nothing to the console.

use crate::config::LogDestination;
use crate::errors::{io_error_with_path, Result};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

/// Receives one message block per event.
///
/// `Reporter` is `Sync`; metadata workers share one instance. Write failures
/// are logged and otherwise ignored, since losing a progress message must
/// not abort a run.
pub struct Reporter {
    writer: Mutex<Box<dyn Write + Send>>,
    silent: bool,
}

impl Reporter {
    /// A reporter printing to standard output.
    pub fn console() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            silent: false,
        }
    }

    /// A reporter appending to the log file at `path`, creating it if needed.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be opened for appending.
    pub fn log_file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| io_error_with_path(e, path))?;
        log::debug!("Event messages go to '{}'", path.display());
        Ok(Self {
            writer: Mutex::new(Box::new(BufWriter::new(file))),
            silent: true,
        })
    }

    /// Builds the reporter for a configured destination.
    ///
    /// # Errors
    /// Returns `Error::Io` if a log file cannot be opened.
    pub fn for_destination(destination: &LogDestination) -> Result<Self> {
        match destination {
            LogDestination::Console => Ok(Self::console()),
            LogDestination::File(path) => Self::log_file(path),
        }
    }

    /// A reporter writing into memory, plus a handle to read what was written.
    ///
    /// # Examples
    /// ```
    /// use dirsort::output::Reporter;
    ///
    /// let (reporter, buffer) = Reporter::buffered();
    /// reporter.event("Organized 3 files.");
    /// assert_eq!(buffer.contents(), "Organized 3 files.\n");
    /// ```
    pub fn buffered() -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let reporter = Self {
            writer: Mutex::new(Box::new(buffer.clone())),
            silent: false,
        };
        (reporter, buffer)
    }

    /// Whether messages go to a log file instead of the console.
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Writes one message block. Log files get a blank line between blocks.
    pub fn event(&self, message: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let separator = if self.silent { "\n" } else { "" };
        let result = writeln!(writer, "{}{}", message.trim_end(), separator)
            .and_then(|_| writer.flush());
        if let Err(e) = result {
            log::warn!("Failed to write event message: {}", e);
        }
    }
}

/// A cloneable in-memory writer backing [`Reporter::buffered`].
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far, as (lossy) UTF-8.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "buffer lock poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
