//! Collects the files to organize, walking the input directory in parallel.
use crate::cancellation::CancellationToken;
use crate::config::path_resolve::ResolvedInput;
use crate::config::DiscoveryConfig;
use crate::errors::{Error, Result};
use crossbeam_channel::unbounded;
use ignore::WalkState;
use log::debug;
use std::path::PathBuf;

mod entry_processor;
mod walker;

use entry_processor::accept_entry;
use walker::build_walker;

/// Lists every regular file under the input path, sorted by path.
///
/// A file input yields just that file. Directories are walked recursively;
/// dot-prefixed entries, entries matching the `-i` globs, and the output
/// root (when it lies inside the input) are skipped.
///
/// # Errors
/// Returns `Error::Interrupted` if `token` is cancelled before or during the walk.
///
/// # Examples
///
/// ```
/// use dirsort::cancellation::CancellationToken;
/// use dirsort::config::{resolve_input, ConfigBuilder};
/// use dirsort::discovery::discover_files;
/// # use std::fs;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// fs::write(temp.path().join("b.txt"), "b")?;
/// fs::write(temp.path().join(".hidden"), "h")?;
/// fs::create_dir(temp.path().join("sub"))?;
/// fs::write(temp.path().join("sub").join("a.png"), "a")?;
///
/// let config = ConfigBuilder::new().input_path(temp.path().to_string_lossy()).build()?;
/// let resolved = resolve_input(&config)?;
/// let files = discover_files(&config.discovery, &resolved, &CancellationToken::new())?;
///
/// assert_eq!(files.len(), 2);
/// assert!(files[0].ends_with("b.txt"));
/// assert!(files[1].ends_with("sub/a.png"));
/// # Ok(())
/// # }
/// ```
pub fn discover_files(
    config: &DiscoveryConfig,
    resolved: &ResolvedInput,
    token: &CancellationToken,
) -> Result<Vec<PathBuf>> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    if resolved.is_file {
        debug!("Input is a single file: {}", resolved.path.display());
        return Ok(vec![resolved.path.clone()]);
    }

    let walker = build_walker(config, resolved);
    let (tx, rx) = unbounded();
    let token_clone = token.clone();

    walker.run(move || {
        let tx = tx.clone();
        let token = token_clone.clone();

        Box::new(move |entry_result| {
            if token.is_cancelled() {
                return WalkState::Quit;
            }
            if let Some(path) = accept_entry(entry_result) {
                if tx.send(path).is_err() {
                    log::error!("Receiver dropped, quitting discovery walk.");
                    return WalkState::Quit;
                }
            }
            WalkState::Continue
        })
    });

    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    let mut files: Vec<PathBuf> = rx.into_iter().collect();
    files.sort();

    debug!("Discovery complete. Files: {}", files.len());
    Ok(files)
}
