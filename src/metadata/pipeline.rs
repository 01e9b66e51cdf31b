// src/metadata/pipeline.rs

use super::generate::{generate_image_metadata, generate_text_metadata, ImageInput};
use super::gif::is_animated_gif;
use super::FileMetadata;
use crate::cancellation::CancellationToken;
use crate::classify::{file_stem_label, type_record, FileKind};
use crate::constants::{ANIMATED_GIF_FOLDER, FOLDER_MAX_WORDS, NAME_MAX_WORDS};
use crate::core_types::FileRecord;
use crate::errors::{Error, Result};
use crate::extraction::Extractor;
use crate::inference::Collaborators;
use crate::naming::sanitize;
use crate::output::Reporter;
use crate::progress::ProgressReporter;
use anyhow::anyhow;
use log::{debug, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

const ANIMATED_GIF_DESCRIPTION: &str = "Animated GIF (not processed by AI)";

/// Everything content mode needs besides the file list.
pub struct ContentContext<'a> {
    /// Text and vision inference.
    pub collaborators: &'a Collaborators,
    /// Reads text out of files.
    pub extractor: &'a dyn Extractor,
    /// Upper bound on files processed at once.
    pub jobs: usize,
    /// Receives one message block per processed file.
    pub reporter: &'a Reporter,
    /// Optional progress bar.
    pub progress: Option<Arc<dyn ProgressReporter>>,
}

/// Classifies files by their content.
///
/// Images go to the vision collaborator (animated GIFs are short-circuited),
/// text and code go through the extractor and the text collaborator, and
/// anything that cannot be read falls back to its by-type category. No file
/// is dropped. Records come back sorted by source path regardless of the
/// order in which workers finish.
///
/// # Errors
/// Returns `Error::Interrupted` if `token` is cancelled, or `Error::Generic`
/// if the worker pool cannot be created.
pub fn classify_by_content(
    paths: &[PathBuf],
    ctx: &ContentContext<'_>,
    token: &CancellationToken,
) -> Result<Vec<FileRecord>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(ctx.jobs.max(1))
        .thread_name(|i| format!("dirsort-meta-{i}"))
        .build()
        .map_err(|e| Error::Generic(anyhow!("Failed to start metadata workers: {e}")))?;

    if let Some(progress) = &ctx.progress {
        progress.set_length(paths.len() as u64);
        progress.set_message("Generating metadata".to_string());
    }
    let completed = AtomicU64::new(0);

    let results: Vec<Result<FileRecord>> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let record = describe_file(path, ctx, token);
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(progress) = &ctx.progress {
                    progress.set_position(done);
                }
                record
            })
            .collect()
    });

    if let Some(progress) = &ctx.progress {
        progress.finish();
    }

    let mut records = results.into_iter().collect::<Result<Vec<_>>>()?;
    records.sort_by(|a, b| a.source_path.cmp(&b.source_path));
    Ok(records)
}

fn describe_file(
    path: &Path,
    ctx: &ContentContext<'_>,
    token: &CancellationToken,
) -> Result<FileRecord> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    let started = Instant::now();
    let kind = FileKind::from_path(path);
    debug!("Generating metadata for '{}' ({})", path.display(), kind);

    let record = match kind {
        FileKind::Image if is_animated_gif(path) => {
            FileRecord::new(path, ANIMATED_GIF_FOLDER, file_stem_label(path))
                .with_description(ANIMATED_GIF_DESCRIPTION)
        }
        FileKind::Image => match fs::read(path) {
            Ok(bytes) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                let image = ImageInput {
                    bytes: &bytes,
                    mime: mime.essence_str(),
                };
                let metadata =
                    generate_image_metadata(image, ctx.collaborators.vision.as_ref(), token)?;
                into_record(path, metadata)
            }
            Err(e) => {
                warn!("Could not read image '{}': {}", path.display(), e);
                type_record(path)
            }
        },
        kind if kind.is_textual() => match ctx.extractor.extract(path, kind) {
            Ok(text) => {
                let metadata =
                    generate_text_metadata(&text, ctx.collaborators.text.as_ref(), token)?;
                into_record(path, metadata)
            }
            Err(e) => {
                debug!(
                    "No text for '{}' ({}); using its type category",
                    path.display(),
                    e
                );
                type_record(path)
            }
        },
        _ => type_record(path),
    };

    ctx.reporter.event(&format!(
        "File: {}\nTime taken: {:.2} seconds\nDescription: {}\nFolder name: {}\nGenerated filename: {}",
        path.display(),
        started.elapsed().as_secs_f64(),
        record.description,
        sanitize(&record.folder_label, FOLDER_MAX_WORDS),
        sanitize(&record.name_label, NAME_MAX_WORDS),
    ));
    Ok(record)
}

fn into_record(path: &Path, metadata: FileMetadata) -> FileRecord {
    FileRecord::new(path, metadata.folder_label, metadata.name_label)
        .with_description(metadata.description)
}
