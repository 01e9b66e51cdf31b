// src/metadata/generate.rs

use super::FileMetadata;
use crate::cancellation::CancellationToken;
use crate::errors::{Error, InferenceError, Result};
use crate::inference::{prompts, TextInference, VisionInference};
use log::warn;

/// An image handed to the vision collaborator.
#[derive(Debug, Clone, Copy)]
pub struct ImageInput<'a> {
    /// Raw, encoded image bytes.
    pub bytes: &'a [u8],
    /// MIME type, e.g. `image/jpeg`.
    pub mime: &'a str,
}

/// Generates a description, file name and category for extracted text.
///
/// The summary comes first; the name and the category are both conditioned
/// on it and are requested concurrently. A failed or empty step leaves its
/// field empty and logs a warning.
///
/// # Errors
/// Returns `Error::Interrupted` if `token` is cancelled before any step.
///
/// # Examples
/// ```
/// use dirsort::cancellation::CancellationToken;
/// use dirsort::errors::InferenceError;
/// use dirsort::inference::TextInference;
/// use dirsort::metadata::generate_text_metadata;
///
/// struct Canned;
/// impl TextInference for Canned {
///     fn infer(&self, prompt: &str, _: &CancellationToken) -> Result<String, InferenceError> {
///         Ok(if prompt.ends_with("Filename:") {
///             "Filename: budget_review".to_string()
///         } else if prompt.ends_with("Category:") {
///             "finance".to_string()
///         } else {
///             "A quarterly budget review.".to_string()
///         })
///     }
/// }
///
/// let meta = generate_text_metadata("Q3 numbers...", &Canned, &CancellationToken::new()).unwrap();
/// assert_eq!(meta.description, "A quarterly budget review.");
/// assert_eq!(meta.name_label, "Filename: budget_review");
/// assert_eq!(meta.folder_label, "finance");
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(content_chars = content.len()))]
pub fn generate_text_metadata(
    content: &str,
    inference: &dyn TextInference,
    token: &CancellationToken,
) -> Result<FileMetadata> {
    ensure_running(token)?;
    let description = absorb("summary", inference.infer(&prompts::text_summary(content), token))?;

    ensure_running(token)?;
    let (name, folder) = rayon::join(
        || inference.infer(&prompts::file_name(&description, false), token),
        || inference.infer(&prompts::category(&description, false), token),
    );

    Ok(FileMetadata {
        folder_label: absorb("category", folder)?,
        name_label: absorb("file name", name)?,
        description,
    })
}

/// Generates a description, file name and category for an image.
///
/// Mirrors [`generate_text_metadata`]; every step sends the image along with
/// its prompt.
///
/// # Errors
/// Returns `Error::Interrupted` if `token` is cancelled before any step.
#[tracing::instrument(level = "debug", skip_all, fields(mime = image.mime, bytes = image.bytes.len()))]
pub fn generate_image_metadata(
    image: ImageInput<'_>,
    inference: &dyn VisionInference,
    token: &CancellationToken,
) -> Result<FileMetadata> {
    let ask = |prompt: &str| inference.infer_vision(prompt, image.bytes, image.mime, token);

    ensure_running(token)?;
    let description = absorb("description", ask(prompts::image_description()))?;

    ensure_running(token)?;
    let (name, folder) = rayon::join(
        || ask(&prompts::file_name(&description, true)),
        || ask(&prompts::category(&description, true)),
    );

    Ok(FileMetadata {
        folder_label: absorb("category", folder)?,
        name_label: absorb("file name", name)?,
        description,
    })
}

fn ensure_running(token: &CancellationToken) -> Result<()> {
    if token.is_cancelled() {
        Err(Error::Interrupted)
    } else {
        Ok(())
    }
}

/// Turns a step failure into an empty field. Cancellation still aborts.
fn absorb(step: &str, result: std::result::Result<String, InferenceError>) -> Result<String> {
    match result {
        Ok(answer) => Ok(answer),
        Err(InferenceError::Cancelled) => Err(Error::Interrupted),
        Err(e) => {
            warn!("Metadata step '{}' failed: {}", step, e);
            Ok(String::new())
        }
    }
}
