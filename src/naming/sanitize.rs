// src/naming/sanitize.rs

use crate::constants::{MAX_TOKEN_LEN, PLACEHOLDER_NAME};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a restated prompt keyword at the start of a model answer,
/// e.g. `Filename:`, `**Category:**`, `Folder name - `.
///
/// A dash only counts with whitespace on both sides, so stems such as
/// `name-list` keep their first word.
static LABEL_ECHO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^[\s*#>"'`]*(?:file\s*name|folder\s*name|category|folder|name|title|label)(?:[\s*]*:|\s+-\s)[\s*]*"#,
    )
    .expect("label echo regex is valid")
});

/// Runs of separators and disallowed characters, collapsed to one `_`.
static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("separator run regex is valid"));

/// Normalizes a free-text label into a safe, bounded filesystem token.
///
/// The label is reduced to its first non-empty line (after dropping any
/// leading label echo such as `Filename:`), cut to the first `max_words`
/// whitespace-delimited words joined by `_`, lower-cased, and stripped of
/// everything outside `[a-z0-9_]`. The result is never empty: if nothing
/// survives, [`PLACEHOLDER_NAME`] is returned.
///
/// `max_words` of zero is treated as one.
///
/// # Examples
/// ```
/// use dirsort::naming::sanitize;
///
/// assert_eq!(sanitize("Filename: Sunset over the Mountains", 3), "sunset_over_the");
/// assert_eq!(sanitize("Category: Travel-Leisure", 2), "travel_leisure");
/// assert_eq!(sanitize("", 2), "untitled");
/// assert_eq!(sanitize("!!!", 2), "untitled");
/// ```
pub fn sanitize(label: &str, max_words: usize) -> String {
    let stripped = LABEL_ECHO.replace(label, "");
    let line = stripped
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    let joined = line
        .split_whitespace()
        .take(max_words.max(1))
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();

    let mut token = SEPARATOR_RUN.replace_all(&joined, "_").into_owned();
    // Only ASCII remains, so byte truncation is on a char boundary.
    token.truncate(MAX_TOKEN_LEN);
    let token = token.trim_matches('_');

    if token.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        token.to_string()
    }
}
