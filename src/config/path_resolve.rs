// src/config/path_resolve.rs

use super::Config;
use crate::constants::DEFAULT_OUTPUT_DIR_NAME;
use crate::errors::{ConfigError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Absolute paths derived from a `Config`, ready for the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// The canonicalized input path.
    pub path: PathBuf,
    /// Whether the input is a single file rather than a directory.
    pub is_file: bool,
    /// The absolute output root. It may not exist yet.
    pub output_root: PathBuf,
}

/// Resolves the input and output paths of a `Config`.
///
/// # Errors
/// Returns `ConfigError::PathResolution` if the input path does not exist.
pub fn resolve_input(config: &Config) -> Result<ResolvedInput> {
    let path = resolve_input_path(&config.input_path)?;
    let output_root = match &config.output_path {
        Some(output) => absolutize(Path::new(output)),
        None => default_output_root(&path),
    };
    Ok(ResolvedInput {
        is_file: path.is_file(),
        path,
        output_root,
    })
}

/// Resolves the input path string to an absolute, canonicalized PathBuf.
pub(crate) fn resolve_input_path(input_path_str: &str) -> Result<PathBuf> {
    PathBuf::from(input_path_str).canonicalize().map_err(|source| {
        ConfigError::PathResolution {
            path: input_path_str.to_string(),
            source,
        }
        .into()
    })
}

/// `organized_folder` next to the input (inside it if the input has no parent).
pub fn default_output_root(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or(input)
        .join(DEFAULT_OUTPUT_DIR_NAME)
}

/// Makes a path absolute without requiring it to exist. Existing paths are
/// canonicalized so they compare equal to walked entries.
fn absolutize(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        canonical
    } else if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_existing_dir_with_default_output() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let input = temp.path().join("inbox");
        fs::create_dir(&input)?;

        let mut config = Config::new_for_test();
        config.input_path = input.to_string_lossy().into_owned();
        let resolved = resolve_input(&config)?;

        assert!(resolved.path.is_absolute());
        assert!(!resolved.is_file);
        assert_eq!(
            resolved.output_root,
            resolved.path.parent().unwrap().join("organized_folder")
        );
        Ok(())
    }

    #[test]
    fn test_resolve_existing_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("test.txt");
        fs::write(&file_path, "content")?;

        let mut config = Config::new_for_test();
        config.input_path = file_path.to_string_lossy().into_owned();
        config.output_path = Some(temp.path().join("out").to_string_lossy().into_owned());
        let resolved = resolve_input(&config)?;

        assert!(resolved.is_file);
        assert!(resolved.output_root.ends_with("out"));
        Ok(())
    }

    #[test]
    fn test_relative_output_is_made_absolute() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let mut config = Config::new_for_test();
        config.input_path = temp.path().to_string_lossy().into_owned();
        config.output_path = Some("sorted".to_string());
        let resolved = resolve_input(&config)?;
        assert!(resolved.output_root.is_absolute());
        assert!(resolved.output_root.ends_with("sorted"));
        Ok(())
    }

    #[test]
    fn test_resolve_non_existent_path() {
        let mut config = Config::new_for_test();
        config.input_path = "non_existent_path_for_testing_dirsort".to_string();
        let result = resolve_input(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to resolve input path"));
    }
}
