// src/config/parsing.rs

use crate::errors::{ConfigError, Result};
use glob::Pattern;

/// Compiles a vector of glob strings into `glob::Pattern`s.
pub(super) fn compile_glob_vec(patterns: Option<Vec<String>>) -> Result<Option<Vec<Pattern>>> {
    patterns
        .map(|vec| {
            vec.into_iter()
                .map(|p| {
                    Pattern::new(&p).map_err(|e| {
                        ConfigError::InvalidValue {
                            option: "--ignore".to_string(),
                            reason: format!("invalid glob '{}': {}", p, e),
                        }
                        .into()
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .transpose()
}

/// Trims an optional string, treating blank input as absent.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_valid_globs() -> Result<()> {
        let patterns = Some(vec!["*.tmp".to_string(), "build/**".to_string()]);
        let compiled = compile_glob_vec(patterns)?;
        assert_eq!(compiled.map(|v| v.len()), Some(2));
        assert!(compile_glob_vec(None)?.is_none());
        Ok(())
    }

    #[test]
    fn test_compile_invalid_glob() {
        let result = compile_glob_vec(Some(vec!["[".to_string()]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid glob '['"));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  out ".to_string())), Some("out".to_string()));
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }
}
