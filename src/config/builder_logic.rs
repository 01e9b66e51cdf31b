// src/config/builder_logic.rs

use super::{ConfigBuilder, LogDestination};
use crate::constants::DEFAULT_LOG_FILE;
use crate::core_types::Mode;
use crate::errors::{ConfigError, Result};
use std::path::PathBuf;

/// Validates combinations of options on the `ConfigBuilder`.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    if builder.jobs == Some(0) {
        return Err(ConfigError::InvalidValue {
            option: "--jobs".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    if builder.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidValue {
            option: "--timeout".to_string(),
            reason: "must be at least 1 second".to_string(),
        }
        .into());
    }
    if let Some(provider) = builder.vision_provider {
        if !provider.supports_vision() {
            return Err(ConfigError::InvalidValue {
                option: "--vision-provider".to_string(),
                reason: format!("'{}' has no vision model", provider),
            }
            .into());
        }
    }
    if let Some(mode) = builder.mode.filter(|m| *m != Mode::Content) {
        if builder.text_model.is_some() || builder.vision_model.is_some() {
            return Err(ConfigError::Conflict {
                option1: "--text-model/--vision-model".to_string(),
                option2: format!("--mode {}", mode),
            }
            .into());
        }
    }
    Ok(())
}

/// Determines where event messages go. A log file path implies silent mode.
pub(super) fn determine_log_destination(
    silent: Option<bool>,
    log_file: Option<String>,
) -> LogDestination {
    match log_file {
        Some(path) => LogDestination::File(PathBuf::from(path)),
        None if silent.unwrap_or(false) => LogDestination::File(PathBuf::from(DEFAULT_LOG_FILE)),
        None => LogDestination::Console,
    }
}
