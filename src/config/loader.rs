//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::Settings;
use crate::config::validation::{validate_settings, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("env file not found: {0:?}")]
    EnvFileNotFound(PathBuf),

    #[error("failed to read env file {path:?}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("missing required configuration keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a KEY=value file into the process environment.
///
/// Existing variables are overwritten. Returns the keys that were set so
/// the caller can log them (values are never logged).
pub fn load_env_file(path: &Path) -> Result<Vec<String>, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::EnvFileNotFound(path.to_path_buf()));
    }

    let env_error = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let mut keys = Vec::new();
    for item in dotenvy::from_path_iter(path).map_err(env_error)? {
        let (key, value) = item.map_err(env_error)?;
        std::env::set_var(&key, value);
        keys.push(key);
    }

    tracing::debug!(path = %path.display(), keys = ?keys, "Env file loaded");
    Ok(keys)
}

/// Load and validate settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;

    validate_settings(&settings).map_err(ConfigError::Validation)?;

    Ok(settings)
}
