//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LoggingConfig;

/// Bundled default configuration, compiled into the binary.
const DEFAULT_CONFIG: &str = include_str!("default.toml");

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoggingConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: LoggingConfig = toml::from_str(&content)?;
    Ok(config)
}

/// The bundled default configuration.
pub fn bundled_default() -> LoggingConfig {
    toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
}

/// Load the file at `path`, falling back to the bundled default when the
/// path is missing or unreadable. The fallback is reported on stderr, not
/// raised.
pub fn load_or_default(path: &Path) -> LoggingConfig {
    if !path.is_file() {
        return bundled_default();
    }
    match load_config(path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!(
                "corrlog: failed to load logging configuration from {}: {}",
                path.display(),
                err
            );
            bundled_default()
        }
    }
}
