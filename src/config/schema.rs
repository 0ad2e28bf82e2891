//! Configuration schema definitions.

use std::collections::BTreeMap;
use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "CORRLOG_FORMAT";

/// Environment variable pointing at the logging configuration file.
pub const CONFIG_PATH_ENV: &str = "CORRLOG_CONFIG";

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/corrlog/logging.toml";

/// Process-wide log output format, fixed at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Read the format selector from the environment. Anything other than
    /// `Json` (case-insensitive) means `Text`.
    pub fn from_env() -> Self {
        match env::var(FORMAT_ENV) {
            Ok(value) if value.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Logging backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level applied to targets without an override.
    pub default_level: String,

    /// Per-target level overrides, e.g. `"corrlog::mdal" = "debug"`.
    pub target_levels: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            target_levels: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Render as an env-filter directive string: default level first, then
    /// one `target=level` directive per override.
    pub fn filter_directives(&self) -> String {
        let mut directives = self.default_level.clone();
        for (target, level) in &self.target_levels {
            directives.push(',');
            directives.push_str(target);
            directives.push('=');
            directives.push_str(level);
        }
        directives
    }
}

/// Configuration file path from the environment, with the conventional
/// fallback location.
pub fn config_path_from_env() -> String {
    env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.default_level, "info");
        assert!(config.target_levels.is_empty());
        assert_eq!(config.filter_directives(), "info");
    }

    #[test]
    fn test_filter_directives_with_overrides() {
        let mut config = LoggingConfig::default();
        config
            .target_levels
            .insert("corrlog::mdal".to_string(), "debug".to_string());
        config
            .target_levels
            .insert("corrlog::apm".to_string(), "warn".to_string());

        assert_eq!(
            config.filter_directives(),
            "info,corrlog::apm=warn,corrlog::mdal=debug"
        );
    }

    #[test]
    fn test_output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
