//! Shared configuration for the scrapper command-line tool.
//!
//! Values are layered by `ortho_config`: built-in defaults, then a
//! configuration file (discovered or named with `--config-path` or
//! `SCRAPPER_CONFIG_PATH`), then `SCRAPPER_*` environment variables, then
//! command-line flags. Later layers win.

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

mod defaults;
mod logging;

pub use defaults::{DEFAULT_LOG_FILTER, default_log_filter, default_log_format};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved runtime configuration.
///
/// Fields are optional so an absent layer never masks a lower one. The
/// accessors fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "SCRAPPER")]
pub struct Config {
    /// Tracing filter expression, for example `scrapper=debug`.
    #[serde(default)]
    pub log_filter: Option<String>,
    /// Output format for diagnostics written to standard error.
    #[serde(default)]
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Returns the configured log filter, or the default when unset.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Returns the configured log format, or the default when unset.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_else(default_log_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let config = Config::default();
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(config.log_format(), LogFormat::Compact);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config {
            log_filter: Some("scrapper=trace".to_owned()),
            log_format: Some(LogFormat::Json),
        };
        assert_eq!(config.log_filter(), "scrapper=trace");
        assert_eq!(config.log_format(), LogFormat::Json);
    }
}
