//! Logging configuration and initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log level.
const LOG_LEVEL: &str = "LOG_LEVEL";

/// Environment variable holding the log format.
const LOG_FORMAT: &str = "LOG_FORMAT";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Read the logging settings from the environment, falling back to the
    /// defaults for unset variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: std::env::var(LOG_LEVEL).unwrap_or(defaults.level),
            format: std::env::var(LOG_FORMAT).unwrap_or(defaults.format),
        }
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// A `RUST_LOG` filter in the environment takes precedence over the
    /// configured level.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
