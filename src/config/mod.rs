//! Application configuration loaded from the process environment.
//!
//! Deployments keep their settings in a local `.env` file. Loading merges
//! that file into the process environment without overriding variables that
//! are already set, then reads the named variables into an explicit
//! [`Settings`] value constructed once at startup and passed by reference to
//! whatever opens the database.
//!
//! Configuration lookups never fail: an absent variable yields `None`, and
//! deciding whether that absence is fatal is left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use expense_store::config::Settings;
//!
//! let settings = Settings::load();
//! settings.logging.init();
//!
//! if settings.database_url().is_none() {
//!     eprintln!("DB_SCHEMA is not set");
//! }
//! ```

pub mod logging;

pub use logging::LoggingConfig;

/// Environment variable holding the production flag.
const PROD: &str = "PROD";

/// Environment variable holding the database schema name.
const DB_SCHEMA: &str = "DB_SCHEMA";

/// Environment variable holding the database username.
const DB_USERNAME: &str = "DB_USERNAME";

/// Environment variable holding the database password.
const DB_PASSWORD: &str = "DB_PASSWORD";

/// Process-wide settings read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// True only when the `PROD` variable is exactly `"True"`.
    pub on_production: bool,
    /// Database schema name, verbatim from `DB_SCHEMA`.
    pub db_schema: Option<String>,
    /// Database username, verbatim from `DB_USERNAME`.
    pub db_username: Option<String>,
    /// Database password, verbatim from `DB_PASSWORD`. The value is not
    /// masked; callers that log settings must redact it themselves.
    pub db_password: Option<String>,
    /// Logging level and format.
    pub logging: LoggingConfig,
}

impl Settings {
    /// Merge a `.env` file from the working directory into the process
    /// environment, then read the settings.
    ///
    /// A missing `.env` file is fine; variables already present in the
    /// environment always win over the file.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Like [`load`](Self::load), but merging an explicit env file instead
    /// of searching the working directory.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Self {
        let _ = dotenvy::from_path(path.as_ref());
        Self::from_env()
    }

    /// Read the settings from the process environment as-is.
    pub fn from_env() -> Self {
        Self {
            on_production: production_flag(std::env::var(PROD).ok().as_deref()),
            db_schema: std::env::var(DB_SCHEMA).ok(),
            db_username: std::env::var(DB_USERNAME).ok(),
            db_password: std::env::var(DB_PASSWORD).ok(),
            logging: LoggingConfig::from_env(),
        }
    }

    /// SQLite database URL for the configured schema, or `None` when
    /// `DB_SCHEMA` is unset.
    ///
    /// SQLite performs no username/password authentication; the credential
    /// fields are carried verbatim for callers fronting a server backend.
    #[must_use]
    pub fn database_url(&self) -> Option<String> {
        self.db_schema.as_ref().map(|schema| format!("{schema}.db"))
    }
}

/// True only for the exact literal `"True"`; `"true"`, `"TRUE"`, `"1"`, and
/// absence all read as production-off.
fn production_flag(raw: Option<&str>) -> bool {
    raw == Some("True")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_flag_requires_exact_literal() {
        assert!(production_flag(Some("True")));

        assert!(!production_flag(Some("true")));
        assert!(!production_flag(Some("TRUE")));
        assert!(!production_flag(Some("1")));
        assert!(!production_flag(Some("")));
        assert!(!production_flag(Some(" True")));
        assert!(!production_flag(None));
    }

    #[test]
    fn database_url_maps_schema_to_sqlite_file() {
        let settings = Settings {
            on_production: false,
            db_schema: Some("expenses".to_string()),
            db_username: None,
            db_password: None,
            logging: LoggingConfig::default(),
        };
        assert_eq!(settings.database_url().as_deref(), Some("expenses.db"));
    }

    #[test]
    fn database_url_is_none_without_schema() {
        let settings = Settings {
            on_production: false,
            db_schema: None,
            db_username: Some("api".to_string()),
            db_password: Some("secret".to_string()),
            logging: LoggingConfig::default(),
        };
        assert!(settings.database_url().is_none());
    }
}
