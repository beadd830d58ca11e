//! Integration tests for environment-driven configuration.
//!
//! The environment-touching assertions live in a single test function:
//! every test in this binary shares the same process environment, so
//! spreading `set_var`/`remove_var` across parallel tests would race.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use expense_store::config::Settings;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_env(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("expense-store-env-test-{nanos}-{suffix}.env"));
    fs::write(&path, contents).expect("write temp env file");
    path
}

fn clear_settings_vars() {
    for var in ["PROD", "DB_SCHEMA", "DB_USERNAME", "DB_PASSWORD"] {
        std::env::remove_var(var);
    }
}

#[test]
fn environment_merge_and_flag_semantics() {
    clear_settings_vars();

    // Nothing set: absence propagates as None, production off.
    let settings = Settings::from_env();
    assert!(!settings.on_production);
    assert!(settings.db_schema.is_none());
    assert!(settings.db_username.is_none());
    assert!(settings.db_password.is_none());
    assert!(settings.database_url().is_none());

    // A missing env file is tolerated.
    let settings = Settings::load_from("/nonexistent/.env");
    assert!(!settings.on_production);

    // Values arrive verbatim from the env file.
    let path = write_temp_env(
        "PROD=True\nDB_SCHEMA=expenses\nDB_USERNAME=expenses_api\nDB_PASSWORD=hunter2\n",
    );
    let settings = Settings::load_from(&path);
    let _ = fs::remove_file(&path);

    assert!(settings.on_production);
    assert_eq!(settings.db_schema.as_deref(), Some("expenses"));
    assert_eq!(settings.db_username.as_deref(), Some("expenses_api"));
    assert_eq!(settings.db_password.as_deref(), Some("hunter2"));
    assert_eq!(settings.database_url().as_deref(), Some("expenses.db"));

    // Variables already present in the process environment win over the
    // file: re-loading never overrides.
    clear_settings_vars();
    std::env::set_var("PROD", "False");
    std::env::set_var("DB_SCHEMA", "staging");
    let path = write_temp_env("PROD=True\nDB_SCHEMA=expenses\n");
    let settings = Settings::load_from(&path);
    let _ = fs::remove_file(&path);

    assert!(!settings.on_production);
    assert_eq!(settings.db_schema.as_deref(), Some("staging"));

    // The production flag is the exact literal "True" and nothing else.
    for value in ["true", "TRUE", "1", ""] {
        std::env::set_var("PROD", value);
        assert!(
            !Settings::from_env().on_production,
            "PROD={value:?} must not enable production"
        );
    }
    std::env::set_var("PROD", "True");
    assert!(Settings::from_env().on_production);

    clear_settings_vars();
}
