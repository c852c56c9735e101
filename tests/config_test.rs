//! Tests for loading the TOML config from disk.

use std::io::Write;
use std::time::Duration;
use tictactoe::GameConfig;
use tictactoe_core::Locale;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_file_values_are_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "locale = \"indonesian\"\nlog_filter = \"debug\"\nlog_file = \"game.log\"\npoll_interval_ms = 40"
    )
    .unwrap();

    let config = GameConfig::load_or_default(file.path()).unwrap();
    assert_eq!(*config.locale(), Locale::Indonesian);
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.poll_interval(), Duration::from_millis(40));
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "poll_interval_ms = \"soon\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_locale_override() {
    let config = GameConfig::default().with_locale(Locale::Indonesian);
    assert_eq!(*config.locale(), Locale::Indonesian);
}

#[test]
fn test_invalid_log_filter_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"tictactoe=loud\"").unwrap();

    let err = GameConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Invalid log_filter"));
}
