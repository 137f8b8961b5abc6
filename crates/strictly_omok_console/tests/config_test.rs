//! Tests for loading console config files.

use std::fs;
use tempfile::TempDir;

use strictly_omok::Player;
use strictly_omok_console::OmokConfig;

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("omok.toml");
    fs::write(
        &path,
        r#"black_name = "Alice"
white_name = "Bob"
export_dir = "saves"
log_filter = "debug"
"#,
    )
    .expect("Failed to write TOML");

    let config = OmokConfig::from_file(&path).expect("Config should load");
    assert_eq!(config.player_name(Player::Black), "Alice");
    assert_eq!(config.player_name(Player::White), "Bob");
    assert_eq!(config.export_dir().to_str(), Some("saves"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = OmokConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(config, OmokConfig::default());
}

#[test]
fn test_missing_file_is_error_for_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = OmokConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_file_is_not_replaced_by_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("omok.toml");
    fs::write(&path, "white_name = \"\"\n").expect("Failed to write TOML");

    let err = OmokConfig::load_or_default(&path).unwrap_err();
    assert_eq!(err.message, "Player names must not be empty");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = OmokConfig::from_toml("theme = \"dark\"\n").expect("Config should load");
    assert_eq!(config, OmokConfig::default());
}
