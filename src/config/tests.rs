//! Configuration tests
//!
//! Round-trips guard the hand-written TOML template: when a field is added
//! to Config but not to to_toml() (or vice versa) these fail.

use super::*;
use crate::generation::Mode;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let loaded = Config::from_file_config(parsed.unwrap(), no_env);
    assert_eq!(loaded.theme, config.theme);
    assert_eq!(loaded.demo, config.demo);
    assert_eq!(loaded.ui, config.ui);
    assert_eq!(loaded.logging.file_rotation, config.logging.file_rotation);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.theme = "Nord".to_string();
    config.use_theme_background = false;
    config.demo.latency_ms = 1200;
    config.demo.default_mode = Mode::Code;
    config.ui.toast_duration_ms = 500;
    config.ui.show_logs = true;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file = Config::parse_file_config(&config.to_toml()).unwrap();
    let loaded = Config::from_file_config(file, no_env);

    assert_eq!(loaded.theme, "Nord");
    assert!(!loaded.use_theme_background);
    assert_eq!(loaded.demo, config.demo);
    assert_eq!(loaded.ui, config.ui);
    assert_eq!(loaded.logging.level, "debug");
    assert!(loaded.logging.file_enabled);
    assert_eq!(loaded.logging.file_rotation, LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults and precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let file = Config::parse_file_config("").unwrap();
    let config = Config::from_file_config(file, no_env);

    assert_eq!(config.theme, DEFAULT_THEME);
    assert_eq!(config.demo.latency_ms, 300);
    assert_eq!(config.demo.default_mode, Mode::Text);
    assert_eq!(config.ui.toast_duration_ms, 2000);
    assert!(!config.ui.show_logs);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
theme = "McRelly Light"

[demo]
latency_ms = 50
default_mode = "image"
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("MCRELLY_THEME", "Nord"),
        ("MCRELLY_LATENCY_MS", "10"),
        ("MCRELLY_MODE", "code"),
    ]);
    let config = Config::from_file_config(file, env);

    assert_eq!(config.theme, "Nord");
    assert_eq!(config.demo.latency_ms, 10);
    assert_eq!(config.demo.default_mode, Mode::Code);
}

#[test]
fn test_invalid_env_values_are_ignored() {
    let file = Config::parse_file_config("[demo]\nlatency_ms = 75\n").unwrap();
    let env = env_from(&[("MCRELLY_LATENCY_MS", "soon"), ("MCRELLY_MODE", "video")]);
    let config = Config::from_file_config(file, env);

    assert_eq!(config.demo.latency_ms, 75);
    assert_eq!(config.demo.default_mode, Mode::Text);
}

#[test]
fn test_unknown_file_mode_falls_back_to_text() {
    let file = Config::parse_file_config("[demo]\ndefault_mode = \"audio\"\n").unwrap();
    let config = Config::from_file_config(file, no_env);
    assert_eq!(config.demo.default_mode, Mode::Text);
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(Config::parse_file_config("[demo]\nlatency_ms = \"fast\"\n").is_err());
    assert!(Config::parse_file_config("theme = ").is_err());
}

#[test]
fn test_log_rotation_parsing() {
    assert_eq!("HOURLY".parse(), Ok(LogRotation::Hourly));
    assert_eq!(" never".parse(), Ok(LogRotation::Never));
    assert!("weekly".parse::<LogRotation>().is_err());
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    let file = Config::parse_file_config("[logging]\nfile_rotation = \"weekly\"\n").unwrap();
    let config = Config::from_file_config(file, no_env);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_durations() {
    let config = Config::default();
    assert_eq!(config.demo.latency(), crate::generation::DEFAULT_LATENCY);
    assert_eq!(config.ui.toast_duration().as_millis(), 2000);
}
