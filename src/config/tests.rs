//! Configuration tests
//!
//! Round-trip guards: every field written by `to_toml` must parse back
//! into the same value, so adding a field without serializing it fails here.

use super::*;
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

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved, config);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let config = Config {
        api_url: "https://runs.example.com".to_string(),
        request_timeout_secs: 5,
        theme: "trail".to_string(),
        yearly_order: YearOrder::Descending,
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_enabled: true,
            file_dir: PathBuf::from("/var/log/shoebox"),
            file_rotation: LogRotation::Hourly,
            file_prefix: "dash".to_string(),
        },
        ..Config::default()
    };

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(Config::resolve(parsed, no_env), config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let parsed: FileConfig = toml::from_str("").unwrap();
    assert_eq!(Config::resolve(parsed, no_env), Config::default());
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
api_url = "http://from-file:3000"
request_timeout_secs = 10
theme = "light"
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("SHOEBOX_API_URL", "http://from-env:4000"),
        ("SHOEBOX_TIMEOUT", "3"),
    ]);
    let config = Config::resolve(file, env);

    assert_eq!(config.api_url, "http://from-env:4000");
    assert_eq!(config.request_timeout_secs, 3);
    // Not overridden
    assert_eq!(config.theme, "light");
}

#[test]
fn test_unparseable_env_timeout_falls_back_to_file() {
    let file: FileConfig = toml::from_str("request_timeout_secs = 12").unwrap();
    let config = Config::resolve(file, env_from(&[("SHOEBOX_TIMEOUT", "soon")]));
    assert_eq!(config.request_timeout_secs, 12);
}

#[test]
fn test_runtime_toggles_come_from_env() {
    let config = Config::resolve(
        FileConfig::default(),
        env_from(&[("SHOEBOX_NO_TUI", "1"), ("SHOEBOX_DEMO", "true")]),
    );
    assert!(!config.enable_tui);
    assert!(config.demo_mode);

    let config = Config::resolve(FileConfig::default(), env_from(&[("SHOEBOX_NO_TUI", "0")]));
    assert!(config.enable_tui);
}

#[test]
fn test_partial_logging_section() {
    let file: FileConfig = toml::from_str(
        r#"
[logging]
file_enabled = true
file_rotation = "NEVER"
"#,
    )
    .unwrap();
    let config = Config::resolve(file, no_env);

    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_prefix, "shoebox");
}

#[test]
fn test_unknown_yearly_order_is_ascending() {
    let file: FileConfig = toml::from_str(r#"yearly_order = "sideways""#).unwrap();
    assert_eq!(Config::resolve(file, no_env).yearly_order, YearOrder::Ascending);
}

#[test]
fn test_request_timeout_never_zero() {
    let config = Config {
        request_timeout_secs: 0,
        ..Config::default()
    };
    assert_eq!(config.request_timeout(), Duration::from_secs(1));
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_load_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let file = Config::load_file_config(&dir.path().join("absent.toml")).unwrap();
    assert!(file.api_url.is_none());
    assert!(file.logging.is_none());
}

#[test]
fn test_load_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "api_url = \"http://nas.local:3000\"\ntheme = \"trail\"\n").unwrap();

    let config = Config::resolve(Config::load_file_config(&path).unwrap(), no_env);
    assert_eq!(config.api_url, "http://nas.local:3000");
    assert_eq!(config.theme, "trail");
}

#[test]
fn test_load_invalid_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "api_url = http://unquoted\n").unwrap();

    let err = Config::load_file_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.toml"));
}

#[test]
fn test_file_only_ignores_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "theme = \"light\"\n").unwrap();

    let from_file = Config::from_file_only(&path).unwrap();
    let with_env = Config::resolve(
        Config::load_file_config(&path).unwrap(),
        env_from(&[("SHOEBOX_THEME", "trail"), ("SHOEBOX_API_URL", "http://env:1")]),
    );

    assert_eq!(with_env.theme, "trail");
    assert_eq!(from_file.theme, "light");
    assert_eq!(from_file.api_url, Config::default().api_url);
}

#[test]
fn test_roundtrip_escapes_quotes_and_backslashes() {
    let config = Config {
        api_url: "http://host/\"odd\"".to_string(),
        logging: LoggingConfig {
            file_dir: PathBuf::from("C:\\logs\\shoebox"),
            file_prefix: "run\"log".to_string(),
            ..LoggingConfig::default()
        },
        ..Config::default()
    };

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(Config::resolve(parsed, no_env), config);
}

#[test]
fn test_lenient_enum_parsing() {
    assert_eq!(LogRotation::from_config("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_config("weekly"), LogRotation::Daily);
    assert_eq!(YearOrder::from_config(" desc "), YearOrder::Descending);
    assert_eq!(YearOrder::from_config("sideways"), YearOrder::Ascending);
}
