use clap::Parser;
use moviedeck::cli::Cli;
use moviedeck::config::{Config, ConfigError, RepositorySource};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.repository.source, RepositorySource::Fixtures);
    assert!(config.repository.fixtures_path.is_none());
    assert_eq!(config.repository.base_url, "https://api.themoviedb.org/3");
    assert_eq!(config.repository.language, "en-US");
    assert_eq!(config.repository.timeout_seconds, 10);
    assert_eq!(config.home.category, "popular");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

/// Test that Config::config_path() ends with the app directory.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("moviedeck/config.toml"));
}

/// Test that a missing file yields defaults.
#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

/// Test that every section is read from TOML.
#[test]
fn test_full_config_parses() {
    let (_dir, path) = write_config(
        r##"
[repository]
source = "tmdb"
api_key = "secret"
language = "de-DE"
timeout_seconds = 3

[home]
category = "top_rated"

[ui]
tick_rate_ms = 250

[theme]
accent = "#ff8800"
padding_large = 2

[logging]
level = "debug"
file = "/tmp/moviedeck-test.log"
"##,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.repository.source, RepositorySource::Tmdb);
    assert_eq!(config.repository.api_key.as_deref(), Some("secret"));
    assert_eq!(config.repository.language, "de-DE");
    assert_eq!(config.repository.timeout_seconds, 3);
    assert_eq!(config.home.category, "top_rated");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.theme.accent.as_deref(), Some("#ff8800"));
    assert_eq!(config.theme.padding_large, Some(2));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/tmp/moviedeck-test.log"))
    );
}

/// Test that partial files keep defaults for the rest.
#[test]
fn test_partial_config_keeps_defaults() {
    let (_dir, path) = write_config("[home]\ncategory = \"upcoming\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.home.category, "upcoming");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.repository.source, RepositorySource::Fixtures);
}

/// Test that the tmdb source requires an api key.
#[test]
fn test_tmdb_without_key_fails_validation() {
    let (_dir, path) = write_config("[repository]\nsource = \"tmdb\"\napi_key = \"  \"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("api_key"));
}

/// Test that a zero tick rate is rejected.
#[test]
fn test_zero_tick_rate_fails_validation() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

/// Test that an unparseable colour is rejected.
#[test]
fn test_bad_colour_fails_validation() {
    let (_dir, path) = write_config("[theme]\naccent = \"not-a-colour\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

/// Test that malformed TOML reports a parse error with the path.
#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[home\ncategory = ");
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

/// Test that `--fixtures` rescues a tmdb config that has no api key.
#[test]
fn test_fixtures_flag_overrides_tmdb_without_key() {
    let (_dir, path) = write_config("[repository]\nsource = \"tmdb\"\n");
    let path_arg = path.to_string_lossy().into_owned();
    let cli = Cli::parse_from([
        "moviedeck",
        "--config",
        path_arg.as_str(),
        "--fixtures",
        "/tmp/catalog.json",
    ]);

    let config = cli.resolve_config().unwrap();
    assert_eq!(config.repository.source, RepositorySource::Fixtures);
    assert_eq!(
        config.repository.fixtures_path,
        Some(PathBuf::from("/tmp/catalog.json"))
    );
}

/// Test that `--category` replaces an empty category before validation.
#[test]
fn test_category_flag_overrides_empty_category() {
    let (_dir, path) = write_config("[home]\ncategory = \"\"\n");
    let path_arg = path.to_string_lossy().into_owned();
    let cli = Cli::parse_from(["moviedeck", "--config", path_arg.as_str(), "--category", "top_rated"]);

    let config = cli.resolve_config().unwrap();
    assert_eq!(config.home.category, "top_rated");
}

/// Test that validation still applies when no flag fixes the config.
#[test]
fn test_resolve_config_without_overrides_validates() {
    let (_dir, path) = write_config("[repository]\nsource = \"tmdb\"\n");
    let path_arg = path.to_string_lossy().into_owned();
    let cli = Cli::parse_from(["moviedeck", "--config", path_arg.as_str()]);

    let err = cli.resolve_config().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

/// Test that parsing alone does not validate.
#[test]
fn test_parse_from_skips_validation() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    let config = Config::parse_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 0);
    assert!(config.validate().is_err());
}
