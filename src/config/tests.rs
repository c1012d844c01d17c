// Config parsing tests
//
// These exercise the file layer directly (parse + resolve) rather than
// Config::from_env, so they stay independent of the host environment.

use super::*;

#[test]
fn empty_file_yields_defaults() {
    let file = Config::parse_file_config("").unwrap();
    assert!(file.api_url.is_none());
    assert!(file.theme.is_none());
    assert!(file.logging.is_none());
}

#[test]
fn file_values_override_defaults() {
    let file = Config::parse_file_config(
        r#"
api_url = "http://localhost:8000"
theme = "Nord"

[logging]
level = "debug"
file_enabled = true
file_rotation = "hourly"
"#,
    )
    .unwrap();

    let config = Config::resolve(file);
    assert_eq!(config.api_url, "http://localhost:8000");
    assert_eq!(config.theme, "Nord");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    // Untouched logging fields keep their defaults
    assert_eq!(config.logging.file_prefix, "dsaquest");
}

#[test]
fn malformed_toml_is_an_error() {
    assert!(Config::parse_file_config("api_url = not quoted").is_err());
}

#[test]
fn unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
}

#[test]
fn template_round_trips_through_the_parser() {
    let template = Config::default().to_toml();
    let file = Config::parse_file_config(&template).unwrap();
    let config = Config::resolve(file);

    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.theme, "Quest Dark");
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file_enabled);
}
