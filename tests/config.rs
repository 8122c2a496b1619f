//! Tests for configuration loading and defaults.

use clearlog::{ConfigProvider, Error, StaticConfig};

#[test]
fn defaults_are_sensible() {
    let config = StaticConfig::default();

    assert_eq!(config.default_channels(), vec!["default".to_string()]);
    assert_eq!(config.default_message_level(), "info");
    assert_eq!(config.default_exception_level(), "error");
    assert_eq!(config.default_renderer(), "text");
    assert_eq!(config.timezones(), vec!["UTC".to_string()]);
    assert_eq!(config.prefix(), "");
    assert!(config.use_call_stack_order());
    assert!(!config.running_in_background());
}

#[test]
fn partial_toml_overrides_only_what_it_names() {
    let config = StaticConfig::from_toml_str(
        r#"
channels = ["slack", "daily"]
prefix = "%LEVEL%> "

[levels]
exception = "critical"

[renderers.channels]
slack = "text"
"#,
    )
    .unwrap();

    assert_eq!(
        config.default_channels(),
        vec!["slack".to_string(), "daily".to_string()]
    );
    assert_eq!(config.prefix(), "%LEVEL%> ");
    assert_eq!(config.default_exception_level(), "critical");
    // unnamed settings keep their defaults
    assert_eq!(config.default_message_level(), "info");
    assert_eq!(
        config.renderer_overrides().get("slack").map(String::as_str),
        Some("text")
    );
}

#[test]
fn time_settings_parse() {
    let config = StaticConfig::from_toml_str(
        r#"
[time]
timezones = ["UTC", "Europe/Berlin"]
format = ["%Y-%m-%d", "%H:%M"]
"#,
    )
    .unwrap();

    assert_eq!(config.timezones().len(), 2);
    assert_eq!(config.datetime_format(), vec!["%Y-%m-%d", "%H:%M"]);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = StaticConfig::from_toml_str("channels = notalist").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn wrong_shape_is_a_parse_error() {
    let err = StaticConfig::from_toml_str("channels = \"default\"").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn load_reads_a_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clearlog.toml");
    std::fs::write(&path, "project_root = \"/srv/app\"\n").unwrap();

    let config = StaticConfig::load(&path).unwrap();
    assert_eq!(config.project_root(), "/srv/app");
}

#[test]
fn load_reports_the_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = StaticConfig::load(&path).unwrap_err();
    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other}"),
    }
}

#[test]
fn background_command_from_args_quotes_where_needed() {
    let config = StaticConfig::default()
        .background_command_from_args(["worker", "--queue", "mail sender"]);

    assert!(config.running_in_background());
    assert_eq!(
        config.background_command().as_deref(),
        Some("worker --queue 'mail sender'")
    );
}
