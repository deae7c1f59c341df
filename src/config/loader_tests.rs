//! Tests for configuration loading and precedence.

use super::*;
use serial_test::serial;
use std::fs;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("segment_builder_cfg_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    fs::write(&path, contents).unwrap();
    path
}

// ===== load_config_file =====

#[test]
fn missing_file_is_not_an_error() {
    let path = std::env::temp_dir().join("segment_builder_cfg_does_not_exist.toml");
    let _ = fs::remove_file(&path);
    assert_eq!(load_config_file(path), Ok(None));
}

#[test]
fn full_file_parses() {
    let path = temp_config(
        "full",
        r#"
endpoint = "https://segments.example.com/api"
request_timeout_secs = 4
log_file_path = "/tmp/sb.log"
"#,
    );

    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(
        config.endpoint.as_deref(),
        Some("https://segments.example.com/api")
    );
    assert_eq!(config.request_timeout_secs, Some(4));
    assert_eq!(config.log_file_path, Some(PathBuf::from("/tmp/sb.log")));
}

#[test]
fn empty_file_parses_to_all_none() {
    let path = temp_config("empty", "");
    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(config, ConfigFile::default());
}

#[test]
fn unknown_key_is_rejected() {
    let path = temp_config("unknown", "theme = \"dark\"\n");
    let err = load_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn invalid_toml_is_rejected() {
    let path = temp_config("broken", "endpoint = \n");
    assert!(matches!(
        load_config_file(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

// ===== merge_config =====

#[test]
fn merge_without_file_uses_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_takes_file_values_over_defaults() {
    let file = ConfigFile {
        endpoint: Some("https://x.example/segments".to_string()),
        request_timeout_secs: Some(3),
        log_file_path: None,
    };
    let resolved = merge_config(Some(file));
    assert_eq!(resolved.endpoint, "https://x.example/segments");
    assert_eq!(resolved.request_timeout, Duration::from_secs(3));
    assert_eq!(resolved.log_file_path, default_log_path());
}

// ===== overrides =====

#[test]
#[serial(env)]
fn env_endpoint_overrides_file() {
    std::env::set_var(ENDPOINT_ENV, "https://env.example/segments");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    std::env::remove_var(ENDPOINT_ENV);

    assert_eq!(resolved.endpoint, "https://env.example/segments");
}

#[test]
#[serial(env)]
fn env_absent_keeps_value() {
    std::env::remove_var(ENDPOINT_ENV);
    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn cli_overrides_win() {
    let base = ResolvedConfig {
        endpoint: "https://file.example".to_string(),
        ..ResolvedConfig::default()
    };
    let resolved = apply_cli_overrides(base, Some("https://cli.example".to_string()), Some(7));
    assert_eq!(resolved.endpoint, "https://cli.example");
    assert_eq!(resolved.request_timeout, Duration::from_secs(7));
}

#[test]
fn cli_without_flags_changes_nothing() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
#[serial(env)]
fn explicit_path_beats_env_path() {
    let explicit = temp_config("explicit", "endpoint = \"https://explicit.example\"\n");
    let from_env = temp_config("from_env", "endpoint = \"https://env-file.example\"\n");

    std::env::set_var(CONFIG_ENV, &from_env);
    let loaded = load_config_with_precedence(Some(explicit));
    let env_loaded = load_config_with_precedence(None);
    std::env::remove_var(CONFIG_ENV);

    assert_eq!(
        loaded.unwrap().unwrap().endpoint.as_deref(),
        Some("https://explicit.example")
    );
    assert_eq!(
        env_loaded.unwrap().unwrap().endpoint.as_deref(),
        Some("https://env-file.example")
    );
}

// ===== validate =====

#[test]
fn default_config_is_valid() {
    assert_eq!(validate(&ResolvedConfig::default()), Ok(()));
}

#[test]
fn non_http_endpoint_is_rejected() {
    let config = ResolvedConfig {
        endpoint: "ftp://example.com/segments".to_string(),
        ..ResolvedConfig::default()
    };
    assert!(matches!(
        validate(&config),
        Err(ConfigError::InvalidEndpoint { .. })
    ));
}

#[test]
fn relative_endpoint_is_rejected() {
    let config = ResolvedConfig {
        endpoint: "/segments".to_string(),
        ..ResolvedConfig::default()
    };
    assert!(matches!(
        validate(&config),
        Err(ConfigError::InvalidEndpoint { .. })
    ));
}

#[test]
fn zero_timeout_is_rejected() {
    let config = ResolvedConfig {
        request_timeout: Duration::ZERO,
        ..ResolvedConfig::default()
    };
    assert_eq!(validate(&config), Err(ConfigError::ZeroTimeout));
}

#[test]
fn default_log_path_ends_with_log_file_name() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("segment-builder.log"),
        "unexpected default log path: {path:?}"
    );
}
