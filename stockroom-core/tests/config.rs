use std::fs;

use serial_test::serial;
use stockroom_core::config::{ConfigError, ConfigValue, StockroomConfig};

#[test]
fn test_empty_config() {
    let config = StockroomConfig::empty();
    assert!(matches!(
        config.get::<String>("nonexistent"),
        Err(ConfigError::NotFound(_))
    ));
}

#[test]
fn test_set_and_get() {
    let mut config = StockroomConfig::empty();
    config.set("server.host", ConfigValue::String("127.0.0.1".into()));
    assert_eq!(config.get::<String>("server.host").unwrap(), "127.0.0.1");
}

#[test]
fn test_get_or_uses_default_only_when_missing() {
    let mut config = StockroomConfig::empty();
    assert_eq!(config.get_or("server.port", 3000u16).unwrap(), 3000);

    config.set("server.port", ConfigValue::String("not-a-port".into()));
    assert!(matches!(
        config.get_or("server.port", 3000u16),
        Err(ConfigError::TypeMismatch { .. })
    ));
}

#[test]
fn test_flatten_yaml() {
    let yaml = r#"
server:
  port: 8080
database:
  url: "sqlite::memory:"
  pool:
    size: 4
  autocreate: false
"#;
    let config = StockroomConfig::from_yaml_str(yaml, "test").unwrap();

    assert_eq!(config.get::<u16>("server.port").unwrap(), 8080);
    assert_eq!(config.get::<String>("database.url").unwrap(), "sqlite::memory:");
    assert_eq!(config.get::<u32>("database.pool.size").unwrap(), 4);
    assert!(!config.get::<bool>("database.autocreate").unwrap());
    assert_eq!(config.profile(), "test");
}

#[test]
fn test_invalid_yaml_is_load_error() {
    let err = StockroomConfig::from_yaml_str("server: [unclosed", "test").unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
#[serial]
fn test_profile_file_overrides_base_and_env_overrides_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("application.yaml"),
        "server:\n  port: 3000\n  host: 0.0.0.0\nstockroomtest:\n  layer: base\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("application-staging.yaml"),
        "server:\n  port: 4000\nstockroomtest:\n  layer: profile\n",
    )
    .unwrap();
    fs::write(dir.path().join(".env.staging"), "STOCKROOMTEST_DOTENV=loaded\n").unwrap();

    std::env::remove_var("STOCKROOM_PROFILE");
    std::env::set_var("STOCKROOMTEST_LAYER", "env");

    let config = StockroomConfig::load_from_dir(dir.path(), "staging").unwrap();

    assert_eq!(config.profile(), "staging");
    assert_eq!(config.get::<u16>("server.port").unwrap(), 4000);
    assert_eq!(config.get::<String>("server.host").unwrap(), "0.0.0.0");
    assert_eq!(config.get::<String>("stockroomtest.layer").unwrap(), "env");
    assert_eq!(config.get::<String>("stockroomtest.dotenv").unwrap(), "loaded");

    std::env::remove_var("STOCKROOMTEST_LAYER");
    std::env::remove_var("STOCKROOMTEST_DOTENV");
}

#[test]
#[serial]
fn test_missing_files_yield_env_only_config() {
    let dir = tempfile::tempdir().unwrap();
    std::env::remove_var("STOCKROOM_PROFILE");
    let config = StockroomConfig::load_from_dir(dir.path(), "dev").unwrap();
    assert_eq!(config.profile(), "dev");
    assert!(matches!(
        config.get::<String>("stockroomtest.layer"),
        Err(ConfigError::NotFound(_))
    ));
}
