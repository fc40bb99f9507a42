//! Integration tests for the taskboard-config crate.

use std::fs;
use std::path::PathBuf;

use taskboard_config::persistence::find_config_file_in;
use taskboard_config::{Config, ConfigError, LoggingConfig, StorageConfig};
use tempfile::TempDir;

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for taskboard
            storage: {
                path: "/srv/boards/storage.json",
            },
            logging: {
                level: "trace",
                file: "/tmp/taskboard.log",
            },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(
        config.storage.path,
        Some(PathBuf::from("/srv/boards/storage.json"))
    );
    assert!(!config.storage.in_memory);
    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/taskboard.log")));
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("config.json");

    let original = Config {
        storage: StorageConfig::in_memory(),
        logging: LoggingConfig {
            level: "error".to_string(),
            file: None,
        },
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
}

#[test]
fn config_load_nonexistent_file_fails() {
    let result = Config::load_from("/nonexistent/path/taskboard.json5");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn config_load_malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json5");
    fs::write(&config_path, "{ storage: [ }").unwrap();

    let result = Config::load_from(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseJson5 { .. })));
}

#[test]
fn config_empty_storage_path_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json");
    fs::write(&config_path, r#"{"storage": {"path": ""}}"#).unwrap();

    let result = Config::load_from(&config_path);
    assert!(matches!(result, Err(ConfigError::EmptyStoragePath)));
}

#[test]
fn local_config_takes_precedence_over_user_config() {
    let local = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    let user_dir = user.path().join("taskboard");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("config.json5"), "{}").unwrap();
    fs::write(local.path().join("taskboard.json"), "{}").unwrap();

    let found = find_config_file_in(local.path(), Some(user.path())).unwrap();
    assert_eq!(found, local.path().join("taskboard.json"));
}

#[test]
fn env_overrides_loaded_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("taskboard.json");
    fs::write(
        &config_path,
        r#"{"storage": {"path": "file.json"}, "logging": {"level": "warn"}}"#,
    )
    .unwrap();

    let mut config = Config::load_from(&config_path).unwrap();
    config.apply_env_from(|key| match key {
        "TASKBOARD_LOG_LEVEL" => Some("debug".to_string()),
        _ => None,
    });

    assert_eq!(config.storage.path, Some(PathBuf::from("file.json")));
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}
