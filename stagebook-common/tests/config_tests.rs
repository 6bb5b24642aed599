//! Tests for configuration file loading and resolution priority
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate XDG_CONFIG_HOME are marked with #[serial].

use serial_test::serial;
use stagebook_common::config::{load_toml_file, Config, ConfigOverrides};
use stagebook_common::Error;
use std::env;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_explicit_config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stagebook.toml");
    fs::write(
        &path,
        r#"
database_path = "/srv/stagebook/booking.db"
port = 8081

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = Config::load(ConfigOverrides {
        config_file: Some(path),
        ..Default::default()
    })
    .expect("config should load");

    assert_eq!(config.database_path, PathBuf::from("/srv/stagebook/booking.db"));
    assert_eq!(config.port, 8081);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_command_line_beats_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stagebook.toml");
    fs::write(&path, "port = 8081\nhost = \"0.0.0.0\"\n").unwrap();

    let config = Config::load(ConfigOverrides {
        config_file: Some(path),
        port: Some(9000),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(config.bind_addr(), "0.0.0.0:9000");
}

#[test]
fn test_log_file_from_config_file_and_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stagebook.toml");
    fs::write(&path, "[logging]\nlog_file = \"/var/log/stagebook/error.log\"\n").unwrap();

    let from_file = Config::load(ConfigOverrides {
        config_file: Some(path.clone()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(
        from_file.log_file,
        Some(PathBuf::from("/var/log/stagebook/error.log"))
    );

    let overridden = Config::load(ConfigOverrides {
        config_file: Some(path),
        log_file: Some(dir.path().join("error.log")),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(overridden.log_file, Some(dir.path().join("error.log")));
}

#[test]
fn test_missing_explicit_config_file_is_an_error() {
    let result = Config::load(ConfigOverrides {
        config_file: Some(PathBuf::from("/nonexistent/stagebook/config.toml")),
        ..Default::default()
    });

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "port = \"not a number\"").unwrap();

    assert!(matches!(load_toml_file(&path), Err(Error::Config(_))));
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_default_config_file_is_discovered() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("stagebook");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "port = 7070\n").unwrap();

    let previous = env::var_os("XDG_CONFIG_HOME");
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let config = Config::load(ConfigOverrides::default());

    match previous {
        Some(value) => env::set_var("XDG_CONFIG_HOME", value),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }

    assert_eq!(config.unwrap().port, 7070);
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_absent_default_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let previous = env::var_os("XDG_CONFIG_HOME");
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let config = Config::load(ConfigOverrides::default());

    match previous {
        Some(value) => env::set_var("XDG_CONFIG_HOME", value),
        None => env::remove_var("XDG_CONFIG_HOME"),
    }

    let config = config.expect("missing default file is not an error");
    assert_eq!(config.port, 5000);
}
