mod common;

use std::path::PathBuf;

use common::temp_config;
use feline_showcase::config::{Config, ConfigError};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.timing.like_ack_ms, 3000);
    assert_eq!(config.timing.gallery_interval_ms, 5000);
    assert!(config.gallery.auto_advance);
    assert_eq!(config.gallery.images.len(), 5);
    assert_eq!(config.fact.url, "https://catfact.ninja/fact");
    assert_eq!(config.fact.text_field, "fact");
    assert_eq!(config.fact.timeout_seconds, 10);
    assert_eq!(config.scroll.domain, 300.0);
    assert_eq!(config.scroll.parallax_max, 150.0);
    assert!(config.names.honorifics.is_none());
    assert!(config.preferences.path.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("feline-showcase/config.toml"));
}

#[test]
fn test_preferences_path_default_and_override() {
    let mut config = Config::default();
    assert!(config
        .preferences_path()
        .ends_with("feline-showcase/preferences.toml"));

    config.preferences.path = Some(PathBuf::from("/tmp/prefs.toml"));
    assert_eq!(config.preferences_path(), PathBuf::from("/tmp/prefs.toml"));
}

#[test]
fn test_empty_file_yields_defaults() {
    let (_dir, path) = temp_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timing.like_ack_ms, 3000);
    assert_eq!(config.gallery.images, Config::default().gallery.images);
}

#[test]
fn test_partial_file_overrides_only_given_fields() {
    let (_dir, path) = temp_config(
        r#"
[timing]
like_ack_ms = 1500

[gallery]
images = ["a.jpg", "b.jpg"]
auto_advance = false

[fact]
url = "http://localhost:8080/fact"

[names]
honorifics = ["Dame"]
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timing.like_ack_ms, 1500);
    assert_eq!(config.timing.gallery_interval_ms, 5000);
    assert_eq!(config.gallery.images, vec!["a.jpg", "b.jpg"]);
    assert!(!config.gallery.auto_advance);
    assert_eq!(config.fact.url, "http://localhost:8080/fact");
    assert_eq!(config.fact.text_field, "fact");
    assert_eq!(config.names.honorifics, Some(vec!["Dame".to_string()]));
    assert!(config.names.names.is_none());
}

#[test]
fn test_validation_fails_empty_gallery() {
    let (_dir, path) = temp_config("[gallery]\nimages = []\n");
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("gallery image"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_fails_zero_durations() {
    let mut config = Config::default();
    config.timing.like_ack_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut config = Config::default();
    config.timing.gallery_interval_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_fails_zero_fetch_timeouts() {
    let (_dir, path) = temp_config("[fact]\ntimeout_seconds = 0\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("fact.timeout_seconds"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }

    let mut config = Config::default();
    config.fact.connect_timeout_seconds = 0;
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("fact.connect_timeout_seconds"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_fails_bad_scroll_domain() {
    let mut config = Config::default();
    config.scroll.domain = 0.0;
    assert!(config.validate().is_err());

    config.scroll.domain = f32::NAN;
    assert!(config.validate().is_err());

    config.scroll.domain = f32::INFINITY;
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_fails_bad_parallax_range() {
    let mut config = Config::default();
    config.scroll.parallax_max = f32::INFINITY;
    assert!(config.validate().is_err());

    config.scroll.parallax_max = -1.0;
    assert!(config.validate().is_err());

    config.scroll.parallax_max = 0.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_logging_section_parses_and_validates() {
    let (_dir, path) = temp_config(
        r#"
[logging]
level = "feline_showcase=debug,warn"
file = "/tmp/showcase.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.logging.level, "feline_showcase=debug,warn");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/showcase.log")));

    let mut config = Config::default();
    config.logging.level = "feline_showcase=loudest".to_string();
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("logging.level"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_fails_empty_name_pool() {
    let mut config = Config::default();
    config.names.suffixes = Some(Vec::new());
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert_eq!(message, "names.suffixes must not be empty");
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_parse_error_reports_path() {
    let (_dir, path) = temp_config("[timing\nlike_ack_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_missing_file_is_read_error() {
    let err = Config::load_from(&PathBuf::from("/nonexistent/feline/config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}
