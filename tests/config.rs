//! Configuration system tests
//!
//! Tests for config paths and editor config loading/saving.

use gridedit::config::EditorConfig;
use gridedit::config_paths;
use gridedit::csv::{Delimiter, HeaderOnlySource, LineEnding};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("gridedit"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.delimiter, Delimiter::Comma);
    assert_eq!(config.blank_columns, 3);
    assert_eq!(config.export_file_name, "edited_data.csv");
}

#[test]
fn test_config_serialize_deserialize() {
    let config = EditorConfig {
        delimiter: Delimiter::Tab,
        detect_delimiter: true,
        line_ending: LineEnding::CrLf,
        header_only_source: HeaderOnlySource::Reject,
        blank_columns: 5,
        export_file_name: "out.tsv".to_string(),
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: EditorConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_save_to_and_load_from() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = EditorConfig {
        delimiter: Delimiter::Pipe,
        ..EditorConfig::default()
    };

    config.save_to(&path).unwrap();

    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_load_from_invalid_yaml_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "delimiter: [not, a, delimiter]\n").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}
