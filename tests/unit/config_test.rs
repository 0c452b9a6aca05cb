//! Tests for global configuration management

use std::fs;

use brdoc::config::{GenerateConfig, GlobalConfig};
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = GlobalConfig::default();
    assert!(!config.generate.masked);
    assert_eq!(config.generate.count, 1);
}

#[test]
fn test_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&temp.path().join("absent.toml"));
    assert_eq!(config, GlobalConfig::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[generate\nmasked = yes").unwrap();
    assert_eq!(GlobalConfig::load_from(&path), GlobalConfig::default());
}

#[test]
fn test_partial_section_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[generate]\nmasked = true\n").unwrap();

    let config = GlobalConfig::load_from(&path);
    assert!(config.generate.masked);
    assert_eq!(config.generate.count, 1);
}

// =============================================================================
// PERSISTENCE
// =============================================================================

#[test]
fn test_save_and_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let config = GlobalConfig {
        generate: GenerateConfig {
            masked: true,
            count: 5,
        },
    };
    config.save_to(&path).unwrap();
    assert!(path.exists());

    let loaded = GlobalConfig::load_from(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_saved_file_is_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    GlobalConfig::default().save_to(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[generate]"));
    assert!(content.contains("count = 1"));
}
