use ovalkit_settings::{ControlConfig, SettingsError};
use tempfile::TempDir;

#[test]
fn test_json_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("control.json");

    let config = ControlConfig {
        center_dot_size: 24.0,
        ..ControlConfig::default().with_min_touch_dist(56.0)
    };
    config.save_to_file(&path).unwrap();

    let loaded = ControlConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_toml_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("control.toml");

    let config = ControlConfig {
        default_radius_x: 120.0,
        default_radius_y: 90.0,
        ..ControlConfig::default()
    };
    config.save_to_file(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("default_radius_x = 120.0"));

    let loaded = ControlConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_save_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("control.json");

    let config = ControlConfig::default().with_min_touch_dist(-1.0);
    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let result = ControlConfig::load_from_file(&path);
    assert!(matches!(
        result,
        Err(SettingsError::IoError(ref e)) if e.kind() == std::io::ErrorKind::NotFound
    ));
}

#[test]
fn test_load_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("control.ini");
    std::fs::write(&path, "min_touch_dist=3").unwrap();

    let result = ControlConfig::load_from_file(&path);
    assert!(matches!(result, Err(SettingsError::UnsupportedFormat(_))));
}

#[test]
fn test_load_without_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("control");
    std::fs::write(&path, "min_touch_dist = 3.0").unwrap();

    let err = ControlConfig::load_from_file(&path).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported config format: <none>");
}

#[test]
fn test_save_into_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("control.json");

    let result = ControlConfig::default().save_to_file(&path);
    assert!(matches!(result, Err(SettingsError::IoError(_))));
}

#[test]
fn test_load_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("control.toml");
    std::fs::write(&path, "min_touch_dist = [").unwrap();

    let result = ControlConfig::load_from_file(&path);
    assert!(matches!(result, Err(SettingsError::TomlError(_))));
}
