//! Tests for theme parsing and the TOML settings store.

use roshambo::{Preferences, SettingsStore, Theme, TomlSettingsStore};

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = TomlSettingsStore::new(dir.path().join("settings.toml"));

    let prefs = store.load().unwrap();
    assert_eq!(*prefs.theme(), Theme::Dark);
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let mut store = TomlSettingsStore::new(&path);

    store.save(&Preferences::new(Theme::Light)).unwrap();
    assert!(path.exists());

    let prefs = store.load().unwrap();
    assert_eq!(*prefs.theme(), Theme::Light);
}

#[test]
fn test_saved_file_is_readable_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let mut store = TomlSettingsStore::new(&path);

    store.save(&Preferences::new(Theme::Light)).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("theme"));
    assert!(content.contains("light"));
}

#[test]
fn test_malformed_settings_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "theme = \"neon\"").unwrap();

    let store = TomlSettingsStore::new(&path);
    let err = store.load().unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn test_empty_settings_file_uses_default_theme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "").unwrap();

    let store = TomlSettingsStore::new(&path);
    let prefs = store.load().unwrap();
    assert_eq!(*prefs.theme(), Theme::Dark);
}

#[test]
fn test_theme_parses_and_rejects() {
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);

    let err = "neon".parse::<Theme>().unwrap_err();
    assert_eq!(err.value, "neon");
}

#[test]
fn test_theme_toggle_round_trip() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(theme.toggle().toggle(), theme);
        assert_ne!(theme.toggle(), theme);
    }
}
