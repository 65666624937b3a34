use std::fs;

use huepick_settings::settings::{ColorFormat, PickerSettings};
use huepick_settings::store::{JsonSettingsStore, SettingsError, SettingsStore};
use tempfile::TempDir;

const MODULE: &str = "picker";

fn store() -> (TempDir, JsonSettingsStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonSettingsStore::new(dir.path());
    (dir, store)
}

#[test]
fn test_exists_is_false_for_missing_record() {
    let (_dir, store) = store();
    assert!(!store.exists(MODULE));
}

#[test]
fn test_create_default_then_load_yields_documented_defaults() {
    let (_dir, store) = store();
    store.create_default(MODULE).unwrap();

    assert!(store.exists(MODULE));
    let settings = store.load(MODULE).unwrap();
    assert_eq!(settings, PickerSettings::default());
    assert_eq!(settings.activation_shortcut, "Ctrl + Break");
    assert!(settings.change_cursor);
    assert_eq!(settings.color_history_limit, 20);
    assert_eq!(
        settings.visible_color_formats.as_deref().unwrap(),
        ["HEX", "RGB", "HSL"]
    );
}

#[test]
fn test_save_then_load_roundtrips() {
    let (_dir, store) = store();
    let settings = PickerSettings {
        activation_shortcut: "Alt + P".to_string(),
        change_cursor: false,
        copied_color_representation: ColorFormat::Rgb,
        use_editor: false,
        color_history_limit: 5,
        color_history: Some(vec!["#112233".to_string(), "#445566".to_string()]),
        visible_color_formats: Some(vec!["HEX".to_string()]),
    };

    store.save(MODULE, &settings).unwrap();
    assert_eq!(store.load(MODULE).unwrap(), settings);
}

#[test]
fn test_save_creates_the_module_directory() {
    let (dir, store) = store();
    store.save(MODULE, &PickerSettings::default()).unwrap();
    assert!(dir.path().join(MODULE).join("settings.json").is_file());
}

#[test]
fn test_load_missing_record_is_an_io_error() {
    let (_dir, store) = store();
    let err = store.load(MODULE).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}

#[test]
fn test_load_malformed_json_is_a_deserialize_error() {
    let (_dir, store) = store();
    let path = store.settings_path(MODULE);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ this is not json").unwrap();

    let err = store.load(MODULE).unwrap_err();
    assert!(matches!(err, SettingsError::Deserialize(_)));
}

#[test]
fn test_save_overwrites_the_whole_record() {
    let (_dir, store) = store();
    let mut settings = PickerSettings::default();
    settings.color_history = Some(vec!["#010203".to_string()]);
    store.save(MODULE, &settings).unwrap();

    settings.color_history = Some(Vec::new());
    store.save(MODULE, &settings).unwrap();

    let loaded = store.load(MODULE).unwrap();
    assert_eq!(loaded.color_history, Some(Vec::new()));
}

#[test]
fn test_modules_do_not_share_records() {
    let (_dir, store) = store();
    store.create_default("picker").unwrap();
    assert!(!store.exists("editor"));
}
