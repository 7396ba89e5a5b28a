// ../tests/settings.rs
use elden_scout::api::DEFAULT_API_URL;
use elden_scout::encounter::NgLevel;
use elden_scout::error::AppError;
use elden_scout::settings::Settings;
use tempfile::tempdir;

#[test]
fn test_settings_round_trip() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        api_base_url: "http://scout.local:8080".to_string(),
        default_ng_level: NgLevel::NgPlus3,
        debug_mode: true,
    };
    settings.save_to_file(&path).expect("save settings");

    let loaded = Settings::load_settings_from_file(&path).expect("load settings");
    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_fields_use_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"default_ng_level": "NG+1"}"#).expect("write settings");

    let loaded = Settings::load_settings_from_file(&path).expect("load settings");
    assert_eq!(loaded.api_base_url, DEFAULT_API_URL);
    assert_eq!(loaded.default_ng_level, NgLevel::NgPlus1);
    assert!(!loaded.debug_mode);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    assert!(Settings::load_settings_from_file(dir.path().join("absent.json")).is_err());
}

#[test]
fn test_url_override_ignores_blank_values() {
    let mut settings = Settings::new();
    settings.apply_url_override("   ");
    assert_eq!(settings.api_base_url, DEFAULT_API_URL);

    settings.apply_url_override(" http://10.0.0.2:5001 ");
    assert_eq!(settings.api_base_url, "http://10.0.0.2:5001");
}

#[test]
fn test_load_or_default_reports_why_defaults_were_used() {
    let dir = tempdir().expect("temp dir");

    let (settings, error) = Settings::load_or_default(dir.path().join("absent.json"));
    assert_eq!(settings, Settings::default());
    assert!(matches!(error, Some(AppError::IO(_))));

    let corrupt = dir.path().join("corrupt.json");
    std::fs::write(&corrupt, "{ not json").expect("write settings");
    let (settings, error) = Settings::load_or_default(&corrupt);
    assert_eq!(settings, Settings::default());
    assert!(matches!(error, Some(AppError::Serialization(_))));

    let valid = dir.path().join("settings.json");
    std::fs::write(&valid, r#"{"debug_mode": true}"#).expect("write settings");
    let (settings, error) = Settings::load_or_default(&valid);
    assert!(settings.debug_mode);
    assert!(error.is_none());
}
