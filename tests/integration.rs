// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config, DEFAULT_API_BASE_URL};
use iced_folio::i18n::fluent::I18n;
use iced_folio::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_api_base_url_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        api_base_url: Some("https://folio.example.com/api/".to_string()),
        theme_mode: Some(ThemeMode::Dark),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.api_base_url(), "https://folio.example.com/api/");
    assert_eq!(loaded.theme_mode, Some(ThemeMode::Dark));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_default_config_points_at_local_api() {
    let config = Config::default();
    assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn test_shared_keys_exist_in_all_locales() {
    for lang in ["en-US", "fr"] {
        let config = Config {
            language: Some(lang.to_string()),
            ..Config::default()
        };
        let i18n = I18n::new(None, &config);
        for key in [
            "window-title",
            "feed-title",
            "retry",
            "detail-not-found",
            "comments-title",
        ] {
            let value = i18n.tr(key);
            assert_ne!(value, key, "missing `{key}` in locale `{lang}`");
        }
    }
}
