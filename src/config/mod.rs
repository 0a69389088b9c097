// SPDX-License-Identifier: MPL-2.0
//! Application configuration, loaded from and saved to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Point the client at a different backend
//! config.api_base_url = Some("https://folio.example/api/".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFolio";

/// Default backend the client talks to when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/";

/// Default base used to build the shareable link shown in the share popover.
/// Displayed verbatim to the user, with `shot/<id>` appended.
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:3000/";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub share_base_url: Option<String>,
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            api_base_url: Some(DEFAULT_API_BASE_URL.to_string()),
            share_base_url: Some(DEFAULT_SHARE_BASE_URL.to_string()),
            theme_mode: Some(ThemeMode::System),
        }
    }
}

impl Config {
    /// Base URL of the backend API, falling back to the default.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Base URL used for shareable links, falling back to the default.
    pub fn share_base_url(&self) -> &str {
        self.share_base_url
            .as_deref()
            .unwrap_or(DEFAULT_SHARE_BASE_URL)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trips_through_toml_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");

        let config = Config {
            language: Some("fr".to_string()),
            api_base_url: Some("https://folio.example/api/".to_string()),
            share_base_url: Some("https://folio.example/".to_string()),
            theme_mode: Some(ThemeMode::Dark),
        };
        save_to_path(&config, &path).expect("save");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.language, Some("fr".to_string()));
        assert_eq!(loaded.api_base_url(), "https://folio.example/api/");
        assert_eq!(loaded.share_base_url(), "https://folio.example/");
        assert_eq!(loaded.theme_mode, Some(ThemeMode::Dark));
    }

    #[test]
    fn unreadable_content_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "not [valid toml").expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn defaults_cover_missing_urls() {
        let config = Config {
            language: None,
            api_base_url: None,
            share_base_url: None,
            theme_mode: None,
        };
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.share_base_url(), DEFAULT_SHARE_BASE_URL);
    }
}
