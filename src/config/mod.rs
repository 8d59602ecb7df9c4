// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use odyssey_showcase::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::{DEFAULT_NAV_HIDE_SECS, MAX_NAV_HIDE_SECS, MIN_NAV_HIDE_SECS};

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "OdysseyShowcase";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Seconds of idle time before the deck navigation chrome hides.
    #[serde(default)]
    pub nav_hide_secs: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::default(),
            nav_hide_secs: Some(DEFAULT_NAV_HIDE_SECS),
        }
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
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
            nav_hide_secs: Some(5),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.theme_mode, config.theme_mode);
        assert_eq!(loaded.nav_hide_secs, config.nav_hide_secs);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
            nav_hide_secs: Some(DEFAULT_NAV_HIDE_SECS),
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_sets_nav_hide_delay() {
        let config = Config::default();
        assert_eq!(config.nav_hide_secs, Some(DEFAULT_NAV_HIDE_SECS));
        assert_eq!(config.theme_mode, ThemeMode::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("language = \"en-US\"").expect("parse failed");
        assert_eq!(config.language, Some("en-US".to_string()));
        assert_eq!(config.theme_mode, ThemeMode::default());
        assert_eq!(config.nav_hide_secs, None);
    }
}
