use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::HiyoriError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub anilist: AniListConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AniListConfig {
    /// AniList username whose list the calendar shows. Public lists need no
    /// token; private entries do.
    pub user_name: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Append "2h 30m left" style countdowns to calendar lines.
    pub time_until_labels: bool,
}

impl AppConfig {
    /// Load config: user file if present, built-in defaults otherwise.
    pub fn load() -> Result<Self, HiyoriError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            let user_str = std::fs::read_to_string(&user_path)
                .map_err(|e| HiyoriError::Config(e.to_string()))?;
            toml::from_str(&user_str).map_err(|e| HiyoriError::Config(e.to_string()))
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| HiyoriError::Config(e.to_string()))
        }
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), HiyoriError> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| HiyoriError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "hiyori")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert!(config.anilist.user_name.is_none());
        assert!(config.anilist.access_token.is_none());
        assert!(config.display.time_until_labels);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.anilist.user_name = Some("umaru".into());
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.anilist.user_name.as_deref(), Some("umaru"));
        assert_eq!(
            deserialized.display.time_until_labels,
            config.display.time_until_labels
        );
    }
}
