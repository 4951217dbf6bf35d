//! Configuration manager for loading and saving application configuration
//!
//! This module provides functionality to load and save configuration to
//! `<data dir>/config.json` with atomic writes to prevent corruption.

use crate::config::models::{AppConfig, WindowState};
use crate::error::{HeartboardError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the data directory
pub const HOME_ENV_VAR: &str = "HEARTBOARD_HOME";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Directory holding the configuration file and logs
    ///
    /// `$HEARTBOARD_HOME` when set, otherwise the platform configuration
    /// directory joined with `Heartboard`.
    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV_VAR) {
            return PathBuf::from(home);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Heartboard")
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }

    /// Load configuration from `path`
    ///
    /// If the file doesn't exist, is corrupt or holds invalid screen settings,
    /// returns the default configuration.
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str::<AppConfig>(&json) {
            Ok(config) => {
                if let Err(e) = config.screen.validate() {
                    warn!("Configuration rejected, using defaults: {}", e);
                    return Ok(AppConfig::default());
                }
                info!("Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to `path` with an atomic write
    ///
    /// Uses a temporary file and rename to ensure atomic write operation.
    pub fn save_to(config: &AppConfig, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(path, &json)?;
        info!("Configuration saved successfully");
        Ok(())
    }

    /// Persist only `window_state` into the configuration at `path`
    ///
    /// Every other key in the file is kept as written. A file that is not a
    /// JSON object is left untouched so a hand-edited config is never replaced
    /// by defaults.
    pub fn save_window_state(window_state: &WindowState, path: &Path) -> Result<()> {
        if !path.exists() {
            let config = AppConfig {
                window_state: window_state.clone(),
                ..AppConfig::default()
            };
            return Self::save_to(&config, path);
        }

        let json = std::fs::read_to_string(path)?;
        let mut value = match serde_json::from_str::<serde_json::Value>(&json) {
            Ok(value) if value.is_object() => value,
            _ => {
                warn!("Configuration is not a JSON object, window state not saved");
                return Ok(());
            }
        };
        value["window_state"] = serde_json::to_value(window_state)?;

        write_atomic(path, &serde_json::to_string_pretty(&value)?)?;
        info!("Window state saved");
        Ok(())
    }
}

/// Write `contents` to a temporary file next to `path`, then rename it over `path`
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let config_dir = path
        .parent()
        .ok_or_else(|| HeartboardError::ConfigError(StringError::new("Invalid config path")))?;
    std::fs::create_dir_all(config_dir)?;

    let temp_path = config_dir.join("config.json.tmp");
    std::fs::write(&temp_path, contents)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::{DismissScope, ScreenSettings, Variant, WindowState};
    use crate::test_utils::{HomeGuard, create_test_dir};

    #[test]
    fn test_config_path_uses_home_override() {
        let temp_dir = create_test_dir();
        let _guard = HomeGuard::new(&temp_dir);

        let path = ConfigManager::get_config_path();
        assert_eq!(path, temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = create_test_dir();
        let config = ConfigManager::load_from(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.screen = ScreenSettings {
            dismiss_scope: DismissScope::Global,
            item_count: 5,
            ..ScreenSettings::for_variant(Variant::AutoDismiss)
        };
        ConfigManager::save_to(&config, &path).unwrap();

        assert!(!path.with_file_name("config.json.tmp").exists());
        let loaded = ConfigManager::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_corrupt_config_falls_back_to_defaults() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_settings_fall_back_to_defaults() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"screen":{"item_count":0}}"#).unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.screen.item_count, 7);
    }

    #[test]
    fn test_window_state_save_keeps_other_settings() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("config.json");
        let config = AppConfig {
            screen: ScreenSettings {
                item_count: 4,
                ..ScreenSettings::for_variant(Variant::AutoDismiss)
            },
            ..AppConfig::default()
        };
        ConfigManager::save_to(&config, &path).unwrap();

        let window_state = WindowState {
            width: 500,
            height: 700,
        };
        ConfigManager::save_window_state(&window_state, &path).unwrap();

        let loaded = ConfigManager::load_from(&path).unwrap();
        assert_eq!(loaded.screen, config.screen);
        assert_eq!(loaded.window_state, window_state);
    }

    #[test]
    fn test_window_state_save_leaves_corrupt_config_alone() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        ConfigManager::save_window_state(&WindowState::default(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_window_state_save_keeps_invalid_settings_for_user() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"screen":{"item_count":0,"variant":"auto-dismiss"}}"#).unwrap();

        let window_state = WindowState {
            width: 400,
            height: 600,
        };
        ConfigManager::save_window_state(&window_state, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["screen"]["item_count"], 0);
        assert_eq!(value["screen"]["variant"], "auto-dismiss");
        assert_eq!(value["window_state"]["width"], 400);
    }

    #[test]
    fn test_window_state_save_creates_missing_config() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("config.json");
        let window_state = WindowState {
            width: 320,
            height: 480,
        };

        ConfigManager::save_window_state(&window_state, &path).unwrap();
        let loaded = ConfigManager::load_from(&path).unwrap();
        assert_eq!(loaded.window_state, window_state);
        assert_eq!(loaded.screen, ScreenSettings::default());
    }
}
