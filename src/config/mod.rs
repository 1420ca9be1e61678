// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[dismiss]` - Auto-dismiss toggle and timeout
//! - `[transition]` - Enter/exit transition duration
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass an override directory to `load_with_override()`
//! 3. Set `ICED_TOASTS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.dismiss.timeout_ms = Some(8000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::newtypes::{DismissTimeout, TransitionDuration};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedToasts";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOASTS_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Auto-dismiss settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DismissConfig {
    /// Whether notifications dismiss themselves after `timeout_ms`.
    #[serde(default = "default_auto_dismiss", skip_serializing_if = "Option::is_none")]
    pub auto_dismiss: Option<bool>,

    /// Time a notification stays up before dismissing itself (milliseconds).
    #[serde(default = "default_timeout_ms", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self {
            auto_dismiss: default_auto_dismiss(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Enter/exit transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionConfig {
    /// Duration of each enter and exit phase (milliseconds).
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Notification configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub dismiss: DismissConfig,

    #[serde(default)]
    pub transition: TransitionConfig,
}

impl Config {
    /// Returns the auto-dismiss flag, falling back to the default.
    #[must_use]
    pub fn auto_dismiss(&self) -> bool {
        self.dismiss.auto_dismiss.unwrap_or(DEFAULT_AUTO_DISMISS)
    }

    /// Returns the clamped auto-dismiss timeout.
    #[must_use]
    pub fn dismiss_timeout(&self) -> DismissTimeout {
        self.dismiss
            .timeout_ms
            .map(DismissTimeout::new)
            .unwrap_or_default()
    }

    /// Returns the clamped transition duration.
    #[must_use]
    pub fn transition_duration(&self) -> TransitionDuration {
        self.transition
            .duration_ms
            .map(TransitionDuration::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_dismiss() -> Option<bool> {
    Some(DEFAULT_AUTO_DISMISS)
}

fn default_timeout_ms() -> Option<u64> {
    Some(DEFAULT_DISMISS_TIMEOUT_MS)
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory.
///
/// # Resolution Order
///
/// 1. `override_dir` parameter (if `Some`)
/// 2. `ICED_TOASTS_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory with the app name appended
pub fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_dir {
        return Some(path);
    }

    if let Some(path) = std::env::var_os(ENV_CONFIG_DIR).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
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
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            dismiss: DismissConfig {
                auto_dismiss: Some(false),
                timeout_ms: Some(8000),
            },
            transition: TransitionConfig {
                duration_ms: Some(350),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let err = load_from_path(&config_path).expect_err("invalid toml should error");
        assert!(matches!(err, crate::error::Error::Config(_)));
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[dismiss\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_returns_default_when_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config: Config = toml::from_str("[dismiss]\nauto_dismiss = false\n").expect("parse");

        assert!(!config.auto_dismiss());
        assert_eq!(config.dismiss.timeout_ms, Some(DEFAULT_DISMISS_TIMEOUT_MS));
        assert_eq!(config.transition.duration_ms, Some(DEFAULT_TRANSITION_MS));
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = Config {
            dismiss: DismissConfig {
                auto_dismiss: None,
                timeout_ms: Some(1),
            },
            transition: TransitionConfig {
                duration_ms: Some(999_999),
            },
        };

        assert!(config.auto_dismiss());
        assert_eq!(
            config.dismiss_timeout().as_duration(),
            Duration::from_millis(MIN_DISMISS_TIMEOUT_MS)
        );
        assert_eq!(
            config.transition_duration().as_duration(),
            Duration::from_millis(MAX_TRANSITION_MS)
        );
    }

    #[test]
    fn save_with_override_creates_file_in_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(dir.clone())).expect("save");
        assert!(dir.join(CONFIG_FILE).exists());
    }
}
