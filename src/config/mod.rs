// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast queue size, lifetimes and anchor
//! - `[adaptive]` - Novice threshold and initial context signals
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `MOTION_KIT_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use motion_kit::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::adaptive::{
    AccessibilityNeeds, AnimationStyle, Device, RuleSet, UserContext,
};
use crate::error::{Error, Result};
use crate::ui::notifications::{Durations, Position, Settings as ToastSettings};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Maximum toasts on screen; the oldest is evicted beyond this.
    #[serde(default = "default_max_toasts", skip_serializing_if = "Option::is_none")]
    pub max_toasts: Option<usize>,

    /// Lifetime of success, warning and info toasts in milliseconds.
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Lifetime of error toasts in milliseconds (0 = until dismissed).
    #[serde(
        default = "default_error_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_duration_ms: Option<u64>,

    /// Screen anchor for the toast stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_toasts: default_max_toasts(),
            default_duration_ms: default_toast_duration_ms(),
            error_duration_ms: default_error_duration_ms(),
            position: Some(Position::default()),
        }
    }
}

impl NotificationsConfig {
    /// Resolves this section into manager settings, filling gaps with defaults.
    #[must_use]
    pub fn settings(&self) -> ToastSettings {
        ToastSettings {
            max_toasts: self
                .max_toasts
                .unwrap_or(DEFAULT_MAX_TOASTS)
                .clamp(MIN_TOASTS_LIMIT, MAX_TOASTS_LIMIT),
            position: self.position.unwrap_or_default(),
            durations: Durations {
                standard: Duration::from_millis(
                    self.default_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
                ),
                error: Duration::from_millis(
                    self.error_duration_ms.unwrap_or(DEFAULT_ERROR_DURATION_MS),
                ),
            },
        }
    }
}

/// Adaptive props settings and initial context signals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdaptiveConfig {
    /// Interactions before a component stops showing hints.
    #[serde(
        default = "default_novice_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub novice_threshold: Option<u32>,

    /// Device class to assume on startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,

    /// Preferred animation flavor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_animation_style: Option<AnimationStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_fonts: Option<bool>,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            novice_threshold: default_novice_threshold(),
            device: None,
            preferred_animation_style: None,
            reduced_motion: None,
            large_fonts: None,
        }
    }
}

impl AdaptiveConfig {
    /// Context snapshot seeded from this section.
    #[must_use]
    pub fn initial_context(&self) -> UserContext {
        UserContext {
            device: self.device,
            preferred_animation_style: self.preferred_animation_style,
            accessibility: AccessibilityNeeds {
                reduced_motion: self.reduced_motion.unwrap_or(false),
                large_fonts: self.large_fonts.unwrap_or(false),
                ..AccessibilityNeeds::default()
            },
            ..UserContext::default()
        }
    }

    #[must_use]
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::standard(self.novice_threshold.unwrap_or(DEFAULT_NOVICE_THRESHOLD))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Toast notification settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Adaptive props settings.
    #[serde(default)]
    pub adaptive: AdaptiveConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_max_toasts() -> Option<usize> {
    Some(DEFAULT_MAX_TOASTS)
}

fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_error_duration_ms() -> Option<u64> {
    Some(DEFAULT_ERROR_DURATION_MS)
}

fn default_novice_threshold() -> Option<u32> {
    Some(DEFAULT_NOVICE_THRESHOLD)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
    let config: Config = toml::from_str(&content)?;
    Ok(config)
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
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                max_toasts: Some(3),
                default_duration_ms: Some(2500),
                error_duration_ms: Some(0),
                position: Some(Position::BottomLeft),
            },
            adaptive: AdaptiveConfig {
                novice_threshold: Some(5),
                device: Some(Device::Tablet),
                preferred_animation_style: Some(AnimationStyle::Playful),
                reduced_motion: Some(true),
                large_fonts: None,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_position_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[notifications]\nposition = \"middle\"\n")
            .expect("failed to write config");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn broken_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[notifications]\nmax_toasts = 2\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.notifications.max_toasts, Some(2));
        assert_eq!(
            loaded.notifications.default_duration_ms,
            Some(DEFAULT_TOAST_DURATION_MS)
        );
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(
            loaded.adaptive.novice_threshold,
            Some(DEFAULT_NOVICE_THRESHOLD)
        );
    }

    #[test]
    fn default_config_has_expected_values() {
        let settings = Config::default().notifications.settings();
        assert_eq!(settings.max_toasts, 5);
        assert_eq!(settings.position, Position::TopRight);
        assert_eq!(settings.durations.standard, Duration::from_millis(5000));
        assert_eq!(settings.durations.error, Duration::ZERO);
    }

    #[test]
    fn notification_settings_clamp_max_toasts() {
        let section = NotificationsConfig {
            max_toasts: Some(0),
            ..NotificationsConfig::default()
        };
        assert_eq!(section.settings().max_toasts, MIN_TOASTS_LIMIT);
    }

    #[test]
    fn adaptive_section_seeds_context() {
        let section = AdaptiveConfig {
            device: Some(Device::Mobile),
            large_fonts: Some(true),
            novice_threshold: Some(7),
            ..AdaptiveConfig::default()
        };

        let ctx = section.initial_context();
        assert_eq!(ctx.device, Some(Device::Mobile));
        assert!(ctx.accessibility.large_fonts);
        assert!(!ctx.accessibility.reduced_motion);
        assert_eq!(section.rule_set().novice_threshold(), 7);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
