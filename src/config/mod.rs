// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[stories]` - Item display duration and video length handling
//! - `[gestures]` - Hold delay, swipe threshold and tap zones
//! - `[diagnostics]` - Transition history size
//!
//! Missing sections and fields take their defaults. Out-of-range values are
//! clamped when converted to [`ViewerSettings`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `TALKA_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use talka_stories::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::viewer::{GestureSettings, ViewerSettings, DEFAULT_DRAG_SLOP_PX};
use crate::domain::diagnostics::HistoryCapacity;
use crate::domain::story::{DisplayDuration, HoldDelay, SwipeThreshold, TapZoneSplit};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

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

/// Story playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoriesConfig {
    /// Display time of items without their own duration (milliseconds).
    #[serde(
        default = "default_image_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_duration_ms: Option<u64>,

    /// Play videos for their natural length when known.
    #[serde(
        default = "default_use_video_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub use_video_length: Option<bool>,
}

impl Default for StoriesConfig {
    fn default() -> Self {
        Self {
            image_duration_ms: default_image_duration_ms(),
            use_video_length: default_use_video_length(),
        }
    }
}

/// Pointer gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GesturesConfig {
    /// Press duration before a still press pauses (milliseconds).
    #[serde(
        default = "default_hold_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hold_delay_ms: Option<u64>,

    /// Horizontal drag distance that counts as a swipe (logical pixels).
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Width share of the "back" tap zone, in percent.
    #[serde(
        default = "default_tap_back_zone_percent",
        skip_serializing_if = "Option::is_none"
    )]
    pub tap_back_zone_percent: Option<f32>,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        Self {
            hold_delay_ms: default_hold_delay_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            tap_back_zone_percent: default_tap_back_zone_percent(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of viewer transitions kept for export.
    #[serde(
        default = "default_history_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub history_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub stories: StoriesConfig,

    #[serde(default)]
    pub gestures: GesturesConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Builds the viewer settings, clamping every value into range.
    #[must_use]
    pub fn viewer_settings(&self) -> ViewerSettings {
        ViewerSettings {
            image_duration: DisplayDuration::from_millis(
                self.stories
                    .image_duration_ms
                    .unwrap_or(DEFAULT_IMAGE_DURATION_MS),
            ),
            use_video_length: self.stories.use_video_length.unwrap_or(true),
            gestures: GestureSettings {
                hold_delay: HoldDelay::from_millis(
                    self.gestures.hold_delay_ms.unwrap_or(DEFAULT_HOLD_DELAY_MS),
                ),
                swipe_threshold: SwipeThreshold::new(
                    self.gestures
                        .swipe_threshold_px
                        .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX),
                ),
                tap_split: TapZoneSplit::from_percent(
                    self.gestures
                        .tap_back_zone_percent
                        .unwrap_or(DEFAULT_TAP_BACK_ZONE_PERCENT),
                ),
                drag_slop: DEFAULT_DRAG_SLOP_PX,
            },
            history_capacity: HistoryCapacity::new(
                self.diagnostics
                    .history_capacity
                    .unwrap_or(DEFAULT_HISTORY_CAPACITY),
            ),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_image_duration_ms() -> Option<u64> {
    Some(DEFAULT_IMAGE_DURATION_MS)
}

fn default_use_video_length() -> Option<bool> {
    Some(true)
}

fn default_hold_delay_ms() -> Option<u64> {
    Some(DEFAULT_HOLD_DELAY_MS)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_tap_back_zone_percent() -> Option<f32> {
    Some(DEFAULT_TAP_BACK_ZONE_PERCENT)
}

fn default_history_capacity() -> Option<usize> {
    Some(DEFAULT_HISTORY_CAPACITY)
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
/// the default config with the i18n key of a warning to show.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
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
