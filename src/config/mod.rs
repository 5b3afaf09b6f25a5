// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[carousel]` - Auto-advance interval, swipe threshold, auto-play on open
//! - `[content]` - External catalog file and media root directory
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FOLIO_REEL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio_reel::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow the carousel down
//! config.carousel.auto_advance_ms = Some(6000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::carousel::{AutoAdvanceInterval, CarouselSettings, SwipeThreshold};
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
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Carousel behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Delay between automatic slide changes, in milliseconds.
    #[serde(
        default = "default_auto_advance_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance_ms: Option<u64>,

    /// Horizontal travel for a touch to count as a swipe, in logical pixels.
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Start auto-play when a gallery opens.
    #[serde(
        default = "default_autoplay_on_open",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_on_open: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            autoplay_on_open: default_autoplay_on_open(),
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn interval(&self) -> AutoAdvanceInterval {
        self.auto_advance_ms
            .map(AutoAdvanceInterval::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn settings(&self) -> CarouselSettings {
        CarouselSettings {
            autoplay_on_open: self.autoplay_on_open.unwrap_or(DEFAULT_AUTOPLAY_ON_OPEN),
            swipe_threshold: self
                .swipe_threshold_px
                .map(SwipeThreshold::new)
                .unwrap_or_default(),
        }
    }
}

/// Where portfolio content comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentConfig {
    /// TOML catalog replacing the builtin one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Directory that catalog media paths (e.g. `/media/...`) are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_root: Option<PathBuf>,
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
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_advance_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_ADVANCE_MS)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_autoplay_on_open() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY_ON_OPEN)
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
/// default config with a warning message key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "using default settings");
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
