// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[snackbar]` - Placement metrics (horizontal margin, estimated height)
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `ICED_SNACKBAR_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::app::config;
//!
//! // Load configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let metrics = config.snackbar.metrics();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::snackbar::PlacementMetrics;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key shown when the config file exists but cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-CN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
        }
    }
}

/// Snackbar placement settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnackbarConfig {
    /// Left/right margin of placed snackbars.
    #[serde(
        default = "default_horizontal_margin",
        skip_serializing_if = "Option::is_none"
    )]
    pub horizontal_margin: Option<i32>,

    /// Assumed snackbar height when placing above an anchor. This is an
    /// approximation of a single-line snackbar, not a measurement.
    #[serde(
        default = "default_estimated_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_height: Option<i32>,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            horizontal_margin: default_horizontal_margin(),
            estimated_height: default_estimated_height(),
        }
    }
}

impl SnackbarConfig {
    /// Placement metrics with out-of-range values clamped.
    #[must_use]
    pub fn metrics(&self) -> PlacementMetrics {
        PlacementMetrics {
            horizontal_margin: self
                .horizontal_margin
                .unwrap_or(DEFAULT_HORIZONTAL_MARGIN)
                .clamp(MIN_HORIZONTAL_MARGIN, MAX_HORIZONTAL_MARGIN),
            estimated_height: self
                .estimated_height
                .unwrap_or(DEFAULT_ESTIMATED_HEIGHT)
                .clamp(MIN_ESTIMATED_HEIGHT, MAX_ESTIMATED_HEIGHT),
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
    pub snackbar: SnackbarConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_horizontal_margin() -> Option<i32> {
    Some(DEFAULT_HORIZONTAL_MARGIN)
}

fn default_estimated_height() -> Option<i32> {
    Some(DEFAULT_ESTIMATED_HEIGHT)
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

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
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config, using defaults");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
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
// Tests
// =============================================================================
