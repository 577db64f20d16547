//! Configuration management
//!
//! Handles application settings and preferences including:
//! - Page setup for tiled printing (paper, orientation, margins)
//! - Export settings (curve resolution, blank pages)
//! - Measurement display (metric or imperial, precision)
//! - Recent pattern files

use patternkit_core::{format_length, px_to_cm, MeasurementSystem, PageSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "patternkit";

/// Config file name inside [`APP_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Samples per cubic edge when flattening outlines for print
    pub curve_resolution: usize,
    /// Print tiles that contain no figure, keeping the assembly grid complete
    pub include_blank_pages: bool,
    /// Number of recent files to track
    pub recent_files_count: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            curve_resolution: 32,
            include_blank_pages: false,
            recent_files_count: 10,
        }
    }
}

/// Measurement display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub measurement_system: MeasurementSystem,
    /// Decimal places shown for lengths
    pub decimals: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::Metric,
            decimals: 1,
        }
    }
}

impl DisplaySettings {
    /// Formats a pixel length in the configured unit system.
    pub fn format_px(&self, px: f64) -> String {
        format_length(px_to_cm(px), self.measurement_system, self.decimals)
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recent files list, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Page setup
    pub page: PageSettings,
    /// Export settings
    pub export: ExportSettings,
    /// Measurement display
    pub display: DisplaySettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let (width, height) = self.page.paper.dimensions_cm();
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "page.paper".to_string(),
                value: self.page.paper.to_string(),
            });
        }

        if !(self.page.margin_cm >= 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "page.margin_cm".to_string(),
                value: self.page.margin_cm.to_string(),
            });
        }

        // Margins must leave something to print on.
        self.page.safe_size_cm()?;

        if self.export.curve_resolution == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "export.curve_resolution".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }

    /// Page setup handed to the tiler, with the export blank-page choice applied
    pub fn page_settings(&self) -> PageSettings {
        self.page.with_blank_pages(self.export.include_blank_pages)
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_files.retain(|f| f != &path);

        // Add to front
        self.recent_files.insert(0, path);

        // Trim to max size
        self.recent_files.truncate(self.export.recent_files_count);
    }

    /// Merge another config into this one
    ///
    /// Sections of `other` that are still at their defaults are ignored, so a
    /// partial project-level config only overrides what it sets.
    pub fn merge(&mut self, other: &Config) {
        if other.page != PageSettings::default() {
            self.page = other.page;
        }
        if other.export != ExportSettings::default() {
            self.export = other.export.clone();
        }
        if other.display != DisplaySettings::default() {
            self.display = other.display.clone();
        }
        for path in other.recent_files.iter().rev() {
            self.add_recent_file(path.clone());
        }
    }
}

/// Default location of the user config file, `None` where the platform has
/// no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
