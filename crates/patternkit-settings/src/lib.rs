//! PatternKit Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, DisplaySettings, ExportSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
