//! # PatternKit
//!
//! A sewing-pattern drafting kernel: editable vector pattern pieces,
//! mirrored pieces that follow their originals, live measurements, and tiled
//! real-scale printing across ordinary paper sheets.
//!
//! ## Architecture
//!
//! PatternKit is organized as a workspace with multiple crates:
//!
//! 1. **patternkit-core** - Error taxonomy, px/cm units, paper sizes and page setup
//! 2. **patternkit-designer** - Figure model, length solver, mirrors, measures, tiling
//! 3. **patternkit-settings** - Persisted configuration
//! 4. **patternkit** - This crate: re-exports, logging and the command-line driver

pub mod app;

pub use patternkit_core as core;
pub use patternkit_designer as designer;
pub use patternkit_settings as settings;

pub use patternkit_core::{
    cm_to_px, format_length, px_to_cm, ConfigError, Error, MeasurementSystem, ModelError,
    Orientation, PageSettings, PaperSize, Result, TilingError, PX_PER_CM,
};

pub use patternkit_designer::{
    commit, plan_tiles, set_edge_target_length, Figure, LengthAnchor, PageContent, PatternFile,
    TilePages, TilePlan,
};

pub use patternkit_settings::{default_config_path, Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to command results
/// - RUST_LOG environment variable support (defaults to `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
