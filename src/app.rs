//! The command-line workflow: load a pattern document, settle it, plan its
//! print tiles and describe the result.

use anyhow::{Context, Result};
use clap::Parser;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use patternkit_core::MeasurementSystem;
use patternkit_designer::{
    commit, plan_tiles, CircleMeasure, Figure, PatternFile, TilePages, TilePlan,
};
use patternkit_settings::{default_config_path, Config, DisplaySettings};

/// Prepare a sewing pattern for tiled printing and report its measurements
#[derive(Debug, Clone, PartialEq, Parser)]
#[clap(name = "patternkit", author, version, about, long_about = None)]
pub struct Options {
    /// Pattern document (JSON)
    #[clap(value_parser)]
    pub pattern: PathBuf,
    /// Config file (.toml or .json), instead of the user config
    #[clap(long, value_parser)]
    pub config: Option<PathBuf>,
    /// Write the committed pattern to this file
    #[clap(long = "out", value_parser)]
    pub output: Option<PathBuf>,
    /// Display unit, overriding the config: cm or in
    #[clap(long, value_parser)]
    pub units: Option<MeasurementSystem>,
    /// Also list every page with the figures on it
    #[clap(long)]
    pub pages: bool,
}

/// Loads the explicit config, else the user config if present, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }
    match default_config_path().filter(|p| p.exists()) {
        Some(path) => match Config::load_from_file(&path) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!("Ignoring user config {}: {}", path.display(), err);
                Ok(Config::default())
            }
        },
        None => Ok(Config::default()),
    }
}

pub fn load_pattern(path: &Path) -> Result<PatternFile> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pattern {}", path.display()))?;
    PatternFile::from_json(&json).with_context(|| format!("In {}", path.display()))
}

pub fn save_pattern(file: &mut PatternFile, path: &Path) -> Result<()> {
    let json = file.to_json()?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// A committed pattern and its tile plan.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub figures: Vec<Figure>,
    pub plan: TilePlan,
}

/// Commits the figures and plans tiles with the pattern's own page setup,
/// falling back to the configured one.
pub fn prepare(file: &PatternFile, config: &Config) -> Result<Prepared> {
    let figures = commit(&file.figures);
    let page = file
        .page
        .map(|p| p.with_blank_pages(config.export.include_blank_pages))
        .unwrap_or_else(|| config.page_settings());
    let plan = plan_tiles(&figures, &page).context("Cannot tile pattern")?;
    info!(
        "Prepared {} figure(s) on {} page(s)",
        figures.len(),
        plan.tiles.len()
    );
    Ok(Prepared { figures, plan })
}

/// Human-readable report of a prepared pattern.
pub fn summary(name: &str, prepared: &Prepared, config: &Config, pages: bool) -> String {
    let display = &config.display;
    let mut out = String::new();
    let _ = writeln!(out, "Pattern: {name}");
    for figure in &prepared.figures {
        let _ = writeln!(out, "  {}", describe_figure(figure, display));
    }
    let plan = &prepared.plan;
    let _ = writeln!(
        out,
        "Tiles: {} of {} ({} rows x {} cols, {} x {} per page)",
        plan.tiles.len(),
        plan.grid_size(),
        plan.rows,
        plan.cols,
        display.format_px(plan.tile_width_px),
        display.format_px(plan.tile_height_px),
    );
    if pages {
        let steps = config.export.curve_resolution;
        for page in TilePages::new(&prepared.figures, plan, steps) {
            let ids: Vec<&str> = page.figures.iter().map(|f| f.figure_id.as_str()).collect();
            let _ = writeln!(
                out,
                "  page {} [{}]: {}",
                page.page_number,
                page.label,
                ids.join(", ")
            );
        }
    }
    out
}

fn describe_figure(figure: &Figure, display: &DisplaySettings) -> String {
    let label = if figure.name.is_empty() {
        figure.id.as_str()
    } else {
        figure.name.as_str()
    };
    let Some(measures) = figure.measures.as_ref() else {
        return label.to_string();
    };
    let mut line = format!(
        "{label}: {} edge(s), length {}",
        measures.edges.len(),
        display.format_px(measures.total_length_px)
    );
    if let Some(rect) = measures.rect {
        let _ = write!(
            line,
            ", {} x {}",
            display.format_px(rect.width),
            display.format_px(rect.height)
        );
    }
    match measures.circle {
        Some(CircleMeasure::Circle { radius, .. }) => {
            let _ = write!(line, ", radius {}", display.format_px(radius));
        }
        Some(CircleMeasure::Ellipse { rx, ry, .. }) => {
            let _ = write!(
                line,
                ", ellipse {} x {}",
                display.format_px(rx),
                display.format_px(ry)
            );
        }
        None => {}
    }
    if figure.mirror_link.is_some() {
        line.push_str(" (mirrored)");
    }
    line
}
