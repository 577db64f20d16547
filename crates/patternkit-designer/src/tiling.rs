//! # Page Tiling Module
//!
//! Splits the world-space extent of a pattern into printable page tiles.
//!
//! Supports:
//! - Tile size derived from the paper size, orientation and margins
//! - A fixed padding around the union bounding box of all figures
//! - Row-major tile order starting at the padded top-left corner
//! - Optional suppression of tiles that contain no figure
//!
//! Without blank pages only the cells a figure's bounding box can touch are
//! visited, so far-apart pieces do not walk the empty grid between them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use patternkit_core::{px_to_cm, PageSettings, TilingError};

use crate::geometry::{Rect, Vec2};
use crate::model::{Figure, FigureId};
use crate::transform::world_bounding_box;

/// Padding added around the figures' union bounding box, in pixels.
pub const EXPORT_PADDING_PX: f64 = 10.0;

/// Most pages a single plan may hold.
pub const MAX_PAGES: usize = 10_000;

/// One printable page of the pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileDescriptor {
    /// World-space top-left corner of the tile
    pub offset_px: Vec2,
    pub row: usize,
    pub col: usize,
    /// Ids of the figures whose bounding box overlaps this tile
    pub figures_in_tile: Vec<FigureId>,
}

/// The tile grid covering a set of figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilePlan {
    pub tiles: Vec<TileDescriptor>,
    pub rows: usize,
    pub cols: usize,
    pub tile_width_px: f64,
    pub tile_height_px: f64,
    /// Padded union bounding box; `None` when there was nothing to tile
    pub bounds: Option<Rect>,
}

impl TilePlan {
    fn empty(tile_width_px: f64, tile_height_px: f64) -> Self {
        Self {
            tiles: Vec::new(),
            rows: 0,
            cols: 0,
            tile_width_px,
            tile_height_px,
            bounds: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Total number of grid cells, emitted or not.
    pub fn grid_size(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}

/// Plans tiles for `figures` using the printable area of `page`.
pub fn plan_tiles(figures: &[Figure], page: &PageSettings) -> Result<TilePlan, TilingError> {
    let (tile_w, tile_h) = page.safe_size_px()?;
    plan_tiles_px(figures, tile_w, tile_h, page.include_blank_pages)
}

/// Plans tiles of an explicit pixel size.
pub fn plan_tiles_px(
    figures: &[Figure],
    tile_w: f64,
    tile_h: f64,
    include_blank_pages: bool,
) -> Result<TilePlan, TilingError> {
    if !(tile_w > 0.0 && tile_h > 0.0) {
        return Err(TilingError::EmptyPrintableArea {
            width_cm: px_to_cm(tile_w),
            height_cm: px_to_cm(tile_h),
            margin_cm: 0.0,
        });
    }

    let boxes: Vec<(&Figure, Rect)> = figures
        .iter()
        .filter_map(|f| world_bounding_box(f).map(|b| (f, b)))
        .collect();
    let Some(union) = boxes.iter().map(|(_, b)| *b).reduce(|a, b| a.union(&b)) else {
        debug!("No drawable figures, empty tile plan");
        return Ok(TilePlan::empty(tile_w, tile_h));
    };

    let bounds = union.padded(EXPORT_PADDING_PX);
    let cols = ((bounds.width() / tile_w).ceil() as usize).max(1);
    let rows = ((bounds.height() / tile_h).ceil() as usize).max(1);
    let cell = |row: usize, col: usize| {
        let origin = Vec2::new(
            bounds.min_x + col as f64 * tile_w,
            bounds.min_y + row as f64 * tile_h,
        );
        Rect::from_origin_size(origin, tile_w, tile_h)
    };

    let tiles = if include_blank_pages {
        let pages = rows.saturating_mul(cols);
        check_page_count(pages)?;
        let mut tiles = Vec::with_capacity(pages);
        for row in 0..rows {
            for col in 0..cols {
                let rect = cell(row, col);
                let figures_in_tile: Vec<FigureId> = boxes
                    .iter()
                    .filter(|(_, b)| rect.intersects_open(b))
                    .map(|(f, _)| f.id.clone())
                    .collect();
                tiles.push(TileDescriptor {
                    offset_px: rect.min(),
                    row,
                    col,
                    figures_in_tile,
                });
            }
        }
        tiles
    } else {
        // Keyed by (row, col) so iteration stays row-major.
        let mut occupied: BTreeMap<(usize, usize), Vec<FigureId>> = BTreeMap::new();
        for (figure, b) in &boxes {
            let (c0, c1) = cell_span(b.min_x - bounds.min_x, b.max_x - bounds.min_x, tile_w, cols);
            let (r0, r1) = cell_span(b.min_y - bounds.min_y, b.max_y - bounds.min_y, tile_h, rows);
            check_page_count((r1 - r0 + 1).saturating_mul(c1 - c0 + 1))?;
            for row in r0..=r1 {
                for col in c0..=c1 {
                    if cell(row, col).intersects_open(b) {
                        occupied
                            .entry((row, col))
                            .or_default()
                            .push(figure.id.clone());
                    }
                }
            }
            check_page_count(occupied.len())?;
        }
        occupied
            .into_iter()
            .map(|((row, col), figures_in_tile)| TileDescriptor {
                offset_px: cell(row, col).min(),
                row,
                col,
                figures_in_tile,
            })
            .collect()
    };

    debug!(
        "Planned {} of {} tile(s) ({} x {})",
        tiles.len(),
        rows.saturating_mul(cols),
        rows,
        cols
    );
    Ok(TilePlan {
        tiles,
        rows,
        cols,
        tile_width_px: tile_w,
        tile_height_px: tile_h,
        bounds: Some(bounds),
    })
}

fn check_page_count(pages: usize) -> Result<(), TilingError> {
    if pages > MAX_PAGES {
        return Err(TilingError::TooManyPages {
            pages,
            limit: MAX_PAGES,
        });
    }
    Ok(())
}

/// Cells along one axis that can overlap `[lo, hi]` (offsets from the grid
/// origin), with one cell of slack on each side, clamped to `0..count`.
fn cell_span(lo: f64, hi: f64, size: f64, count: usize) -> (usize, usize) {
    let last = count - 1;
    let first = ((lo / size).floor() - 1.0).max(0.0) as usize;
    let end = (hi / size).ceil().max(0.0) as usize;
    (first.min(last), end.min(last))
}
