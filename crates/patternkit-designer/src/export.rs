//! Per-page export content.
//!
//! [`TilePages`] walks a [`TilePlan`] and hands out one [`PageContent`] at a
//! time, with every figure on the page expressed in tile-local pixels. Pages
//! are produced lazily; a renderer that stops pulling simply drops the
//! iterator.

use serde::{Deserialize, Serialize};
use tracing::debug;

use patternkit_core::px_to_cm;

use crate::geometry::Vec2;
use crate::model::{Figure, FigureId, FigureIndex};
use crate::tiling::{TileDescriptor, TilePlan};
use crate::transform::world_polylines;

/// A figure's outline on one page, one point run per edge chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileFigure {
    pub figure_id: FigureId,
    pub runs_px: Vec<Vec<Vec2>>,
}

impl TileFigure {
    pub fn runs_cm(&self) -> Vec<Vec<Vec2>> {
        self.runs_px
            .iter()
            .map(|run| {
                run.iter()
                    .map(|p| Vec2::new(px_to_cm(p.x), px_to_cm(p.y)))
                    .collect()
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// 1-based position in print order
    pub page_number: usize,
    /// Assembly label, row letter then 1-based column (`"B3"`)
    pub label: String,
    pub row: usize,
    pub col: usize,
    pub offset_px: Vec2,
    pub figures: Vec<TileFigure>,
}

/// Row letters for the assembly grid: `A..Z`, then `AA`, `AB`, ...
pub fn row_label(row: usize) -> String {
    let mut n = row + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

pub fn page_label(row: usize, col: usize) -> String {
    format!("{}{}", row_label(row), col + 1)
}

/// Lazy iterator over the pages of a tile plan.
pub struct TilePages<'a> {
    figures: &'a [Figure],
    index: FigureIndex,
    plan: &'a TilePlan,
    steps_per_curve: usize,
    next: usize,
}

impl<'a> TilePages<'a> {
    pub fn new(figures: &'a [Figure], plan: &'a TilePlan, steps_per_curve: usize) -> Self {
        Self {
            figures,
            index: FigureIndex::build(figures),
            plan,
            steps_per_curve: steps_per_curve.max(1),
            next: 0,
        }
    }

    fn page_for(&self, page_number: usize, tile: &TileDescriptor) -> PageContent {
        let offset = tile.offset_px;
        let figures = tile
            .figures_in_tile
            .iter()
            .filter_map(|id| {
                let Some(figure) = self.index.get(self.figures, id) else {
                    debug!("Figure {} left the pattern after planning", id);
                    return None;
                };
                let runs_px = world_polylines(figure, self.steps_per_curve)
                    .into_iter()
                    .map(|run| run.into_iter().map(|p| p - offset).collect())
                    .collect();
                Some(TileFigure {
                    figure_id: figure.id.clone(),
                    runs_px,
                })
            })
            .collect();

        PageContent {
            page_number,
            label: page_label(tile.row, tile.col),
            row: tile.row,
            col: tile.col,
            offset_px: offset,
            figures,
        }
    }
}

impl Iterator for TilePages<'_> {
    type Item = PageContent;

    fn next(&mut self) -> Option<PageContent> {
        let tile = self.plan.tiles.get(self.next)?;
        self.next += 1;
        Some(self.page_for(self.next, tile))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.tiles.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TilePages<'_> {}
