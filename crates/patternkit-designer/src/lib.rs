//! # PatternKit Designer
//!
//! The figure geometry kernel behind the pattern editor: editable pattern
//! pieces made of nodes and straight or cubic edges, placed in world space by
//! a rigid transform, and prepared for real-scale tiled printing.
//!
//! ## Core Components
//!
//! - **Geometry**: vectors, cubic sampling, arc length, reflection, rectangles
//! - **Model**: nodes, edges, figures, mirror links and the id index
//! - **Transform**: local ↔ world mapping, world outlines and bounding boxes
//! - **Length solver**: drag an edge to an exact arc length
//! - **Mirror**: keep mirrored copies in step with their originals
//! - **Measures**: lengths, angles and shape statistics shown next to a piece
//! - **Tiling / Export**: split the pattern into printable pages
//!
//! ## Architecture
//!
//! ```text
//! edits (model operations, length solver)
//!   └── commit
//!         ├── mirror synchronisation
//!         └── measurement
//! export
//!   ├── plan_tiles
//!   └── TilePages (per-page outlines)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use patternkit_designer::{commit, plan_tiles, Figure, TilePages};
//!
//! let figures = commit(&[Figure::rectangle("front", 0.0, 0.0, 400.0, 600.0)]);
//! let plan = plan_tiles(&figures, &page)?;
//! for page in TilePages::new(&figures, &plan, 32) {
//!     render(page);
//! }
//! ```

pub mod export;
pub mod geometry;
pub mod length_solver;
pub mod measures;
pub mod mirror;
pub mod model;
pub mod serialization;
pub mod tiling;
pub mod transform;

pub use export::{page_label, PageContent, TileFigure, TilePages};
pub use geometry::{EdgeCurve, Rect, Vec2};
pub use length_solver::{set_edge_target_length, LengthAnchor};
pub use measures::{
    compute_measures, measure_all, CircleMeasure, CurveMeasure, EdgeMeasure, Measures,
    RectMeasure,
};
pub use mirror::{create_mirror, sync_mirrors, unlink_pair};
pub use model::{
    remove_figure_cascade, seams_of, Edge, EdgeKind, Figure, FigureIndex, FigureKind, HandleSide,
    MirrorLink, MirrorRole, Node, NodeMode, SyncStamp, Tool,
};
pub use serialization::{PatternFile, PatternMetadata};
pub use tiling::{plan_tiles, plan_tiles_px, TileDescriptor, TilePlan};
pub use transform::{
    centroid_local, local_to_world, world_bounding_box, world_polyline, world_polylines,
    world_to_local,
};

/// Settles a batch of edits: re-derives stale mirrors, then recomputes
/// every figure's measures. The input is not modified.
pub fn commit(figures: &[Figure]) -> Vec<Figure> {
    let synced = sync_mirrors(figures);
    measure_all(&synced)
}
