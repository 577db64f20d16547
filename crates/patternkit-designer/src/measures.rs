//! Derived measurements shown next to a figure: edge lengths and angles,
//! and circle, curve or rectangle statistics depending on the drawing tool.
//!
//! Measurement never fails. A block whose input is insufficient (too few
//! nodes, a degenerate bounding box) is simply left out.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use patternkit_core::px_to_cm;

use crate::geometry::{circumradius, polyline_length, Rect, Vec2};
use crate::model::{Figure, Tool};
use crate::transform::{world_polyline, world_polylines};

/// Samples per cubic for per-edge lengths.
pub const EDGE_LENGTH_STEPS: usize = 64;
/// Samples per cubic for whole-curve length and midpoint statistics.
pub const CURVE_STATS_STEPS: usize = 96;
/// Relative radius difference up to which an ellipse is reported as a circle.
pub const CIRCLE_TOLERANCE: f64 = 0.02;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeMeasure {
    pub edge_id: String,
    pub length_px: f64,
    /// Chord direction, `atan2(dy, dx)` in degrees.
    pub angle_deg: f64,
}

impl EdgeMeasure {
    pub fn length_cm(&self) -> f64 {
        px_to_cm(self.length_px)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum CircleMeasure {
    Circle {
        radius: f64,
        diameter: f64,
        circumference: f64,
    },
    Ellipse {
        rx: f64,
        ry: f64,
        circumference: f64,
    },
}

impl CircleMeasure {
    pub fn circumference(&self) -> f64 {
        match *self {
            CircleMeasure::Circle { circumference, .. } => circumference,
            CircleMeasure::Ellipse { circumference, .. } => circumference,
        }
    }
}

/// Statistics at the middle sample of a curve's world polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveMeasure {
    pub tangent_angle_deg: f64,
    /// `None` where the curve is locally straight.
    pub curvature_radius: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectMeasure {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Measures {
    pub edges: Vec<EdgeMeasure>,
    pub total_length_px: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circle: Option<CircleMeasure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveMeasure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<RectMeasure>,
}

impl Measures {
    pub fn total_length_cm(&self) -> f64 {
        px_to_cm(self.total_length_px)
    }

    pub fn edge(&self, edge_id: &str) -> Option<&EdgeMeasure> {
        self.edges.iter().find(|m| m.edge_id == edge_id)
    }
}

pub fn compute_measures(figure: &Figure) -> Measures {
    let edges: Vec<EdgeMeasure> = figure
        .edges
        .iter()
        .filter_map(|edge| {
            let curve = figure.edge_curve_local(edge)?;
            Some(EdgeMeasure {
                edge_id: edge.id.clone(),
                length_px: curve.length(EDGE_LENGTH_STEPS),
                angle_deg: curve.chord().angle_deg(),
            })
        })
        .collect();

    let total_length_px = if figure.tool == Tool::Curve {
        // Rigid transforms preserve length, so world runs measure the local path.
        world_polylines(figure, CURVE_STATS_STEPS)
            .iter()
            .map(|run| polyline_length(run))
            .sum()
    } else {
        edges.iter().map(|m| m.length_px).sum()
    };

    Measures {
        edges,
        total_length_px,
        circle: match figure.tool {
            Tool::Circle => circle_measure(figure),
            _ => None,
        },
        curve: match figure.tool {
            Tool::Curve => curve_measure(figure),
            _ => None,
        },
        rect: match figure.tool {
            Tool::Rectangle => node_bounds(figure).map(|b| RectMeasure {
                width: b.width(),
                height: b.height(),
            }),
            _ => None,
        },
    }
}

/// Returns `figures` with freshly derived measures. Revisions are not bumped.
pub fn measure_all(figures: &[Figure]) -> Vec<Figure> {
    figures
        .iter()
        .map(|f| {
            let mut f = f.clone();
            f.measures = Some(compute_measures(&f));
            f
        })
        .collect()
}

fn node_bounds(figure: &Figure) -> Option<Rect> {
    let points: Vec<Vec2> = figure.nodes.iter().map(|n| n.pos()).collect();
    Rect::from_points(&points)
}

fn circle_measure(figure: &Figure) -> Option<CircleMeasure> {
    let bounds = node_bounds(figure)?;
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;
    let larger = rx.max(ry);
    if larger <= 0.0 {
        return None;
    }

    if (rx - ry).abs() / larger <= CIRCLE_TOLERANCE {
        let radius = (rx + ry) / 2.0;
        Some(CircleMeasure::Circle {
            radius,
            diameter: 2.0 * radius,
            circumference: 2.0 * PI * radius,
        })
    } else {
        Some(CircleMeasure::Ellipse {
            rx,
            ry,
            circumference: ellipse_circumference(rx, ry),
        })
    }
}

/// Ramanujan's second approximation.
fn ellipse_circumference(a: f64, b: f64) -> f64 {
    let h = ((a - b) / (a + b)).powi(2);
    PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
}

fn curve_measure(figure: &Figure) -> Option<CurveMeasure> {
    let points = world_polyline(figure, CURVE_STATS_STEPS);
    if points.len() < 3 {
        return None;
    }
    let m = points.len() / 2;
    let (prev, mid, next) = (points[m - 1], points[m], points[m + 1]);
    Some(CurveMeasure {
        tangent_angle_deg: (next - prev).angle_deg(),
        curvature_radius: circumradius(prev, mid, next),
    })
}
