//! Edge length solver: move an edge's endpoint(s) so its arc length hits a target.
//!
//! Lines are solved exactly. Cubic arc length has no closed-form inverse, so
//! for a moving endpoint the solver searches a scalar displacement `s` along
//! the tangent at that end: the search interval is doubled from `s = 0` until
//! the target is bracketed, then bisected. Targets shorter than the edge can
//! ever get leave it at its shortest reachable length. Handles always travel
//! rigidly with their node.

use serde::{Deserialize, Serialize};
use tracing::debug;

use patternkit_core::ModelError;

use crate::geometry::{EdgeCurve, Vec2};
use crate::model::{curve_between, Figure};

/// Samples per cubic when measuring arc length inside the solver.
pub const SOLVER_SAMPLES: usize = 80;
/// Maximum number of interval doublings while bracketing.
pub const BRACKET_DOUBLINGS: usize = 16;
pub const BISECTION_ITERATIONS: usize = 24;
/// Golden-section iterations when the target lies past a turning point.
pub const EXTREMUM_ITERATIONS: usize = 32;
/// Smallest first bracketing step, in px.
const MIN_STEP: f64 = 1e-3;
/// Targets at or below zero are clamped to this length.
pub const MIN_TARGET_LENGTH: f64 = 1e-4;

/// Which end of the edge is adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthAnchor {
    /// `from` moves, `to` stays put.
    Start,
    /// `to` moves, `from` stays put.
    End,
    /// Both ends move symmetrically about the fixed midpoint.
    Mid,
}

/// Returns a copy of `figure` where edge `edge_id` has arc length `target_px`.
///
/// Fails only when the edge is unknown or references a missing node.
pub fn set_edge_target_length(
    figure: &Figure,
    edge_id: &str,
    target_px: f64,
    anchor: LengthAnchor,
) -> Result<Figure, ModelError> {
    let edge = figure.edge(edge_id).ok_or_else(|| ModelError::UnknownEdge {
        figure_id: figure.id.clone(),
        edge_id: edge_id.to_string(),
    })?;
    let (from, to) = figure.edge_endpoints(edge)?;
    let target = clamp_target(target_px);

    let (delta_from, delta_to) = match curve_between(from, to) {
        EdgeCurve::Line { a, b } => solve_line(a, b, target, anchor),
        EdgeCurve::Cubic { p0, p1, p2, p3 } => {
            let handles = (from.out_handle.is_some(), to.in_handle.is_some());
            solve_cubic([p0, p1, p2, p3], handles, target, anchor)
        }
    };

    let (from_id, to_id) = (edge.from.clone(), edge.to.clone());
    let mut out = figure.clone();
    for (node_id, delta) in [(&from_id, delta_from), (&to_id, delta_to)] {
        if let Some(node) = out.node_mut(node_id) {
            node.translate(delta);
        }
    }
    out.touch();
    Ok(out)
}

fn clamp_target(target_px: f64) -> f64 {
    if target_px > MIN_TARGET_LENGTH {
        target_px
    } else {
        MIN_TARGET_LENGTH
    }
}

/// Endpoint deltas `(from, to)` for a straight edge. Exact.
fn solve_line(a: Vec2, b: Vec2, target: f64, anchor: LengthAnchor) -> (Vec2, Vec2) {
    match anchor {
        LengthAnchor::End => {
            let dir = (b - a).norm();
            (Vec2::ZERO, a + dir * target - b)
        }
        LengthAnchor::Start => {
            let dir = (a - b).norm();
            (b + dir * target - a, Vec2::ZERO)
        }
        LengthAnchor::Mid => {
            let mid = a.lerp(b, 0.5);
            let dir = (b - a).norm();
            let half = dir * (target / 2.0);
            (mid - half - a, mid + half - b)
        }
    }
}

/// Endpoint deltas `(from, to)` for a cubic edge.
///
/// `handles` says whether `from.out_handle` / `to.in_handle` are present.
fn solve_cubic(
    [p0, p1, p2, p3]: [Vec2; 4],
    handles: (bool, bool),
    target: f64,
    anchor: LengthAnchor,
) -> (Vec2, Vec2) {
    match anchor {
        LengthAnchor::End => {
            // Slide the end along the direction coming off the fixed end's handle.
            let dir = if handles.0 { p3 - p1 } else { p3 - p0 }.norm();
            let length_at = |s: f64| {
                let d = dir * s;
                cubic_length(p0, p1, p2 + d, p3 + d)
            };
            let s = solve_displacement(length_at, target);
            (Vec2::ZERO, dir * s)
        }
        LengthAnchor::Start => {
            let dir = if handles.1 { p0 - p2 } else { p0 - p3 }.norm();
            let length_at = |s: f64| {
                let d = dir * s;
                cubic_length(p0 + d, p1 + d, p2, p3)
            };
            let s = solve_displacement(length_at, target);
            (dir * s, Vec2::ZERO)
        }
        LengthAnchor::Mid => {
            // Proportional one-shot estimate along the chord. Exact for flat
            // curves only; midpoint edits are corrected visually while dragging.
            let current = cubic_length(p0, p1, p2, p3);
            let mid = p0.lerp(p3, 0.5);
            if current < MIN_TARGET_LENGTH {
                let half = (p3 - p0).norm() * (target / 2.0);
                return (mid - half - p0, mid + half - p3);
            }
            let ratio = target / current;
            let half_chord = (p3 - p0) * 0.5;
            let new_p0 = mid - half_chord * ratio;
            let new_p3 = mid + half_chord * ratio;
            (new_p0 - p0, new_p3 - p3)
        }
    }
}

fn cubic_length(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> f64 {
    EdgeCurve::Cubic { p0, p1, p2, p3 }.length(SOLVER_SAMPLES)
}

/// Finds `s` with `length_at(s) == target`.
///
/// Steps away from `s = 0` towards the target, starting with a step of
/// `|target - length_at(0)|` and doubling it. Moving an endpoint by `s`
/// changes the length by at most `|s|`, so the first step cannot jump a
/// crossing. Once a sign change is seen the interval is bisected.
///
/// Sliding an endpoint inwards only shortens the edge up to a point. When a
/// step lands past that turning point the extremum between the last two
/// steps is located with a golden-section search: if it crosses the target
/// the crossing is bisected, otherwise the target is out of reach and the
/// displacement closest to it is returned.
fn solve_displacement(length_at: impl Fn(f64) -> f64, target: f64) -> f64 {
    let initial = length_at(0.0);
    let err0 = initial - target;
    if err0 == 0.0 {
        return 0.0;
    }

    // Distance to the target, negative once it has been crossed.
    let sign = err0.signum();
    let gap = |s: f64| (length_at(s) - target) * sign;
    let direction = -sign;

    let mut step = err0.abs().max(MIN_STEP);
    let (mut prev, mut lo, mut gap_lo) = (0.0, 0.0, err0.abs());
    let (mut best, mut gap_best) = (0.0, gap_lo);
    let mut bracket = None;
    for _ in 0..BRACKET_DOUBLINGS {
        let hi = direction * step;
        let gap_hi = gap(hi);
        if gap_hi < 0.0 {
            bracket = Some((lo, hi));
            break;
        }
        if gap_hi < gap_best {
            best = hi;
            gap_best = gap_hi;
        }
        if gap_hi > gap_lo {
            let turn = golden_section_min(&gap, prev, hi);
            let gap_turn = gap(turn);
            if gap_turn < 0.0 {
                bracket = Some((prev, turn));
            } else if gap_turn < gap_best {
                best = turn;
            }
            break;
        }
        prev = lo;
        lo = hi;
        gap_lo = gap_hi;
        step *= 2.0;
    }

    let Some((mut a, mut b)) = bracket else {
        debug!(
            "Length target {:.3} out of reach from {:.3}, closest at {:.3}",
            target,
            initial,
            length_at(best)
        );
        return best;
    };

    for _ in 0..BISECTION_ITERATIONS {
        let m = 0.5 * (a + b);
        if gap(m) < 0.0 {
            b = m;
        } else {
            a = m;
        }
    }
    0.5 * (a + b)
}

/// Minimum of a unimodal `f` on the interval between `a` and `b`.
fn golden_section_min(f: impl Fn(f64) -> f64, mut a: f64, mut b: f64) -> f64 {
    let r = (5f64.sqrt() - 1.0) / 2.0;
    let mut c = b - r * (b - a);
    let mut d = a + r * (b - a);
    let (mut fc, mut fd) = (f(c), f(d));
    for _ in 0..EXTREMUM_ITERATIONS {
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - r * (b - a);
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + r * (b - a);
            fd = f(d);
        }
    }
    0.5 * (a + b)
}
