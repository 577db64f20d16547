//! Geometry primitives: 2D vectors, cubic Bézier sampling, polyline length,
//! reflection and axis-aligned rectangles.
//!
//! Everything here is a pure function of its inputs and works in pixel
//! units. Degenerate inputs never fail: [`Vec2::norm`] of a near-zero vector
//! is `(1, 0)` and [`circumradius`] of collinear points is `None`, so callers
//! dragging geometry interactively never see NaN.

use lyon::geom::{CubicBezierSegment, Point as LyonPoint};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Length below which a vector is treated as zero.
pub const NORM_EPSILON: f64 = 1e-12;

/// Twice-area below which three points count as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    pub fn mul(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn len(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(self, other: Vec2) -> f64 {
        self.sub(other).len()
    }

    /// Unit vector in the same direction.
    ///
    /// Vectors shorter than [`NORM_EPSILON`] normalise to `(1, 0)`. This is a
    /// deliberate degenerate-input policy, not an error: a zero-length edge
    /// still yields a usable direction.
    pub fn norm(self) -> Vec2 {
        let l = self.len();
        if l < NORM_EPSILON {
            Vec2::new(1.0, 0.0)
        } else {
            Vec2::new(self.x / l, self.y / l)
        }
    }

    /// Rotated 90 degrees.
    pub fn perp(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    pub fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        self.add(other.sub(self).mul(t))
    }

    /// Angle of the vector in degrees, `atan2(y, x)`.
    pub fn angle_deg(self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    fn to_lyon(self) -> LyonPoint<f64> {
        LyonPoint::new(self.x, self.y)
    }

    fn from_lyon(p: LyonPoint<f64>) -> Vec2 {
        Vec2::new(p.x, p.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::sub(self, rhs)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::mul(self, rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

/// Evaluates the cubic at `steps + 1` uniformly spaced parameter values.
///
/// Spacing is uniform in `t`, not in arc length; raise `steps` where length
/// accuracy matters.
pub fn sample_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, steps: usize) -> Vec<Vec2> {
    let steps = steps.max(1);
    let segment = CubicBezierSegment {
        from: p0.to_lyon(),
        ctrl1: p1.to_lyon(),
        ctrl2: p2.to_lyon(),
        to: p3.to_lyon(),
    };
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            Vec2::from_lyon(segment.sample(t))
        })
        .collect()
}

/// Sum of consecutive segment lengths.
pub fn polyline_length(points: &[Vec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

/// The geometry of one edge, in whatever space its points were taken from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeCurve {
    Line { a: Vec2, b: Vec2 },
    Cubic { p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2 },
}

impl EdgeCurve {
    pub fn start(&self) -> Vec2 {
        match *self {
            EdgeCurve::Line { a, .. } => a,
            EdgeCurve::Cubic { p0, .. } => p0,
        }
    }

    pub fn end(&self) -> Vec2 {
        match *self {
            EdgeCurve::Line { b, .. } => b,
            EdgeCurve::Cubic { p3, .. } => p3,
        }
    }

    /// Points along the edge. Lines yield just their two endpoints.
    pub fn sample(&self, steps: usize) -> Vec<Vec2> {
        match *self {
            EdgeCurve::Line { a, b } => vec![a, b],
            EdgeCurve::Cubic { p0, p1, p2, p3 } => sample_cubic(p0, p1, p2, p3, steps),
        }
    }

    /// Arc length; exact for lines, sampled for cubics.
    pub fn length(&self, steps: usize) -> f64 {
        match *self {
            EdgeCurve::Line { a, b } => a.distance_to(b),
            EdgeCurve::Cubic { p0, p1, p2, p3 } => {
                polyline_length(&sample_cubic(p0, p1, p2, p3, steps))
            }
        }
    }

    /// Chord from start to end.
    pub fn chord(&self) -> Vec2 {
        self.end() - self.start()
    }
}

/// Reflects `v` across the line through the origin with direction `u`.
///
/// `u` is normalised first, so any non-zero direction works.
pub fn reflect(v: Vec2, u: Vec2) -> Vec2 {
    let u = u.norm();
    u.mul(2.0 * v.dot(u)).sub(v)
}

/// Reflects a point across the line through `axis_point` with `axis_dir`.
pub fn reflect_point_across_axis(p: Vec2, axis_point: Vec2, axis_dir: Vec2) -> Vec2 {
    axis_point + reflect(p - axis_point, axis_dir)
}

/// Radius of the circle through three points, `None` when they are collinear.
pub fn circumradius(a: Vec2, b: Vec2, c: Vec2) -> Option<f64> {
    let twice_area = ((b - a).x * (c - a).y - (b - a).y * (c - a).x).abs();
    if twice_area < COLLINEAR_EPSILON {
        return None;
    }
    let area = twice_area / 2.0;
    Some(a.distance_to(b) * b.distance_to(c) * c.distance_to(a) / (4.0 * area))
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_origin_size(origin: Vec2, width: f64, height: f64) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    /// Bounds of a point set, `None` when empty.
    pub fn from_points<'a, I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = &'a Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut rect = Rect::new(first.x, first.y, first.x, first.y);
        for p in iter {
            rect.min_x = rect.min_x.min(p.x);
            rect.min_y = rect.min_y.min(p.y);
            rect.max_x = rect.max_x.max(p.x);
            rect.max_y = rect.max_y.max(p.y);
        }
        Some(rect)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.min_x, self.min_y)
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Grown by `pad` on every side.
    pub fn padded(&self, pad: f64) -> Rect {
        Rect::new(
            self.min_x - pad,
            self.min_y - pad,
            self.max_x + pad,
            self.max_y + pad,
        )
    }

    /// Open-interval overlap test: rectangles that only touch do not intersect.
    pub fn intersects_open(&self, other: &Rect) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }
}
