//! Cubic Bezier segment utility.
//!
//! Evaluation, subdivision, interval restriction and arc length of a single
//! cubic segment. The arc approximator uses it to trim quadrant curves and
//! [`Path::length`](crate::path_storage::Path::length) uses it to measure
//! path elements.

use crate::basics::Point;
use crate::math::calc_distance;

/// Absolute tolerance between control polygon length and chord length below
/// which a segment is measured without further subdivision.
pub const BEZIER_LENGTH_TOLERANCE: f64 = 0.01;

/// Subdivision depth limit for [`Bezier::length`]; bounds the work on huge
/// or non-finite coordinates.
const BEZIER_LENGTH_MAX_DEPTH: u32 = 16;

/// A cubic Bezier segment defined by four control points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bezier {
    p1: Point,
    p2: Point,
    p3: Point,
    p4: Point,
}

impl Bezier {
    pub fn from_points(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// Bernstein basis weights `(a, b, c, d)` at `t`, so that the curve point
    /// is `a*p1 + b*p2 + c*p3 + d*p4`.
    #[inline]
    pub fn coefficients(t: f64) -> (f64, f64, f64, f64) {
        let m_t = 1.0 - t;
        let b = m_t * m_t;
        let c = t * t;
        let d = c * t;
        let a = b * m_t;
        (a, b * 3.0 * t, c * 3.0 * m_t, d)
    }

    pub fn point_at(&self, t: f64) -> Point {
        let (a, b, c, d) = Self::coefficients(t);
        Point::new(
            a * self.p1.x + b * self.p2.x + c * self.p3.x + d * self.p4.x,
            a * self.p1.y + b * self.p2.y + c * self.p3.y + d * self.p4.y,
        )
    }

    /// De Casteljau subdivision at `t`, returning the `[0, t]` and `[t, 1]`
    /// halves.
    pub fn split_at(&self, t: f64) -> (Bezier, Bezier) {
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);
        let p34 = self.p3.lerp(self.p4, t);
        let p123 = p12.lerp(p23, t);
        let p234 = p23.lerp(p34, t);
        let mid = p123.lerp(p234, t);
        (
            Bezier::from_points(self.p1, p12, p123, mid),
            Bezier::from_points(mid, p234, p34, self.p4),
        )
    }

    /// Split in half.
    #[inline]
    pub fn split(&self) -> (Bezier, Bezier) {
        self.split_at(0.5)
    }

    /// The sub-curve traced while the parameter runs over `[t0, t1]`.
    pub fn on_interval(&self, t0: f64, t1: f64) -> Bezier {
        if t0 == 0.0 && t1 == 1.0 {
            return *self;
        }
        if t0 >= 1.0 {
            return Bezier::from_points(self.p4, self.p4, self.p4, self.p4);
        }
        let (_, right) = self.split_at(t0);
        let (left, _) = right.split_at((t1 - t0) / (1.0 - t0));
        left
    }

    /// Arc length by adaptive subdivision.
    ///
    /// Segments whose control polygon is within
    /// [`BEZIER_LENGTH_TOLERANCE`] of their chord are measured with the
    /// Gravesen estimate `(polygon + chord) / 2`.
    pub fn length(&self) -> f64 {
        self.length_rec(0)
    }

    fn length_rec(&self, depth: u32) -> f64 {
        let polygon = calc_distance(self.p1, self.p2)
            + calc_distance(self.p2, self.p3)
            + calc_distance(self.p3, self.p4);
        let chord = calc_distance(self.p1, self.p4);

        if polygon - chord > BEZIER_LENGTH_TOLERANCE && depth < BEZIER_LENGTH_MAX_DEPTH {
            let (left, right) = self.split();
            return left.length_rec(depth + 1) + right.length_rec(depth + 1);
        }
        (polygon + chord) * 0.5
    }

    #[inline]
    pub fn pt1(&self) -> Point {
        self.p1
    }

    #[inline]
    pub fn pt2(&self) -> Point {
        self.p2
    }

    #[inline]
    pub fn pt3(&self) -> Point {
        self.p3
    }

    #[inline]
    pub fn pt4(&self) -> Point {
        self.p4
    }
}

// ============================================================================
// Tests
// ============================================================================
