//! Elliptical arc to cubic Bezier conversion.
//!
//! Approximates an arc of the ellipse inscribed in a rectangle with at most
//! five cubic segments, one per 90-degree quadrant touched. Quadrant curves
//! use the [`PATH_KAPPA`] control offset; boundary quadrants are trimmed with
//! [`Bezier::on_interval`] at parameters found by [`t_for_arc_angle`], and
//! the visible arc endpoints are replaced with exact ellipse coordinates.
//!
//! Angles are in degrees, measured counter-clockwise as seen on a y-down
//! screen: 0 is the right-hand middle of the rectangle, 90 the top middle.

use crate::basics::{Point, Rect, VertexSource, PATH_CMD_CURVE4, PATH_CMD_MOVE_TO, PATH_CMD_STOP};
use crate::bezier::Bezier;
use crate::math::{deg2rad, fuzzy_eq, is_zero};

/// Control point offset of the cubic closest to a unit quarter circle.
pub const PATH_KAPPA: f64 = 0.5522847498;

/// Up to five quadrant curves of three points each.
const MAX_ARC_POINTS: usize = 15;

/// Result of [`curves_for_arc`]: the arc start point followed by cubic
/// control point triplets `(ctrl1, ctrl2, end)`.
///
/// Also usable directly as a [`VertexSource`]: one `move_to` to the start,
/// then `curve4` vertices.
#[derive(Debug, Clone, Copy)]
pub struct ArcCurves {
    start: Point,
    points: [Point; MAX_ARC_POINTS],
    num_points: usize,
    vertex: usize,
}

impl ArcCurves {
    fn empty(start: Point) -> Self {
        Self {
            start,
            points: [Point::ORIGIN; MAX_ARC_POINTS],
            num_points: 0,
            vertex: 0,
        }
    }

    #[inline]
    fn push(&mut self, p: Point) {
        self.points[self.num_points] = p;
        self.num_points += 1;
    }

    /// Exact start point of the arc.
    pub fn start(&self) -> Point {
        self.start
    }

    /// End point of the arc; the start point when no curves were emitted.
    pub fn end(&self) -> Point {
        self.points().last().copied().unwrap_or(self.start)
    }

    /// Control points, three per cubic.
    pub fn points(&self) -> &[Point] {
        &self.points[..self.num_points]
    }

    pub fn num_curves(&self) -> usize {
        self.num_points / 3
    }

    pub fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    /// Iterate the cubics as `(ctrl1, ctrl2, end)` triplets.
    pub fn curves(&self) -> impl Iterator<Item = (Point, Point, Point)> + '_ {
        self.points().chunks_exact(3).map(|c| (c[0], c[1], c[2]))
    }
}

impl VertexSource for ArcCurves {
    fn rewind(&mut self, _path_id: u32) {
        self.vertex = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.vertex > self.num_points {
            return PATH_CMD_STOP;
        }
        let (p, cmd) = if self.vertex == 0 {
            (self.start, PATH_CMD_MOVE_TO)
        } else {
            (self.points[self.vertex - 1], PATH_CMD_CURVE4)
        };
        *x = p.x;
        *y = p.y;
        self.vertex += 1;
        cmd
    }
}

/// Parameter of the canonical quadrant cubic `(1,0) (1,κ) (κ,1) (0,1)`
/// whose point lies at `angle` degrees (0..=90) on the unit circle.
///
/// Two Newton steps against `cos(angle)` on the x component, two more
/// against `sin(angle)` on the y component seeded from the first result,
/// and the average of both estimates.
pub fn t_for_arc_angle(angle: f64) -> f64 {
    if fuzzy_eq(angle, 0.0) {
        return 0.0;
    }
    if fuzzy_eq(angle, 90.0) {
        return 1.0;
    }

    const K: f64 = PATH_KAPPA;
    let (sin_angle, cos_angle) = deg2rad(angle).sin_cos();

    // x(t) - cos, over x'(t)
    let cos_step = |t: f64| {
        t - ((((2.0 - 3.0 * K) * t + 3.0 * (K - 1.0)) * t) * t + 1.0 - cos_angle)
            / (((6.0 - 9.0 * K) * t + 6.0 * (K - 1.0)) * t)
    };
    // y(t) - sin, over the y slope term
    let sin_step = |t: f64| {
        t - ((((3.0 * K - 2.0) * t - 6.0 * K + 3.0) * t + 3.0 * K) * t - sin_angle)
            / (((9.0 * K - 6.0) * t + 12.0 * K - 6.0) * t + 3.0 * K)
    };

    let tc = cos_step(cos_step(angle / 90.0));
    let ts = sin_step(sin_step(tc));

    0.5 * (tc + ts)
}

/// Exact points on the ellipse inscribed in `rect` at `angle` and
/// `angle + length` degrees.
///
/// Each angle is reduced to `[0, 360)`, inverted to a quadrant cubic
/// parameter, evaluated on the canonical curve, mirrored into its quadrant
/// and scaled into `rect`. A null `rect` yields two origin points.
pub fn find_ellipse_coords(rect: &Rect, angle: f64, length: f64) -> (Point, Point) {
    if rect.is_null() {
        return (Point::ORIGIN, Point::ORIGIN);
    }

    let w2 = rect.width / 2.0;
    let h2 = rect.height / 2.0;
    let center = rect.center();

    let ellipse_point = |deg: f64| {
        let theta = deg - 360.0 * (deg / 360.0).floor();
        let mut t = theta / 90.0;
        let quadrant = t as i32;
        t -= quadrant as f64;

        t = t_for_arc_angle(90.0 * t);

        // swap x and y
        if quadrant & 1 != 0 {
            t = 1.0 - t;
        }

        let (a, b, c, d) = Bezier::coefficients(t);
        let mut p = Point::new(a + b + c * PATH_KAPPA, d + c + b * PATH_KAPPA);

        // left quadrants
        if quadrant == 1 || quadrant == 2 {
            p.x = -p.x;
        }
        // top quadrants
        if quadrant == 0 || quadrant == 1 {
            p.y = -p.y;
        }

        center + Point::new(w2 * p.x, h2 * p.y)
    };

    (ellipse_point(angle), ellipse_point(angle + length))
}

/// Approximate the arc of the ellipse inscribed in `rect`, starting at
/// `start_angle` and sweeping `sweep_length` degrees (positive is
/// counter-clockwise on screen), with cubic Bezier segments.
///
/// The sweep is clamped to `[-360, 360]`. A full turn from angle 0 takes a
/// fast path emitting the four quadrant curves directly. An empty arc
/// produces no curves; its start point is still reported.
pub fn curves_for_arc(rect: &Rect, start_angle: f64, sweep_length: f64) -> ArcCurves {
    if rect.is_null() {
        return ArcCurves::empty(Point::ORIGIN);
    }
    if !start_angle.is_finite() || sweep_length.is_nan() {
        log::debug!("curves_for_arc: ignoring non-finite angles {start_angle}, {sweep_length}");
        return ArcCurves::empty(Point::ORIGIN);
    }
    // Keeps the quadrant indices small; `%` is exact on floats.
    let start_angle = if start_angle.abs() > 360.0 {
        start_angle % 360.0
    } else {
        start_angle
    };

    let x = rect.x;
    let y = rect.y;

    let w = rect.width;
    let w2 = rect.width / 2.0;
    let w2k = w2 * PATH_KAPPA;

    let h = rect.height;
    let h2 = rect.height / 2.0;
    let h2k = h2 * PATH_KAPPA;

    let points = [
        // start point
        Point::new(x + w, y + h2),
        // 0 -> 270 degrees
        Point::new(x + w, y + h2 + h2k),
        Point::new(x + w2 + w2k, y + h),
        Point::new(x + w2, y + h),
        // 270 -> 180 degrees
        Point::new(x + w2 - w2k, y + h),
        Point::new(x, y + h2 + h2k),
        Point::new(x, y + h2),
        // 180 -> 90 degrees
        Point::new(x, y + h2 - h2k),
        Point::new(x + w2 - w2k, y),
        Point::new(x + w2, y),
        // 90 -> 0 degrees
        Point::new(x + w2 + w2k, y),
        Point::new(x + w, y + h2 - h2k),
        Point::new(x + w, y + h2),
    ];

    let sweep_length = sweep_length.clamp(-360.0, 360.0);

    if start_angle == 0.0 {
        if sweep_length == 360.0 {
            log::trace!("curves_for_arc: full ccw turn fast path");
            let mut arc = ArcCurves::empty(points[12]);
            for p in points[..12].iter().rev() {
                arc.push(*p);
            }
            return arc;
        } else if sweep_length == -360.0 {
            log::trace!("curves_for_arc: full cw turn fast path");
            let mut arc = ArcCurves::empty(points[0]);
            for p in &points[1..] {
                arc.push(*p);
            }
            return arc;
        }
    }

    let mut start_segment = (start_angle / 90.0).floor() as i32;
    let mut end_segment = ((start_angle + sweep_length) / 90.0).floor() as i32;

    let mut start_t = (start_angle - start_segment as f64 * 90.0) / 90.0;
    let mut end_t = (start_angle + sweep_length - end_segment as f64 * 90.0) / 90.0;

    let delta: i32 = if sweep_length > 0.0 { 1 } else { -1 };
    if delta < 0 {
        start_t = 1.0 - start_t;
        end_t = 1.0 - end_t;
    }

    // avoid empty start segment
    if is_zero(start_t - 1.0) {
        start_t = 0.0;
        start_segment += delta;
    }

    // avoid empty end segment
    if is_zero(end_t) {
        end_t = 1.0;
        end_segment -= delta;
    }

    let start_t = t_for_arc_angle(start_t * 90.0);
    let end_t = t_for_arc_angle(end_t * 90.0);

    let split_at_start = !is_zero(start_t);
    let split_at_end = !is_zero(end_t - 1.0);

    let end = end_segment + delta;

    // Index of the first of the four points of the quadrant curve holding
    // segment `i`, walking the table from 0 degrees clockwise.
    let quadrant_base = |i: i32| (3 - i.rem_euclid(4)) as usize * 3;

    if start_segment == end {
        log::trace!("curves_for_arc: empty arc at quadrant boundary");
        let j = quadrant_base(start_segment);
        let boundary = if delta > 0 { points[j + 3] } else { points[j] };
        return ArcCurves::empty(boundary);
    }

    let (start_point, end_point) = find_ellipse_coords(rect, start_angle, sweep_length);

    if start_segment == end_segment && fuzzy_eq(start_t, end_t) {
        log::trace!("curves_for_arc: empty arc inside one quadrant");
        return ArcCurves::empty(start_point);
    }

    let mut arc = ArcCurves::empty(start_point);
    let mut i = start_segment;
    while i != end {
        let j = quadrant_base(i);

        let mut b = if delta > 0 {
            Bezier::from_points(points[j + 3], points[j + 2], points[j + 1], points[j])
        } else {
            Bezier::from_points(points[j], points[j + 1], points[j + 2], points[j + 3])
        };

        if i == start_segment {
            if i == end_segment && split_at_end {
                b = b.on_interval(start_t, end_t);
            } else if split_at_start {
                b = b.on_interval(start_t, 1.0);
            }
        } else if i == end_segment && split_at_end {
            b = b.on_interval(0.0, end_t);
        }

        arc.push(b.pt2());
        arc.push(b.pt3());
        arc.push(b.pt4());

        i += delta;
    }

    let last = arc.num_points - 1;
    arc.points[last] = end_point;

    arc
}

// ============================================================================
// Tests
// ============================================================================
