//! Regular polygon and star builders.
//!
//! Vertices are placed on circles around `(cx, cy)`. With non-zero
//! roundness each edge becomes a cubic whose control points are pulled
//! along the tangents of the circle through its end vertices.

use crate::basics::{Direction, Point};
use crate::math::{deg2rad, is_zero, PI};
use crate::path_storage::Path;

/// Tangent length factor for rounded polygon edges.
pub const POLYGON_MAGIC_NUMBER: f64 = 0.25;

/// Tangent length factor for rounded star edges, divided by the point count.
pub const POLYSTAR_MAGIC_NUMBER: f64 = 0.47829 / 0.28;

/// Largest vertex count a polygon or star may generate; larger requests
/// are skipped.
pub const MAX_SHAPE_POINTS: usize = 1 << 20;

/// Point and element capacity hints for `num_points` edges plus the move,
/// close and a possible closing line. `None` on overflow.
fn shape_capacity(num_points: usize, has_roundness: bool) -> Option<(usize, usize)> {
    let per_edge = if has_roundness { 3 } else { 1 };
    let points = num_points.checked_mul(per_edge)?.checked_add(2)?;
    let elements = num_points.checked_add(3)?;
    Some((points, elements))
}

/// Offsets of the two control points of a rounded edge running from
/// `prev` to `cur` (both relative to the centre).
///
/// Each control point leaves its vertex along the circle tangent, turned
/// against the winding direction; `r1` and `r2` are the tangent lengths.
#[inline]
fn tangent_offsets(prev: Point, cur: Point, r1: f64, r2: f64, angle_dir: f64) -> (Point, Point) {
    let (s1, c1) = (prev.y.atan2(prev.x) - PI / 2.0 * angle_dir).sin_cos();
    let (s2, c2) = (cur.y.atan2(cur.x) - PI / 2.0 * angle_dir).sin_cos();
    (Point::new(r1 * c1, r1 * s1), Point::new(r2 * c2, r2 * s2))
}

impl Path {
    /// Append a regular polygon with `floor(points)` vertices on a circle of
    /// `radius` around `(cx, cy)`.
    ///
    /// `roundness` is a percentage; zero gives straight edges. `start_angle`
    /// is in degrees. Fewer than one point adds nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn add_polygon(
        &mut self,
        points: f64,
        radius: f64,
        roundness: f64,
        start_angle: f64,
        cx: f64,
        cy: f64,
        dir: Direction,
    ) {
        if !points.is_finite() || points < 1.0 || points.floor() > MAX_SHAPE_POINTS as f64 {
            log::debug!("add_polygon: skipping polygon with {points} points");
            return;
        }

        let num_points = points.floor() as usize;
        let angle_per_point = 2.0 * PI / points.floor();
        let angle_dir = dir.sign();
        let roundness = roundness / 100.0;
        let has_roundness = !is_zero(roundness);
        let center = Point::new(cx, cy);

        // The start angle goes through the degree offset and conversion twice.
        let mut current_angle = deg2rad(start_angle - 90.0);
        current_angle = deg2rad(current_angle - 90.0);

        let (sin, cos) = current_angle.sin_cos();
        let mut pt = Point::new(radius * cos, radius * sin);
        current_angle += angle_per_point * angle_dir;

        if let Some((point_hint, element_hint)) = shape_capacity(num_points, has_roundness) {
            self.reserve(point_hint, element_hint);
        }

        self.move_to(pt + center);

        let tangent = radius * roundness * POLYGON_MAGIC_NUMBER;
        for _ in 0..num_points {
            let prev = pt;
            let (sin, cos) = current_angle.sin_cos();
            pt = Point::new(radius * cos, radius * sin);

            if has_roundness {
                let (cp1, cp2) = tangent_offsets(prev, pt, tangent, tangent, angle_dir);
                // The end point is centre-relative like every other emitted point.
                self.cubic_to(prev - cp1 + center, pt + cp2 + center, pt + center);
            } else {
                self.line_to(pt + center);
            }

            current_angle += angle_per_point * angle_dir;
        }

        self.close();
    }

    /// Append a star with `points` tips alternating between `outer_radius`
    /// and `inner_radius` around `(cx, cy)`.
    ///
    /// A fractional `points` adds a partial tip, shortened in proportion to
    /// the fraction, at the start and end of the outline. Roundness values
    /// are percentages. A non-positive or non-finite `points` adds nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn add_polystar(
        &mut self,
        points: f64,
        inner_radius: f64,
        outer_radius: f64,
        inner_roundness: f64,
        outer_roundness: f64,
        start_angle: f64,
        cx: f64,
        cy: f64,
        dir: Direction,
    ) {
        if !points.is_finite() || points <= 0.0 || points.ceil() * 2.0 > MAX_SHAPE_POINTS as f64 {
            log::debug!("add_polystar: skipping star with {points} points");
            return;
        }

        let whole = points.trunc();
        let partial_amount = points - whole;
        let partial_radius = if is_zero(partial_amount) {
            None
        } else {
            Some(inner_radius + partial_amount * (outer_radius - inner_radius))
        };
        let num_points = if partial_radius.is_some() {
            (whole as usize + 1) * 2
        } else {
            whole as usize * 2
        };
        if num_points == 0 {
            log::debug!("add_polystar: skipping star with {points} points");
            return;
        }

        let angle_per_point = 2.0 * PI / points;
        let half_angle_per_point = angle_per_point / 2.0;
        let angle_dir = dir.sign();
        let inner_roundness = inner_roundness / 100.0;
        let outer_roundness = outer_roundness / 100.0;
        let has_roundness = !(is_zero(inner_roundness) && is_zero(outer_roundness));
        let center = Point::new(cx, cy);

        let mut current_angle = deg2rad(start_angle - 90.0);
        let mut pt = match partial_radius {
            Some(r) => {
                current_angle += half_angle_per_point * (1.0 - partial_amount) * angle_dir;
                let (sin, cos) = current_angle.sin_cos();
                current_angle += angle_per_point * partial_amount / 2.0 * angle_dir;
                Point::new(r * cos, r * sin)
            }
            None => {
                let (sin, cos) = current_angle.sin_cos();
                current_angle += half_angle_per_point * angle_dir;
                Point::new(outer_radius * cos, outer_radius * sin)
            }
        };

        if let Some((point_hint, element_hint)) = shape_capacity(num_points, has_roundness) {
            self.reserve(point_hint, element_hint);
        }

        self.move_to(pt + center);

        // Alternates with each vertex; the first edge runs to an inner one.
        let mut long_segment = false;
        for i in 0..num_points {
            let mut radius = if long_segment { outer_radius } else { inner_radius };
            let mut d_theta = half_angle_per_point;
            if partial_radius.is_some() && i == num_points - 2 {
                d_theta = angle_per_point * partial_amount / 2.0;
            }
            if let Some(r) = partial_radius.filter(|_| i == num_points - 1) {
                radius = r;
            }

            let prev = pt;
            let (sin, cos) = current_angle.sin_cos();
            pt = Point::new(radius * cos, radius * sin);

            if has_roundness {
                let (r1, rnd1, r2, rnd2) = if long_segment {
                    (inner_radius, inner_roundness, outer_radius, outer_roundness)
                } else {
                    (outer_radius, outer_roundness, inner_radius, inner_roundness)
                };
                let mut scale1 = r1 * rnd1 * POLYSTAR_MAGIC_NUMBER / points;
                let mut scale2 = r2 * rnd2 * POLYSTAR_MAGIC_NUMBER / points;
                if partial_radius.is_some() && (i == 0 || i == num_points - 1) {
                    scale1 *= partial_amount;
                    scale2 *= partial_amount;
                }

                let (cp1, cp2) = tangent_offsets(prev, pt, scale1, scale2, angle_dir);
                self.cubic_to(prev - cp1 + center, pt + cp2 + center, pt + center);
            } else {
                self.line_to(pt + center);
            }

            current_angle += d_theta * angle_dir;
            long_segment = !long_segment;
        }

        self.close();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{calc_distance, calc_polygon_area};
    use crate::path_storage::{PathCommand, PathElement};

    const EPS: f64 = 1e-9;

    fn count(p: &Path, el: PathElement) -> usize {
        p.elements().iter().filter(|&&e| e == el).count()
    }

    /// End points of every move/line/cubic, control points skipped.
    fn on_curve(p: &Path) -> Vec<Point> {
        p.iter()
            .filter_map(|c| match c {
                PathCommand::MoveTo(e) | PathCommand::LineTo(e) => Some(e),
                PathCommand::CubicTo(_, _, e) => Some(e),
                PathCommand::Close => None,
            })
            .collect()
    }

    #[test]
    fn test_polygon_straight_edges() {
        let mut p = Path::new();
        p.add_polygon(5.0, 50.0, 0.0, 0.0, 100.0, 200.0, Direction::Cw);

        assert_eq!(count(&p, PathElement::CubicTo), 0);
        assert_eq!(count(&p, PathElement::LineTo), 5);
        assert_eq!(p.points().len(), 6);
        assert_eq!(*p.elements().last().unwrap(), PathElement::Close);

        let c = Point::new(100.0, 200.0);
        for &pt in p.points() {
            assert!((calc_distance(c, pt) - 50.0).abs() < EPS);
        }
    }

    #[test]
    fn test_polygon_vertex_spacing() {
        let mut p = Path::new();
        p.add_polygon(6.0, 10.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        let pts = p.points();
        // hexagon side equals its radius
        for w in pts.windows(2) {
            assert!((calc_distance(w[0], w[1]) - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_polygon_first_vertex() {
        let mut p = Path::new();
        p.add_polygon(4.0, 100.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        let a = deg2rad(deg2rad(-90.0) - 90.0);
        let first = p.points()[0];
        assert!((first.x - 100.0 * a.cos()).abs() < EPS);
        assert!((first.y - 100.0 * a.sin()).abs() < EPS);
        // just left of 12 o'clock
        assert!(first.x < 0.0 && first.x > -5.0);
        assert!(first.y < -99.0);
    }

    #[test]
    fn test_polygon_fractional_points_floor() {
        let mut p = Path::new();
        p.add_polygon(3.7, 10.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        assert_eq!(count(&p, PathElement::LineTo), 3);
        assert_eq!(p.points().len(), 4);
    }

    #[test]
    fn test_polygon_winding() {
        let mut cw = Path::new();
        cw.add_polygon(5.0, 10.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        let mut ccw = Path::new();
        ccw.add_polygon(5.0, 10.0, 0.0, 0.0, 0.0, 0.0, Direction::Ccw);
        assert!(calc_polygon_area(cw.points()) > 0.0);
        assert!(calc_polygon_area(ccw.points()) < 0.0);
    }

    #[test]
    fn test_rounded_polygon_is_centred() {
        let mut p = Path::new();
        p.add_polygon(3.0, 40.0, 50.0, 0.0, 30.0, -20.0, Direction::Cw);
        assert_eq!(count(&p, PathElement::CubicTo), 3);

        let c = Point::new(30.0, -20.0);
        for pt in on_curve(&p) {
            assert!((calc_distance(c, pt) - 40.0).abs() < 1e-9, "{pt:?}");
        }
        // control points sit on the tangent, 0.25 * radius * roundness away
        let pts = p.points();
        assert!((calc_distance(pts[0], pts[1]) - 5.0).abs() < 1e-9);
        assert!((calc_distance(pts[3], pts[2]) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_polygon_degenerate_counts() {
        let mut p = Path::new();
        p.add_polygon(0.5, 10.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        p.add_polygon(f64::NAN, 10.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        p.add_polygon(f64::INFINITY, 10.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        assert!(p.is_empty());
    }

    #[test]
    fn test_polygon_huge_count_is_skipped() {
        let mut p = Path::new();
        p.add_polygon(1e19, 10.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        p.add_polygon(1e19, 10.0, 50.0, 0.0, 0.0, 0.0, Direction::Cw);
        p.add_polygon(MAX_SHAPE_POINTS as f64 + 1.0, 10.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        assert!(p.is_empty());

        p.add_polygon(MAX_SHAPE_POINTS as f64 + 0.5, 10.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        assert_eq!(count(&p, PathElement::LineTo), MAX_SHAPE_POINTS);
    }

    #[test]
    fn test_shape_capacity_overflow() {
        assert_eq!(shape_capacity(5, false), Some((7, 8)));
        assert_eq!(shape_capacity(5, true), Some((17, 8)));
        assert_eq!(shape_capacity(usize::MAX / 2, true), None);
        assert_eq!(shape_capacity(usize::MAX, false), None);
    }

    #[test]
    fn test_star_straight_edges() {
        let mut p = Path::new();
        p.add_polystar(5.0, 20.0, 50.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);

        assert_eq!(count(&p, PathElement::CubicTo), 0);
        assert_eq!(count(&p, PathElement::LineTo), 10);
        assert_eq!(p.points().len(), 11);

        let origin = Point::ORIGIN;
        for (i, &pt) in p.points().iter().enumerate() {
            let r = if i % 2 == 0 { 50.0 } else { 20.0 };
            assert!((calc_distance(origin, pt) - r).abs() < EPS, "vertex {i}");
        }
        // first tip straight up
        assert!(p.points()[0].x.abs() < EPS);
        assert!((p.points()[0].y + 50.0).abs() < EPS);
    }

    #[test]
    fn test_star_start_angle_and_center() {
        let mut p = Path::new();
        p.add_polystar(4.0, 5.0, 10.0, 0.0, 0.0, 90.0, 100.0, 100.0, Direction::Cw);
        // 90 degrees puts the first tip at 3 o'clock
        let first = p.points()[0];
        assert!((first.x - 110.0).abs() < EPS);
        assert!((first.y - 100.0).abs() < EPS);
    }

    #[test]
    fn test_star_winding() {
        let mut cw = Path::new();
        cw.add_polystar(6.0, 20.0, 40.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        let mut ccw = Path::new();
        ccw.add_polystar(6.0, 20.0, 40.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Ccw);
        let a = calc_polygon_area(cw.points());
        assert!(a > 0.0);
        assert!((a + calc_polygon_area(ccw.points())).abs() < 1e-6);
    }

    #[test]
    fn test_star_fractional_points() {
        let mut p = Path::new();
        p.add_polystar(4.5, 10.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);

        // ceil(4.5) tips, each with an inner vertex, and the outline closes
        // back on the partial tip without an extra line
        assert_eq!(count(&p, PathElement::LineTo), 10);
        assert_eq!(p.points().len(), 11);

        let partial = 10.0 + 0.5 * (30.0 - 10.0);
        let first = p.points()[0];
        let last = p.points()[10];
        assert!((calc_distance(Point::ORIGIN, first) - partial).abs() < EPS);
        assert!((first.x - last.x).abs() < 1e-9 && (first.y - last.y).abs() < 1e-9);
    }

    #[test]
    fn test_star_below_one_point() {
        let mut p = Path::new();
        p.add_polystar(0.5, 10.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        assert_eq!(p.points().len(), 3);
    }

    #[test]
    fn test_star_rounded() {
        let mut p = Path::new();
        p.add_polystar(5.0, 20.0, 50.0, 30.0, 60.0, 0.0, -5.0, 5.0, Direction::Ccw);
        assert_eq!(count(&p, PathElement::CubicTo), 10);
        assert_eq!(count(&p, PathElement::LineTo), 0);

        let c = Point::new(-5.0, 5.0);
        for (i, pt) in on_curve(&p).into_iter().enumerate() {
            let r = if i % 2 == 0 { 50.0 } else { 20.0 };
            assert!((calc_distance(c, pt) - r).abs() < 1e-9, "vertex {i}");
        }

        // outer tangent length: 50 * 0.6 * magic / 5
        let pts = p.points();
        let expected = 50.0 * 0.6 * POLYSTAR_MAGIC_NUMBER / 5.0;
        assert!((calc_distance(pts[0], pts[1]) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_star_degenerate_counts() {
        let mut p = Path::new();
        p.add_polystar(0.0, 10.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        p.add_polystar(-3.0, 10.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        p.add_polystar(f64::NAN, 10.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        p.add_polystar(1e-9, 10.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        assert!(p.is_empty());
    }

    #[test]
    fn test_star_huge_count_is_skipped() {
        let mut p = Path::new();
        p.add_polystar(1e19, 10.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        p.add_polystar(1e19, 10.0, 30.0, 20.0, 20.0, 0.0, 0.0, 0.0, Direction::Cw);
        p.add_polystar(1e19 + 0.5, 10.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        let half = (MAX_SHAPE_POINTS / 2) as f64;
        p.add_polystar(half + 0.5, 10.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        assert!(p.is_empty());

        p.add_polystar(half, 10.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, Direction::Cw);
        assert_eq!(count(&p, PathElement::LineTo), MAX_SHAPE_POINTS);
    }

    #[test]
    fn test_star_partial_point_roundness() {
        let points = 4.5;
        let (inner, outer) = (10.0, 30.0);
        let (inner_rnd, outer_rnd) = (0.4, 0.6);
        let mut p = Path::new();
        p.add_polystar(points, inner, outer, 40.0, 60.0, 0.0, 0.0, 0.0, Direction::Cw);

        // 5 tips with an inner vertex each, closing on the partial tip
        assert_eq!(count(&p, PathElement::CubicTo), 10);
        assert_eq!(count(&p, PathElement::LineTo), 0);
        assert_eq!(p.elements().len(), 12);
        let pts = p.points();
        assert_eq!(pts.len(), 31);
        assert!(calc_distance(pts[0], pts[30]) < 1e-9);

        let outer_len = outer * outer_rnd * POLYSTAR_MAGIC_NUMBER / points;
        let inner_len = inner * inner_rnd * POLYSTAR_MAGIC_NUMBER / points;
        let tangent = |from: usize, to: usize| calc_distance(pts[from], pts[to]);

        // edges leaving and entering the partial tip are scaled by 0.5
        assert!((tangent(0, 1) - outer_len * 0.5).abs() < 1e-9);
        assert!((tangent(3, 2) - inner_len * 0.5).abs() < 1e-9);
        assert!((tangent(27, 28) - inner_len * 0.5).abs() < 1e-9);
        assert!((tangent(30, 29) - outer_len * 0.5).abs() < 1e-9);

        // interior edges keep full length
        assert!((tangent(3, 4) - inner_len).abs() < 1e-9);
        assert!((tangent(6, 5) - outer_len).abs() < 1e-9);
        assert!((tangent(24, 25) - outer_len).abs() < 1e-9);
        assert!((tangent(27, 26) - inner_len).abs() < 1e-9);
    }
}
