//! Scalar math helpers.
//!
//! Fuzzy comparisons used throughout path construction, angle conversion,
//! and the few distance/area routines the builders and tests rely on.

use crate::basics::Point;

// ============================================================================
// Constants
// ============================================================================

/// Tolerance for fuzzy float comparison.
///
/// Trigonometric construction of arcs, polygons and stars accumulates
/// rounding error; two coordinates closer than this are the same point.
pub const FLOAT_EPSILON: f64 = 1e-6;

pub const PI: f64 = std::f64::consts::PI;

// ============================================================================
// Fuzzy comparison
// ============================================================================

/// Returns `true` if `v` is within [`FLOAT_EPSILON`] of zero.
#[inline]
pub fn is_zero(v: f64) -> bool {
    v.abs() <= FLOAT_EPSILON
}

/// Returns `true` if `a` and `b` differ by less than [`FLOAT_EPSILON`].
#[inline]
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < FLOAT_EPSILON
}

/// Component-wise fuzzy equality of two points.
#[inline]
pub fn fuzzy_compare(p1: Point, p2: Point) -> bool {
    fuzzy_eq(p1.x, p2.x) && fuzzy_eq(p1.y, p2.y)
}

// ============================================================================
// Angles
// ============================================================================

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

// ============================================================================
// Distances and areas
// ============================================================================

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Signed area of the closed polygon through `vertices` (shoelace formula).
///
/// Positive for counter-clockwise order in a y-up frame, which is clockwise
/// on screen where y grows downward.
pub fn calc_polygon_area(vertices: &[Point]) -> f64 {
    if vertices.is_empty() {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut x = vertices[0].x;
    let mut y = vertices[0].y;
    let xs = x;
    let ys = y;

    for v in &vertices[1..] {
        sum += x * v.y - y * v.x;
        x = v.x;
        y = v.y;
    }
    (sum + x * ys - y * xs) * 0.5
}

// ============================================================================
// Tests
// ============================================================================
