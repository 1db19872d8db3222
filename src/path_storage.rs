//! Path storage: the element/point container every shape builder writes.
//!
//! A [`Path`] keeps two parallel streams: element tags and the points they
//! consume (1 for move/line, 3 for cubic, 0 for close). Subpath bookkeeping
//! is an explicit state machine, so a drawing call without a preceding
//! `move_to` opens a subpath at the origin and a `close` with nothing open
//! does nothing.
//!
//! A path is mutated only through `&mut self`; sharing a finished path
//! across threads is up to the owner.

use crate::basics::{
    is_close, is_end_poly, is_stop, Point, Rect, VertexSource, PATH_CMD_CURVE4, PATH_CMD_END_POLY,
    PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP, PATH_FLAGS_CLOSE,
};
use crate::bezier::Bezier;
use crate::bezier_arc::curves_for_arc;
use crate::bounding_rect::bounding_rect_single;
use crate::error::{PathError, Result};
use crate::math::fuzzy_compare;
use crate::trans_affine::TransAffine;

// ============================================================================
// Elements and commands
// ============================================================================

/// Element tag stored in a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathElement {
    MoveTo,
    LineTo,
    CubicTo,
    Close,
}

impl PathElement {
    /// Number of points this element consumes from the point stream.
    #[inline]
    pub fn point_count(self) -> usize {
        match self {
            PathElement::MoveTo | PathElement::LineTo => 1,
            PathElement::CubicTo => 3,
            PathElement::Close => 0,
        }
    }
}

/// An element together with its points, as yielded by [`Path::iter`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// Where the path is with respect to its current subpath.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SubpathState {
    /// Nothing has been appended since creation or the last reset.
    Empty,
    /// A move_to started a subpath at `start` that is not yet closed.
    Open { start: Point },
    /// The last subpath was closed; drawing reopens at the origin.
    Closed,
}

// ============================================================================
// Path
// ============================================================================

/// Ordered sequence of move/line/cubic/close elements and their points.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
    points: Vec<Point>,
    move_count: usize,
    state: SubpathState,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            points: Vec::new(),
            move_count: 0,
            state: SubpathState::Empty,
        }
    }

    /// Build a path from raw element and point streams, checking that the
    /// point count matches the tags and that every subpath starts with a
    /// move_to.
    pub fn from_parts(elements: Vec<PathElement>, points: Vec<Point>) -> Result<Self> {
        let expected: usize = elements.iter().map(|e| e.point_count()).sum();
        if expected != points.len() {
            return Err(PathError::PointCountMismatch {
                expected,
                actual: points.len(),
            });
        }

        let mut state = SubpathState::Empty;
        let mut move_count = 0;
        let mut pi = 0;
        for (index, &el) in elements.iter().enumerate() {
            match el {
                PathElement::MoveTo => {
                    state = SubpathState::Open { start: points[pi] };
                    move_count += 1;
                }
                PathElement::LineTo | PathElement::CubicTo | PathElement::Close => {
                    if !matches!(state, SubpathState::Open { .. }) {
                        return Err(PathError::MissingMoveTo { index });
                    }
                    if el == PathElement::Close {
                        state = SubpathState::Closed;
                    }
                }
            }
            pi += el.point_count();
        }

        Ok(Self {
            elements,
            points,
            move_count,
            state,
        })
    }

    /// Build a path by draining a vertex source.
    ///
    /// `curve4` runs become cubics and closing `end_poly` commands become
    /// `close`. Quadratic and spline commands are rejected.
    pub fn from_vertex_source(vs: &mut dyn VertexSource) -> Result<Self> {
        let mut path = Path::new();
        let (mut x, mut y) = (0.0, 0.0);
        let mut index = 0;

        vs.rewind(0);
        loop {
            let cmd = vs.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            match cmd {
                PATH_CMD_MOVE_TO => path.move_to(Point::new(x, y)),
                PATH_CMD_LINE_TO => path.line_to(Point::new(x, y)),
                PATH_CMD_CURVE4 => {
                    let c1 = Point::new(x, y);
                    let mut rest = [Point::ORIGIN; 2];
                    for p in rest.iter_mut() {
                        if vs.vertex(&mut x, &mut y) != PATH_CMD_CURVE4 {
                            return Err(PathError::TruncatedCurve { index });
                        }
                        *p = Point::new(x, y);
                    }
                    path.cubic_to(c1, rest[0], rest[1]);
                    index += 2;
                }
                c if is_end_poly(c) => {
                    if is_close(c) {
                        path.close();
                    }
                }
                c => return Err(PathError::UnsupportedCommand(c)),
            }
            index += 1;
        }

        Ok(path)
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// Returns `true` if no element has been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element tags in order.
    #[inline]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Points in order, consumed by the elements as described on
    /// [`PathElement::point_count`].
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of move_to calls issued, plus one.
    ///
    /// The extra one is kept for compatibility with consumers sized by the
    /// historical count.
    #[inline]
    pub fn segments(&self) -> usize {
        self.move_count + 1
    }

    /// Iterate elements together with their points.
    pub fn iter(&self) -> PathIter<'_> {
        PathIter {
            elements: self.elements.iter(),
            points: &self.points,
        }
    }

    /// Vertex source view of the path for scanline rasterizers.
    pub fn vertices(&self) -> PathVertices<'_> {
        PathVertices {
            path: self,
            element: 0,
            point: 0,
            curve_left: 0,
        }
    }

    /// Bounds of all stored points, control points included. `None` when
    /// empty.
    pub fn bounding_rect(&self) -> Option<Rect> {
        bounding_rect_single(&mut self.vertices(), 0)
    }

    // ---------------------------------------------------------------
    // Path construction
    // ---------------------------------------------------------------

    /// Start a new subpath at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.state = SubpathState::Open { start: p };
        self.elements.push(PathElement::MoveTo);
        self.points.push(p);
        self.move_count += 1;
    }

    /// Add a straight line to `p`.
    pub fn line_to(&mut self, p: Point) {
        self.check_new_segment();
        self.elements.push(PathElement::LineTo);
        self.points.push(p);
    }

    /// Add a cubic Bezier curve with control points `c1`, `c2` ending at `e`.
    pub fn cubic_to(&mut self, c1: Point, c2: Point, e: Point) {
        self.check_new_segment();
        self.elements.push(PathElement::CubicTo);
        self.points.push(c1);
        self.points.push(c2);
        self.points.push(e);
    }

    /// Close the current subpath.
    ///
    /// Adds a line back to the subpath start unless the last point already
    /// coincides with it. Does nothing when no subpath is open.
    pub fn close(&mut self) {
        let SubpathState::Open { start } = self.state else {
            return;
        };

        if let Some(&last) = self.points.last() {
            if !fuzzy_compare(start, last) {
                self.line_to(start);
            }
        }
        self.elements.push(PathElement::Close);
        self.state = SubpathState::Closed;
    }

    /// Remove all elements and points (keeps allocated memory).
    pub fn reset(&mut self) {
        if self.is_empty() {
            return;
        }
        self.elements.clear();
        self.points.clear();
        self.move_count = 0;
        self.state = SubpathState::Empty;
    }

    /// Reserve room for `points` more points and `elements` more elements.
    /// Never shrinks.
    pub fn reserve(&mut self, points: usize, elements: usize) {
        self.points.reserve(points);
        self.elements.reserve(elements);
    }

    /// Append an elliptical arc of the ellipse inscribed in `rect`.
    ///
    /// Angles are in degrees, positive sweeps run counter-clockwise on
    /// screen. The arc is joined to the current point with a line unless the
    /// path is empty or `force_move_to` is set, in which case it starts a new
    /// subpath.
    pub fn arc_to(&mut self, rect: &Rect, start_angle: f64, sweep_length: f64, force_move_to: bool) {
        let arc = curves_for_arc(rect, start_angle, sweep_length);

        self.reserve(arc.points().len() + 1, arc.num_curves() + 1);
        if self.is_empty() || force_move_to {
            self.move_to(arc.start());
        } else {
            self.line_to(arc.start());
        }
        for (c1, c2, e) in arc.curves() {
            self.cubic_to(c1, c2, e);
        }
    }

    /// Append all of `other`'s elements. The subpath state continues from
    /// the end of `other`.
    pub fn add_path(&mut self, other: &Path) {
        if other.is_empty() {
            return;
        }
        self.reserve(other.points.len(), other.elements.len());
        self.elements.extend_from_slice(&other.elements);
        self.points.extend_from_slice(&other.points);
        self.move_count += other.move_count;
        self.state = other.state;
    }

    /// Append `other` with every point mapped through `m`.
    pub fn add_path_transformed(&mut self, other: &Path, m: &TransAffine) {
        if other.is_empty() {
            return;
        }
        self.reserve(other.points.len(), other.elements.len());
        self.elements.extend_from_slice(&other.elements);
        self.points.extend(other.points.iter().map(|&p| m.map(p)));
        self.move_count += other.move_count;
        self.state = match other.state {
            SubpathState::Open { start } => SubpathState::Open {
                start: m.map(start),
            },
            s => s,
        };
    }

    // ---------------------------------------------------------------
    // Whole-path operations
    // ---------------------------------------------------------------

    /// Map every stored point through `m`. Element tags are untouched.
    pub fn transform(&mut self, m: &TransAffine) {
        for p in &mut self.points {
            *p = m.map(*p);
        }
        if let SubpathState::Open { start } = self.state {
            self.state = SubpathState::Open {
                start: m.map(start),
            };
        }
    }

    /// Total arc length of all lines and curves.
    ///
    /// Lines are measured as degenerate cubics; closes add nothing because
    /// the closing line was stored when the subpath was closed.
    pub fn length(&self) -> f64 {
        let mut len = 0.0;
        let mut current = Point::ORIGIN;
        for cmd in self.iter() {
            match cmd {
                PathCommand::MoveTo(p) => current = p,
                PathCommand::LineTo(p) => {
                    len += Bezier::from_points(current, current, p, p).length();
                    current = p;
                }
                PathCommand::CubicTo(c1, c2, p) => {
                    len += Bezier::from_points(current, c1, c2, p).length();
                    current = p;
                }
                PathCommand::Close => {}
            }
        }
        len
    }

    /// Opens a subpath at the origin if none is open.
    fn check_new_segment(&mut self) {
        if !matches!(self.state, SubpathState::Open { .. }) {
            self.move_to(Point::ORIGIN);
        }
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = PathCommand;
    type IntoIter = PathIter<'a>;

    fn into_iter(self) -> PathIter<'a> {
        self.iter()
    }
}

// ============================================================================
// Iteration
// ============================================================================

/// Iterator over the [`PathCommand`]s of a path.
pub struct PathIter<'a> {
    elements: std::slice::Iter<'a, PathElement>,
    points: &'a [Point],
}

impl Iterator for PathIter<'_> {
    type Item = PathCommand;

    fn next(&mut self) -> Option<PathCommand> {
        let el = *self.elements.next()?;
        let (taken, rest) = self.points.split_at(el.point_count());
        self.points = rest;
        Some(match el {
            PathElement::MoveTo => PathCommand::MoveTo(taken[0]),
            PathElement::LineTo => PathCommand::LineTo(taken[0]),
            PathElement::CubicTo => PathCommand::CubicTo(taken[0], taken[1], taken[2]),
            PathElement::Close => PathCommand::Close,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl ExactSizeIterator for PathIter<'_> {}

/// Vertex source adaptor over a borrowed [`Path`].
///
/// Emits `move_to`, `line_to`, three `curve4` vertices per cubic, and
/// `end_poly | close` for each close.
pub struct PathVertices<'a> {
    path: &'a Path,
    element: usize,
    point: usize,
    curve_left: usize,
}

impl PathVertices<'_> {
    fn emit_point(&mut self, x: &mut f64, y: &mut f64) {
        let p = self.path.points[self.point];
        *x = p.x;
        *y = p.y;
        self.point += 1;
    }
}

impl VertexSource for PathVertices<'_> {
    fn rewind(&mut self, _path_id: u32) {
        self.element = 0;
        self.point = 0;
        self.curve_left = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.curve_left > 0 {
            self.curve_left -= 1;
            self.emit_point(x, y);
            return PATH_CMD_CURVE4;
        }

        let Some(&el) = self.path.elements.get(self.element) else {
            return PATH_CMD_STOP;
        };
        self.element += 1;

        match el {
            PathElement::MoveTo => {
                self.emit_point(x, y);
                PATH_CMD_MOVE_TO
            }
            PathElement::LineTo => {
                self.emit_point(x, y);
                PATH_CMD_LINE_TO
            }
            PathElement::CubicTo => {
                self.curve_left = 2;
                self.emit_point(x, y);
                PATH_CMD_CURVE4
            }
            PathElement::Close => {
                *x = 0.0;
                *y = 0.0;
                PATH_CMD_END_POLY | PATH_FLAGS_CLOSE
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
