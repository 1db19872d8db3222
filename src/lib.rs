//! # vpath
//!
//! Vector path construction for 2D renderers.
//!
//! A [`Path`] is an ordered list of move/line/cubic/close elements and the
//! points they consume. On top of the raw buffer it provides:
//!
//! - Elliptical arcs approximated by at most four cubic Bezier curves
//! - Rectangles and rounded rectangles
//! - Ovals and circles
//! - Regular polygons and stars, optionally rounded, with fractional points
//! - Affine transformation, arc length and bounding boxes
//! - A [`VertexSource`] view for scanline rasterizers
//!
//! ## Coordinates
//!
//! Screen convention: `y` grows downward. Angles are in degrees with
//! 0 at 3 o'clock; positive arc sweeps run counter-clockwise on screen.
//! [`Direction::Cw`] shapes are clockwise on screen.
//!
//! ## Logging
//!
//! Degenerate input (null rectangles, non-finite angles, empty polygons)
//! is skipped and reported through the [`log`] facade at `debug` level.

// Foundation types & math
pub mod basics;
pub mod error;
pub mod math;
pub mod trans_affine;

// Curves
pub mod bezier;
pub mod bezier_arc;

// Path buffer
pub mod bounding_rect;
pub mod path_storage;

// Shape builders
pub mod ellipse;
pub mod polystar;
pub mod rounded_rect;

pub use basics::{Direction, Point, Rect, VertexSource};
pub use bezier::Bezier;
pub use bezier_arc::{curves_for_arc, find_ellipse_coords, t_for_arc_angle, ArcCurves};
pub use error::{PathError, Result};
pub use path_storage::{Path, PathCommand, PathElement, PathIter, PathVertices};
pub use trans_affine::TransAffine;
