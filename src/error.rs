//! Errors reported when importing raw path data.
//!
//! Geometry builders never fail; malformed shapes degrade to empty or
//! simpler output. Only structural input (raw element/point streams and
//! foreign vertex sources) is validated.

use thiserror::Error;

/// Structural problems found while importing path data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    /// The element tags consume a different number of points than supplied.
    #[error("path elements consume {expected} points but {actual} were supplied")]
    PointCountMismatch { expected: usize, actual: usize },

    /// A drawing or close element appears before any move_to of its subpath.
    #[error("element {index} has no preceding move_to in its subpath")]
    MissingMoveTo { index: usize },

    /// A vertex source produced a command with no path element equivalent.
    #[error("unsupported vertex command {0:#x}")]
    UnsupportedCommand(u32),

    /// A cubic curve ended before all three of its vertices were read.
    #[error("curve starting at vertex {index} is missing control points")]
    TruncatedCurve { index: usize },
}

pub type Result<T> = std::result::Result<T, PathError>;
