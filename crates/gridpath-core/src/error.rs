//! Error types for grid construction and editing.

use std::fmt;

use crate::Point;

/// Errors arising from grid construction or obstacle edits.
///
/// These are user-input errors: the offending operation is a no-op and
/// the caller may retry with valid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside the grid.
    OutOfBounds {
        /// The offending coordinate.
        pos: Point,
        /// Grid width.
        width: i32,
        /// Grid height.
        height: i32,
    },
    /// Attempted to construct a grid with a non-positive dimension.
    InvalidDimensions { width: i32, height: i32 },
    /// Attempted to mark the start or end cell as an obstacle.
    InvalidEdit {
        /// The start or end coordinate that was targeted.
        pos: Point,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "coordinate {pos} out of bounds for {width}x{height} grid")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::InvalidEdit { pos } => {
                write!(f, "cannot place an obstacle on the start or end cell {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
