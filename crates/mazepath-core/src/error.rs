use std::fmt;

use crate::Coord;

/// Errors raised when a maze is built or addressed with invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has zero rows or zero columns.
    Empty,
    /// A row's length differs from the first row's.
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The cell count does not fit the `i32` coordinate space.
    TooLarge { rows: usize, cols: usize },
    /// A coordinate lies outside the grid.
    OutOfBounds { at: Coord, rows: i32, cols: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::Jagged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not rectangular: row {row} has {found} cells, expected {expected}"
            ),
            Self::TooLarge { rows, cols } => {
                write!(f, "grid of {rows}x{cols} cells is too large")
            }
            Self::OutOfBounds { at, rows, cols } => {
                write!(f, "coordinate {at} is outside the {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}
