use std::fmt;

use mazepath_core::{Coord, GridError};

/// Which end of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

/// Invalid input to [`find_path`](crate::find_path).
///
/// An unreachable goal is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The grid rejected a coordinate.
    Grid(GridError),
    /// The start or goal cell is a wall.
    Blocked { endpoint: Endpoint, at: Coord },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid grid input: {e}"),
            Self::Blocked { endpoint, at } => write!(f, "{endpoint} cell {at} is blocked"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Blocked { .. } => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
