//! A rectangular grid of open and blocked cells.
//!
//! [`Maze`] stores one traversability flag per cell in a flat row-major
//! buffer. It is plain owned data: searches borrow it immutably, and it can
//! be shared between threads.

use crate::{Coord, GridError};

/// A `rows × cols` grid where each cell is either open or blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: i32,
    cols: i32,
    /// `true` = blocked, row-major.
    blocked: Vec<bool>,
}

impl Maze {
    /// Create a maze with every cell open.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let (r, c, len) = dimensions(rows, cols)?;
        Ok(Self {
            rows: r,
            cols: c,
            blocked: vec![false; len],
        })
    }

    /// Build a maze from rows of blocked flags (`true` = blocked).
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        let (r, c, len) = dimensions(rows.len(), width)?;
        let mut blocked = Vec::with_capacity(len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Jagged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            blocked.extend_from_slice(row);
        }
        Ok(Self {
            rows: r,
            cols: c,
            blocked,
        })
    }

    /// Build a maze from a `0`/`1` cell matrix: `0` is open, anything else
    /// is a wall.
    pub fn from_cells(cells: &[Vec<u8>]) -> Result<Self, GridError> {
        Self::from_rows(
            cells
                .iter()
                .map(|row| row.iter().map(|&c| c != 0).collect())
                .collect(),
        )
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Fail with [`GridError::OutOfBounds`] unless `c` lies inside the grid.
    pub fn check_bounds(&self, c: Coord) -> Result<(), GridError> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                at: c,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row * self.cols + c.col) as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        let idx = idx as i32;
        Coord::new(idx / self.cols, idx % self.cols)
    }

    /// Whether the cell at `c` is blocked. Cells outside the grid read as
    /// blocked.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        match self.index(c) {
            Some(i) => self.blocked[i],
            None => true,
        }
    }

    /// Whether `c` is inside the grid and open.
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        !self.is_blocked(c)
    }

    /// Set the cell at `c`. Does nothing if out of bounds.
    pub fn set_blocked(&mut self, c: Coord, blocked: bool) {
        if let Some(i) = self.index(c) {
            self.blocked[i] = blocked;
        }
    }

    /// Flip the cell at `c` between open and blocked. Does nothing if out
    /// of bounds.
    ///
    /// This is the editing primitive for interactive front ends; the
    /// `mazepath` binary never edits a loaded maze.
    pub fn toggle(&mut self, c: Coord) {
        if let Some(i) = self.index(c) {
            self.blocked[i] = !self.blocked[i];
        }
    }

    /// Set every cell to the same state.
    pub fn fill(&mut self, blocked: bool) {
        self.blocked.fill(blocked);
    }

    /// Count open cells.
    pub fn count_open(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    /// Iterate over `(Coord, blocked)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .map(|(i, &b)| (self.coord(i), b))
    }

    /// Copy the grid out as rows of blocked flags.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.blocked
            .chunks(self.cols as usize)
            .map(<[bool]>::to_vec)
            .collect()
    }
}

/// Validate grid dimensions. Every flat index must fit in an `i32`, since
/// [`Maze::index`] computes it from coordinates.
fn dimensions(rows: usize, cols: usize) -> Result<(i32, i32, usize), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::Empty);
    }
    let len = rows
        .checked_mul(cols)
        .filter(|&n| i32::try_from(n).is_ok())
        .ok_or(GridError::TooLarge { rows, cols })?;
    // Each side is at most `len`, so both casts are lossless.
    Ok((rows as i32, cols as i32, len))
}

// Serialized as rows of blocked flags so that deserialization goes through
// `from_rows` and cannot produce a malformed grid.
#[cfg(feature = "serde")]
impl serde::Serialize for Maze {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_rows(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <Vec<Vec<bool>> as serde::Deserialize>::deserialize(deserializer)?;
        Maze::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
